// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated mug name type.
//!
//! The name characteristic is a fixed 14-byte field, the last byte of which
//! is reserved for the terminator, so the encoded name must stay strictly
//! below 14 bytes. A constructed `MugName` is guaranteed encodable.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A mug name that satisfies the device's constraints.
///
/// Rules, checked in priority order at construction:
///
/// 1. non-empty ([`ValidationError::Empty`])
/// 2. ASCII only ([`ValidationError::NotAscii`])
/// 3. no space characters ([`ValidationError::ContainsSpace`])
/// 4. encoded length strictly below 14 bytes ([`ValidationError::TooLong`])
///
/// Leading and trailing whitespace is stripped before validation, so a
/// whitespace-only input is rejected as empty rather than written out as an
/// all-padding payload that would erase the mug's name.
///
/// # Examples
///
/// ```
/// use embermug::MugName;
///
/// let name = MugName::new("Calcifer").unwrap();
/// assert_eq!(name.as_str(), "Calcifer");
///
/// assert!(MugName::new("my mug").is_err());
/// assert!(MugName::new("Fourteen-bytes").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MugName(String);

impl MugName {
    /// Characteristic payload size; the encoded name must be shorter.
    pub const MAX_BYTES: usize = 14;

    /// Validates and creates a mug name.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: [`ValidationError::Empty`],
    /// [`ValidationError::NotAscii`], [`ValidationError::ContainsSpace`],
    /// or [`ValidationError::TooLong`].
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        if !trimmed.is_ascii() {
            return Err(ValidationError::NotAscii);
        }
        if trimmed.contains(' ') {
            return Err(ValidationError::ContainsSpace);
        }
        if trimmed.len() >= Self::MAX_BYTES {
            return Err(ValidationError::TooLong {
                actual: trimmed.len(),
                max: Self::MAX_BYTES,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the validated name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name's ASCII bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for MugName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MugName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        for raw in ["Calcifer", "a", "kettle-2", "1234567890123", "  padded  "] {
            let name = MugName::new(raw).unwrap();
            assert_eq!(name.as_str(), raw.trim());
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(MugName::new("").unwrap_err(), ValidationError::Empty);
    }

    #[test]
    fn rejects_whitespace_only_input() {
        // Trims to nothing; writing it would blank the mug's name.
        for raw in [" ", "   ", "\t", " \t "] {
            assert_eq!(MugName::new(raw).unwrap_err(), ValidationError::Empty, "{raw:?}");
        }
    }

    #[test]
    fn rejects_non_ascii() {
        let result = MugName::new("café");
        assert_eq!(result.unwrap_err(), ValidationError::NotAscii);
    }

    #[test]
    fn rejects_spaces() {
        let result = MugName::new("my mug");
        assert_eq!(result.unwrap_err(), ValidationError::ContainsSpace);
    }

    #[test]
    fn rejects_fourteen_bytes_or_more() {
        // Exactly 14 bytes is already too long: the terminator needs a byte.
        let result = MugName::new("12345678901234");
        assert_eq!(
            result.unwrap_err(),
            ValidationError::TooLong { actual: 14, max: 14 }
        );
        assert!(MugName::new("123456789012345").is_err());
        assert!(MugName::new("1234567890123").is_ok());
    }

    #[test]
    fn ascii_check_takes_priority() {
        // Non-ASCII, contains a space, and is too long; the ASCII rule wins.
        let result = MugName::new("ééééééé ééééééééééé");
        assert_eq!(result.unwrap_err(), ValidationError::NotAscii);
    }

    #[test]
    fn space_check_beats_length_check() {
        let result = MugName::new("a very long mug name");
        assert_eq!(result.unwrap_err(), ValidationError::ContainsSpace);
    }
}
