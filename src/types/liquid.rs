// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Liquid state reported by the mug.

use std::fmt;

use serde::Serialize;

/// What the mug believes its contents are doing.
///
/// Unrecognized raw values map to [`LiquidState::Unknown`] rather than
/// failing the whole status decode; newer firmware adds states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LiquidState {
    /// The mug is empty.
    Empty,
    /// Liquid was just poured in.
    Filling,
    /// The contents are cooling towards the target.
    Cooling,
    /// The heater is raising the contents towards the target.
    Heating,
    /// The contents are at the target temperature.
    AtTemperature,
    /// The firmware reported a state this library does not know.
    Unknown,
}

impl LiquidState {
    /// Decodes the raw state byte.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Empty,
            2 => Self::Filling,
            4 => Self::Cooling,
            5 => Self::Heating,
            6 => Self::AtTemperature,
            _ => Self::Unknown,
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Filling => "Filling",
            Self::Cooling => "Cooling",
            Self::Heating => "Heating",
            Self::AtTemperature => "At Temperature",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LiquidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_raw_values() {
        assert_eq!(LiquidState::from_raw(1), LiquidState::Empty);
        assert_eq!(LiquidState::from_raw(2), LiquidState::Filling);
        assert_eq!(LiquidState::from_raw(4), LiquidState::Cooling);
        assert_eq!(LiquidState::from_raw(5), LiquidState::Heating);
        assert_eq!(LiquidState::from_raw(6), LiquidState::AtTemperature);
    }

    #[test]
    fn unrecognized_raw_values_are_unknown() {
        for raw in [0, 3, 7, 255] {
            assert_eq!(LiquidState::from_raw(raw), LiquidState::Unknown);
        }
    }
}
