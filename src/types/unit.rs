// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature unit type.
//!
//! The mug reports every temperature relative to its currently configured
//! unit, so the unit is carried alongside every reading and command instead
//! of being assumed.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// The temperature scale a mug value is expressed in.
///
/// # Examples
///
/// ```
/// use embermug::TemperatureUnit;
///
/// let unit: TemperatureUnit = "c".parse().unwrap();
/// assert_eq!(unit, TemperatureUnit::Celsius);
/// assert_eq!(unit.to_string(), "C");
///
/// assert!("kelvin".parse::<TemperatureUnit>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Returns the single-letter token used on the CLI and in displays.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }

    /// Returns the flag byte the mug's unit characteristic uses.
    #[must_use]
    pub const fn as_flag(self) -> u8 {
        match self {
            Self::Celsius => 0,
            Self::Fahrenheit => 1,
        }
    }

    /// Decodes the unit characteristic's flag byte.
    ///
    /// The firmware treats any non-zero flag as Fahrenheit.
    #[must_use]
    pub const fn from_flag(flag: u8) -> Self {
        if flag == 0 { Self::Celsius } else { Self::Fahrenheit }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" | "CELSIUS" => Ok(Self::Celsius),
            "F" | "FAHRENHEIT" => Ok(Self::Fahrenheit),
            _ => Err(ValidationError::UnknownUnit(s.to_string())),
        }
    }
}
