// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature values paired with their unit.
//!
//! A raw mug reading is meaningless without the unit the mug was configured
//! to at the time, so the two always travel together. Conversion between
//! units is explicit and lossy (rounded to the protocol resolution); it is
//! never applied implicitly.

use std::fmt;

use serde::Serialize;

use crate::convert;
use crate::types::TemperatureUnit;

/// A temperature reading together with the unit it is expressed in.
///
/// # Examples
///
/// ```
/// use embermug::{Temperature, TemperatureUnit};
///
/// let temp = Temperature::new(55.0, TemperatureUnit::Celsius);
/// assert_eq!(temp.value(), 55.0);
/// assert_eq!(temp.to_fahrenheit().value(), 131.0);
/// assert_eq!(temp.to_string(), "55.0 °C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Temperature {
    value: f64,
    unit: TemperatureUnit,
}

impl Temperature {
    /// Creates a temperature in the given unit.
    #[must_use]
    pub const fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    /// Returns the numeric value in this temperature's own unit.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit this temperature is expressed in.
    #[must_use]
    pub const fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Converts to the requested unit, rounding to the protocol resolution.
    ///
    /// Converting to the current unit is the identity and does not round.
    #[must_use]
    pub fn to_unit(&self, unit: TemperatureUnit) -> Self {
        if unit == self.unit {
            return *self;
        }
        let value = match unit {
            TemperatureUnit::Celsius => convert::to_celsius(self.value),
            TemperatureUnit::Fahrenheit => convert::to_fahrenheit(self.value),
        };
        Self { value, unit }
    }

    /// Converts to degrees Celsius.
    #[must_use]
    pub fn to_celsius(&self) -> Self {
        self.to_unit(TemperatureUnit::Celsius)
    }

    /// Converts to degrees Fahrenheit.
    #[must_use]
    pub fn to_fahrenheit(&self) -> Self {
        self.to_unit(TemperatureUnit::Fahrenheit)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} °{}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_changes_unit_and_value() {
        let temp = Temperature::new(0.0, TemperatureUnit::Celsius);
        let f = temp.to_fahrenheit();
        assert_eq!(f.unit(), TemperatureUnit::Fahrenheit);
        assert_eq!(f.value(), 32.0);
    }

    #[test]
    fn conversion_to_same_unit_is_identity() {
        let temp = Temperature::new(56.75, TemperatureUnit::Celsius);
        assert_eq!(temp.to_celsius(), temp);
    }

    #[test]
    fn display_uses_protocol_resolution() {
        let temp = Temperature::new(131.06, TemperatureUnit::Fahrenheit);
        assert_eq!(temp.to_string(), "131.1 °F");
    }
}
