// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated target temperature command value.
//!
//! The mug only accepts targets inside its physical safe range. The bounds
//! are defined per unit rather than by normalizing to one canonical unit
//! first, which would introduce a second rounding step.

use std::fmt;

use crate::error::ValidationError;
use crate::types::{Temperature, TemperatureUnit};

/// A target temperature that is inside the mug's safe range.
///
/// Bounds are exclusive on both ends, per unit:
///
/// - Celsius: 32 < x < 93
/// - Fahrenheit: 90 < x < 200
///
/// # Examples
///
/// ```
/// use embermug::{TargetTemperature, TemperatureUnit};
///
/// let target = TargetTemperature::new(55.0, TemperatureUnit::Celsius).unwrap();
/// assert_eq!(target.temperature().value(), 55.0);
///
/// // Boundary values are rejected.
/// assert!(TargetTemperature::new(93.0, TemperatureUnit::Celsius).is_err());
/// assert!(TargetTemperature::new(90.0, TemperatureUnit::Fahrenheit).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTemperature(Temperature);

impl TargetTemperature {
    /// Exclusive safe range in degrees Celsius.
    pub const CELSIUS_RANGE: (f64, f64) = (32.0, 93.0);

    /// Exclusive safe range in degrees Fahrenheit.
    pub const FAHRENHEIT_RANGE: (f64, f64) = (90.0, 200.0);

    /// Validates and creates a target temperature.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] if `value` is non-finite or
    /// outside the unit's exclusive bounds.
    pub fn new(value: f64, unit: TemperatureUnit) -> Result<Self, ValidationError> {
        let (min, max) = Self::bounds(unit);
        if !value.is_finite() || value <= min || value >= max {
            return Err(ValidationError::OutOfRange { value, unit, min, max });
        }
        Ok(Self(Temperature::new(value, unit)))
    }

    /// Returns the exclusive bounds for the given unit.
    #[must_use]
    pub const fn bounds(unit: TemperatureUnit) -> (f64, f64) {
        match unit {
            TemperatureUnit::Celsius => Self::CELSIUS_RANGE,
            TemperatureUnit::Fahrenheit => Self::FAHRENHEIT_RANGE,
        }
    }

    /// Returns the validated temperature.
    #[must_use]
    pub const fn temperature(&self) -> Temperature {
        self.0
    }
}

impl fmt::Display for TargetTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
