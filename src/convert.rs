// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pure unit conversions between Celsius and Fahrenheit.
//!
//! Results are rounded to one fractional digit, the resolution the mug
//! protocol works at. Range legality is enforced by the value types, never
//! here: any finite input converts.

/// Resolution of the mug protocol, in fractional digits.
const RESOLUTION: f64 = 10.0;

/// Converts degrees Celsius to degrees Fahrenheit.
///
/// # Examples
///
/// ```
/// use embermug::convert::to_fahrenheit;
///
/// assert_eq!(to_fahrenheit(0.0), 32.0);
/// assert_eq!(to_fahrenheit(55.0), 131.0);
/// assert_eq!(to_fahrenheit(57.2), 135.0);
/// ```
#[must_use]
pub fn to_fahrenheit(celsius: f64) -> f64 {
    round(celsius * 9.0 / 5.0 + 32.0)
}

/// Converts degrees Fahrenheit to degrees Celsius.
///
/// # Examples
///
/// ```
/// use embermug::convert::to_celsius;
///
/// assert_eq!(to_celsius(32.0), 0.0);
/// assert_eq!(to_celsius(131.0), 55.0);
/// ```
#[must_use]
pub fn to_celsius(fahrenheit: f64) -> f64 {
    round((fahrenheit - 32.0) * 5.0 / 9.0)
}

fn round(value: f64) -> f64 {
    (value * RESOLUTION).round() / RESOLUTION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_conversions() {
        assert_eq!(to_fahrenheit(100.0), 212.0);
        assert_eq!(to_fahrenheit(-40.0), -40.0);
        assert_eq!(to_celsius(212.0), 100.0);
        assert_eq!(to_celsius(-40.0), -40.0);
    }

    #[test]
    fn results_are_rounded_to_one_digit() {
        // 56.7 °C is 134.06 °F before rounding.
        assert_eq!(to_fahrenheit(56.7), 134.1);
        // 135 °F is 57.222... °C before rounding.
        assert_eq!(to_celsius(135.0), 57.2);
    }

    #[test]
    fn round_trip_within_one_resolution_step() {
        // Rounding each leg loses at most half a step, so a full round trip
        // stays within one step.
        let mut f = 90.1;
        while f < 200.0 {
            let back = to_fahrenheit(to_celsius(f));
            assert!((back - f).abs() < 0.15, "{f} -> {back}");
            f += 0.1;
        }
    }
}
