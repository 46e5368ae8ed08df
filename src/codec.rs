// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Payload codec for the mug's GATT characteristics.
//!
//! This module is the single source of truth for the wire representation of
//! each characteristic. Layouts live in the `layout` constants below, never
//! as inline offsets. Encoders assume their input was already validated by
//! the value types; no range or charset business rules are checked here, so
//! a firmware layout revision touches this file only.
//!
//! Temperatures travel as unsigned little-endian centidegrees in whichever
//! unit the mug is configured to.

use crate::error::DecodeError;
use crate::transport::Characteristic;
use crate::types::{
    LiquidState, MugName, MugStatus, TargetTemperature, Temperature, TemperatureUnit,
};

/// Byte layout of the status characteristic payload.
mod layout {
    /// Battery percentage, u8.
    pub const BATTERY: usize = 0;
    /// Charging flag, u8 (non-zero = charging).
    pub const CHARGING: usize = 1;
    /// Liquid state, u8.
    pub const LIQUID: usize = 2;
    /// Temperature unit flag, u8 (0 = Celsius).
    pub const UNIT: usize = 3;
    /// Current temperature, u16 little-endian centidegrees.
    pub const CURRENT: usize = 4;
    /// Target temperature, u16 little-endian centidegrees.
    pub const TARGET: usize = 6;
    /// Name field start; NUL-padded ASCII up to the payload end.
    pub const NAME: usize = 8;
}

/// Centidegrees per degree in the fixed-point temperature encoding.
const TEMP_SCALE: f64 = 100.0;

/// Decodes a status characteristic payload into a fresh snapshot.
///
/// Both temperatures are interpreted in the unit the payload itself reports.
/// The name field is trimmed at its NUL terminator.
///
/// # Errors
///
/// Returns [`DecodeError::WrongLength`] if the payload does not match the
/// characteristic's fixed size, [`DecodeError::NameNotAscii`] if the name
/// field holds non-ASCII bytes, and [`DecodeError::BatteryOutOfRange`] if
/// the battery field exceeds 100. No partial snapshot is ever produced.
pub fn decode_status(payload: &[u8]) -> Result<MugStatus, DecodeError> {
    let expected = Characteristic::Status.payload_len();
    if payload.len() != expected {
        return Err(DecodeError::WrongLength {
            characteristic: Characteristic::Status,
            expected,
            actual: payload.len(),
        });
    }

    let battery = payload[layout::BATTERY];
    if battery > 100 {
        return Err(DecodeError::BatteryOutOfRange(battery));
    }

    let unit = TemperatureUnit::from_flag(payload[layout::UNIT]);
    let current = decode_temperature(&payload[layout::CURRENT..layout::CURRENT + 2], unit);
    let target = decode_temperature(&payload[layout::TARGET..layout::TARGET + 2], unit);

    let name_field = &payload[layout::NAME..];
    let name_bytes = name_field
        .split(|&b| b == 0)
        .next()
        .unwrap_or(name_field);
    if !name_bytes.is_ascii() {
        return Err(DecodeError::NameNotAscii);
    }
    let name = String::from_utf8_lossy(name_bytes).into_owned();

    Ok(MugStatus::new(
        name,
        battery,
        payload[layout::CHARGING] != 0,
        LiquidState::from_raw(payload[layout::LIQUID]),
        unit,
        current,
        target,
    ))
}

/// Encodes a validated name into the fixed-size name payload.
///
/// The name occupies the leading bytes; the remainder is NUL padding, which
/// doubles as the terminator. Validation guarantees at least one padding
/// byte.
#[must_use]
pub fn encode_name(name: &MugName) -> Vec<u8> {
    let mut payload = vec![0u8; Characteristic::Name.payload_len()];
    payload[..name.as_bytes().len()].copy_from_slice(name.as_bytes());
    payload
}

/// Encodes a validated target temperature at the device resolution.
///
/// The value is serialized in the unit the command was expressed in; the
/// mug interprets it against its currently configured unit.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_target_temperature(target: &TargetTemperature) -> Vec<u8> {
    // Validated range keeps the scaled value well inside u16.
    let raw = (target.temperature().value() * TEMP_SCALE).round() as u16;
    raw.to_le_bytes().to_vec()
}

/// Encodes the unit selection flag.
#[must_use]
pub fn encode_unit(unit: TemperatureUnit) -> Vec<u8> {
    vec![unit.as_flag()]
}

fn decode_temperature(raw: &[u8], unit: TemperatureUnit) -> Temperature {
    let centi = u16::from_le_bytes([raw[0], raw[1]]);
    Temperature::new(f64::from(centi) / TEMP_SCALE, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a well-formed status payload for tests.
    fn status_payload(
        battery: u8,
        charging: u8,
        liquid: u8,
        unit: u8,
        current_centi: u16,
        target_centi: u16,
        name: &[u8],
    ) -> Vec<u8> {
        let mut payload = vec![0u8; Characteristic::Status.payload_len()];
        payload[layout::BATTERY] = battery;
        payload[layout::CHARGING] = charging;
        payload[layout::LIQUID] = liquid;
        payload[layout::UNIT] = unit;
        payload[layout::CURRENT..layout::CURRENT + 2].copy_from_slice(&current_centi.to_le_bytes());
        payload[layout::TARGET..layout::TARGET + 2].copy_from_slice(&target_centi.to_le_bytes());
        payload[layout::NAME..layout::NAME + name.len()].copy_from_slice(name);
        payload
    }

    #[test]
    fn decode_status_full_snapshot() {
        let payload = status_payload(87, 1, 5, 0, 5423, 5500, b"Calcifer");
        let status = decode_status(&payload).unwrap();

        assert_eq!(status.name(), "Calcifer");
        assert_eq!(status.battery_percent(), 87);
        assert!(status.charging());
        assert_eq!(status.liquid(), LiquidState::Heating);
        assert_eq!(status.unit(), TemperatureUnit::Celsius);
        assert_eq!(status.current_temperature().value(), 54.23);
        assert_eq!(status.target_temperature().value(), 55.0);
        assert_eq!(status.target_temperature().unit(), TemperatureUnit::Celsius);
    }

    #[test]
    fn decode_status_fahrenheit_unit_applies_to_both_temperatures() {
        let payload = status_payload(50, 0, 6, 1, 13100, 13500, b"Mug");
        let status = decode_status(&payload).unwrap();

        assert_eq!(status.unit(), TemperatureUnit::Fahrenheit);
        assert_eq!(status.current_temperature().unit(), TemperatureUnit::Fahrenheit);
        assert_eq!(status.current_temperature().value(), 131.0);
        assert_eq!(status.target_temperature().value(), 135.0);
    }

    #[test]
    fn decode_status_wrong_length() {
        for len in [0, 3, 21, 23, 64] {
            let payload = vec![0u8; len];
            let err = decode_status(&payload).unwrap_err();
            assert_eq!(
                err,
                DecodeError::WrongLength {
                    characteristic: Characteristic::Status,
                    expected: Characteristic::Status.payload_len(),
                    actual: len,
                },
            );
        }
    }

    #[test]
    fn decode_status_rejects_non_ascii_name() {
        let payload = status_payload(50, 0, 1, 0, 2000, 5500, &[0xC3, 0xA9]);
        assert_eq!(decode_status(&payload).unwrap_err(), DecodeError::NameNotAscii);
    }

    #[test]
    fn decode_status_rejects_impossible_battery() {
        let payload = status_payload(101, 0, 1, 0, 2000, 5500, b"Mug");
        assert_eq!(
            decode_status(&payload).unwrap_err(),
            DecodeError::BatteryOutOfRange(101)
        );
    }

    #[test]
    fn decode_status_name_without_terminator_uses_full_field() {
        // 14 name bytes, no room for a NUL: decode still trims nothing.
        let payload = status_payload(50, 0, 1, 0, 2000, 5500, b"12345678901234");
        let status = decode_status(&payload).unwrap();
        assert_eq!(status.name(), "12345678901234");
    }

    #[test]
    fn encode_name_pads_to_fixed_size() {
        let name = MugName::new("Calcifer").unwrap();
        let payload = encode_name(&name);

        assert_eq!(payload.len(), Characteristic::Name.payload_len());
        assert_eq!(&payload[..8], b"Calcifer");
        assert!(payload[8..].iter().all(|&b| b == 0));
    }

    #[test]
    fn encode_name_round_trips_through_status_decode() {
        let name = MugName::new("kettle-2").unwrap();
        let encoded = encode_name(&name);

        let mut payload = status_payload(50, 0, 1, 0, 2000, 5500, &[]);
        payload[layout::NAME..].copy_from_slice(&encoded);
        let status = decode_status(&payload).unwrap();
        assert_eq!(status.name(), name.as_str());
    }

    #[test]
    fn encode_target_temperature_centidegrees_little_endian() {
        let target = TargetTemperature::new(55.0, TemperatureUnit::Celsius).unwrap();
        assert_eq!(encode_target_temperature(&target), 5500u16.to_le_bytes());

        let target = TargetTemperature::new(131.5, TemperatureUnit::Fahrenheit).unwrap();
        assert_eq!(encode_target_temperature(&target), 13150u16.to_le_bytes());
    }

    #[test]
    fn encode_target_temperature_rounds_at_resolution() {
        // 55.346 °C is 5534.6 centidegrees; rounds to 5535 rather than
        // truncating.
        let target = TargetTemperature::new(55.346, TemperatureUnit::Celsius).unwrap();
        assert_eq!(encode_target_temperature(&target), 5535u16.to_le_bytes());
    }

    #[test]
    fn encode_unit_flag() {
        assert_eq!(encode_unit(TemperatureUnit::Celsius), vec![0]);
        assert_eq!(encode_unit(TemperatureUnit::Fahrenheit), vec![1]);
    }

    #[test]
    fn encoded_payloads_match_characteristic_sizes() {
        let name = MugName::new("Mug").unwrap();
        let target = TargetTemperature::new(55.0, TemperatureUnit::Celsius).unwrap();

        assert_eq!(encode_name(&name).len(), Characteristic::Name.payload_len());
        assert_eq!(
            encode_target_temperature(&target).len(),
            Characteristic::TargetTemperature.payload_len()
        );
        assert_eq!(
            encode_unit(TemperatureUnit::Celsius).len(),
            Characteristic::TemperatureUnit.payload_len()
        );
    }
}
