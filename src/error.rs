// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `embermug` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: value validation, payload decoding, BLE transport I/O, and
//! session state.

use std::time::Duration;

use thiserror::Error;

use crate::transport::Characteristic;
use crate::types::TemperatureUnit;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when interacting
/// with an Ember mug.
#[derive(Debug, Error)]
pub enum Error {
    /// A user-supplied value failed validation. Nothing was sent to the mug.
    #[error("invalid value: {0}")]
    Validation(#[from] ValidationError),

    /// Establishing the BLE connection failed.
    #[error("connection failed: {0}")]
    Connection(#[from] ConnectionError),

    /// A characteristic read or write failed mid-session.
    #[error("transport failure: {0}")]
    Io(#[from] IoError),

    /// The mug returned a payload the codec could not decode.
    #[error("unexpected device response: {0}")]
    Protocol(#[from] DecodeError),

    /// Another command is already in flight on this session.
    #[error("session is busy with another command")]
    SessionBusy,

    /// A previous transport failure put the session in a terminal state.
    #[error("session is faulted; disconnect and open a new session")]
    Faulted,
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types with
/// invalid values. They are always recoverable by correcting the input and
/// never touch the transport.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A mug name is empty after trimming surrounding whitespace.
    #[error("name must not be empty")]
    Empty,

    /// A mug name contains non-ASCII characters.
    #[error("name contains non-ASCII characters")]
    NotAscii,

    /// A mug name contains space characters.
    #[error("name must not contain spaces")]
    ContainsSpace,

    /// A mug name exceeds the characteristic's capacity.
    #[error("name is {actual} bytes, must be shorter than {max} bytes")]
    TooLong {
        /// Encoded byte length of the rejected name.
        actual: usize,
        /// Exclusive upper bound on the encoded length.
        max: usize,
    },

    /// A target temperature is outside the mug's safe range for its unit.
    #[error("target temperature {value} °{unit} is out of range ({min} < x < {max})")]
    OutOfRange {
        /// The rejected value.
        value: f64,
        /// The unit the value was expressed in.
        unit: TemperatureUnit,
        /// Exclusive lower bound for that unit.
        min: f64,
        /// Exclusive upper bound for that unit.
        max: f64,
    },

    /// An unrecognized temperature unit token.
    #[error("unknown temperature unit {0:?} (expected C or F)")]
    UnknownUnit(String),
}

/// Errors while establishing a BLE connection.
///
/// The session stays (or returns to) disconnected; retrying is the caller's
/// decision.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// No Bluetooth adapter is available on this host.
    #[error("no Bluetooth adapter available")]
    NoAdapter,

    /// No advertising device with the requested address was found.
    #[error("no device found with address {0}")]
    DeviceNotFound(String),

    /// The connection attempt did not complete in time.
    #[error("connection attempt timed out after {0:?}")]
    Timeout(Duration),

    /// The BLE stack reported a failure.
    #[error("BLE error: {0}")]
    Ble(#[from] btleplug::Error),
}

/// Errors during characteristic I/O on an established connection.
///
/// An `IoError` mid-command faults the session: the underlying BLE link needs
/// a fresh connection handshake, not a silent retry.
#[derive(Debug, Error)]
pub enum IoError {
    /// The connected device does not expose the expected characteristic.
    #[error("characteristic {0} not present on device")]
    MissingCharacteristic(Characteristic),

    /// The read or write did not complete in time.
    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    /// The BLE stack reported a failure.
    #[error("BLE error: {0}")]
    Ble(#[from] btleplug::Error),
}

/// Errors while decoding a characteristic payload.
///
/// A decode failure means the device returned unexpected data; the session
/// itself remains usable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload length does not match the characteristic's fixed size.
    #[error("{characteristic} payload is {actual} bytes, expected {expected}")]
    WrongLength {
        /// The characteristic the payload was read from.
        characteristic: Characteristic,
        /// Expected fixed payload size.
        expected: usize,
        /// Actual payload size received.
        actual: usize,
    },

    /// The name field contains bytes outside the ASCII range.
    #[error("name field is not valid ASCII")]
    NameNotAscii,

    /// The battery field reports more than 100 percent.
    #[error("battery level {0} exceeds 100%")]
    BatteryOutOfRange(u8),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display_names_the_bound() {
        let err = ValidationError::OutOfRange {
            value: 80.0,
            unit: TemperatureUnit::Celsius,
            min: 32.0,
            max: 93.0,
        };
        assert_eq!(
            err.to_string(),
            "target temperature 80 °C is out of range (32 < x < 93)"
        );
    }

    #[test]
    fn validation_error_too_long_display() {
        let err = ValidationError::TooLong { actual: 20, max: 14 };
        assert_eq!(
            err.to_string(),
            "name is 20 bytes, must be shorter than 14 bytes"
        );
    }

    #[test]
    fn error_from_validation_error() {
        let err: Error = ValidationError::NotAscii.into();
        assert!(matches!(err, Error::Validation(ValidationError::NotAscii)));
    }

    #[test]
    fn decode_error_display() {
        let err = DecodeError::WrongLength {
            characteristic: Characteristic::Status,
            expected: 22,
            actual: 3,
        };
        assert_eq!(err.to_string(), "status payload is 3 bytes, expected 22");
    }
}
