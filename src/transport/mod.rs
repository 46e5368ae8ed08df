// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for talking to the mug.
//!
//! The session drives an abstract [`Transport`], so the protocol core stays
//! independent of the BLE stack. [`BleTransport`] is the production
//! implementation; tests substitute their own.

mod ble;

pub use ble::{BleTransport, DiscoveredMug, scan};

use std::fmt;

use uuid::Uuid;

use crate::error::IoError;

/// Logical identifiers for the mug's GATT characteristics.
///
/// Each identifier maps to a UUID in the mug's vendor service and a fixed
/// payload size. The UUIDs follow the community protocol notes for the
/// device; see DESIGN.md for which layouts remain unverified against real
/// captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    /// Aggregated status snapshot (read).
    Status,
    /// Mug name (write).
    Name,
    /// Target temperature (write).
    TargetTemperature,
    /// Temperature unit flag (write).
    TemperatureUnit,
}

impl Characteristic {
    /// Returns the GATT UUID for this characteristic.
    #[must_use]
    pub const fn uuid(self) -> Uuid {
        match self {
            Self::Status => Uuid::from_u128(0xfc54_0008_236c_4c94_8fa9_944a_3e53_53fa),
            Self::Name => Uuid::from_u128(0xfc54_0001_236c_4c94_8fa9_944a_3e53_53fa),
            Self::TargetTemperature => Uuid::from_u128(0xfc54_0003_236c_4c94_8fa9_944a_3e53_53fa),
            Self::TemperatureUnit => Uuid::from_u128(0xfc54_0004_236c_4c94_8fa9_944a_3e53_53fa),
        }
    }

    /// Returns the fixed payload size for this characteristic.
    #[must_use]
    pub const fn payload_len(self) -> usize {
        match self {
            Self::Status => 22,
            Self::Name => 14,
            Self::TargetTemperature => 2,
            Self::TemperatureUnit => 1,
        }
    }

    /// Returns a short label for logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Name => "name",
            Self::TargetTemperature => "target temperature",
            Self::TemperatureUnit => "temperature unit",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An open connection to one physical mug.
///
/// One outstanding request at a time; the BLE link is inherently serial and
/// the session enforces this on top.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Reads the current payload of a characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`] if the read fails or times out.
    async fn read(&self, characteristic: Characteristic) -> Result<Vec<u8>, IoError>;

    /// Writes a payload to a characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`] if the write fails or times out.
    async fn write(&self, characteristic: Characteristic, payload: &[u8]) -> Result<(), IoError>;

    /// Releases the connection. Best-effort; never fails the caller.
    async fn close(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characteristic_uuids_live_in_the_vendor_service() {
        for characteristic in [
            Characteristic::Status,
            Characteristic::Name,
            Characteristic::TargetTemperature,
            Characteristic::TemperatureUnit,
        ] {
            let uuid = characteristic.uuid().to_string();
            assert!(uuid.starts_with("fc54"), "{uuid}");
            assert!(uuid.ends_with("236c-4c94-8fa9-944a3e5353fa"), "{uuid}");
        }
    }

    #[test]
    fn characteristic_uuids_are_distinct() {
        let uuids = [
            Characteristic::Status.uuid(),
            Characteristic::Name.uuid(),
            Characteristic::TargetTemperature.uuid(),
            Characteristic::TemperatureUnit.uuid(),
        ];
        for (i, a) in uuids.iter().enumerate() {
            for b in &uuids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn characteristic_display() {
        assert_eq!(Characteristic::Status.to_string(), "status");
        assert_eq!(
            Characteristic::TargetTemperature.to_string(),
            "target temperature"
        );
    }
}
