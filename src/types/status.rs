// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mug status snapshot.

use serde::Serialize;

use crate::types::{LiquidState, Temperature, TemperatureUnit};

/// A point-in-time snapshot of the mug's state.
///
/// Every status query produces a fresh snapshot; a snapshot is never mutated
/// in place. Both temperatures are carried in the unit the mug was reporting
/// at the time of the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MugStatus {
    name: String,
    battery_percent: u8,
    charging: bool,
    liquid: LiquidState,
    unit: TemperatureUnit,
    current: Temperature,
    target: Temperature,
}

impl MugStatus {
    /// Assembles a snapshot from decoded fields.
    #[must_use]
    pub(crate) fn new(
        name: String,
        battery_percent: u8,
        charging: bool,
        liquid: LiquidState,
        unit: TemperatureUnit,
        current: Temperature,
        target: Temperature,
    ) -> Self {
        Self {
            name,
            battery_percent,
            charging,
            liquid,
            unit,
            current,
            target,
        }
    }

    /// The mug's configured name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Battery charge, 0-100.
    #[must_use]
    pub const fn battery_percent(&self) -> u8 {
        self.battery_percent
    }

    /// Whether the mug is sitting on its charging coaster.
    #[must_use]
    pub const fn charging(&self) -> bool {
        self.charging
    }

    /// What the contents are doing.
    #[must_use]
    pub const fn liquid(&self) -> LiquidState {
        self.liquid
    }

    /// The unit the mug is currently reporting in.
    #[must_use]
    pub const fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Current temperature of the contents, in the reported unit.
    #[must_use]
    pub const fn current_temperature(&self) -> Temperature {
        self.current
    }

    /// Configured target temperature, in the reported unit.
    #[must_use]
    pub const fn target_temperature(&self) -> Temperature {
        self.target
    }
}
