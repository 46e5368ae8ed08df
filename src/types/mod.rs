// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for mug control.
//!
//! This module provides type-safe representations of values that cross the
//! mug protocol boundary. Each constrained type validates its invariants at
//! construction time, so anything that reaches the codec is already legal.
//!
//! # Types
//!
//! - [`TemperatureUnit`] - Celsius or Fahrenheit
//! - [`Temperature`] - a value paired with its unit
//! - [`MugName`] - ASCII, no spaces, under 14 bytes
//! - [`TargetTemperature`] - inside the per-unit safe range
//! - [`LiquidState`] - what the contents are doing
//! - [`MugStatus`] - immutable status snapshot

mod liquid;
mod name;
mod status;
mod target;
mod temperature;
mod unit;

pub use liquid::LiquidState;
pub use name::MugName;
pub use status::MugStatus;
pub use target::TargetTemperature;
pub use temperature::Temperature;
pub use unit::TemperatureUnit;
