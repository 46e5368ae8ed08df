// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `embermug` - control Ember smart mugs over Bluetooth Low Energy.
//!
//! This library discovers Ember mugs, opens a session to one, reads its
//! status, and issues configuration commands: name, target temperature, and
//! temperature unit. Every externally supplied value is validated before a
//! single byte is built, and every payload layout lives in one codec module.
//!
//! # Quick Start
//!
//! ## Scan for mugs
//!
//! ```no_run
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> embermug::Result<()> {
//!     for mug in embermug::scan(Duration::from_secs(5)).await? {
//!         println!("{} [{}]", mug.name, mug.address);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Query and configure a mug
//!
//! ```no_run
//! use embermug::{MugSession, TemperatureUnit};
//!
//! #[tokio::main]
//! async fn main() -> embermug::Result<()> {
//!     let session = MugSession::connect("aa:bb:cc:dd:ee:ff").await?;
//!
//!     let status = session.status().await?;
//!     println!(
//!         "{}: {} (target {})",
//!         status.name(),
//!         status.current_temperature(),
//!         status.target_temperature(),
//!     );
//!
//!     session.set_name("Calcifer").await?;
//!     session.set_target_temperature(55.0, TemperatureUnit::Celsius).await?;
//!     session.disconnect().await;
//!     Ok(())
//! }
//! ```
//!
//! # Session lifecycle
//!
//! A [`MugSession`] exists only while its connection does: `connect` creates
//! it, `disconnect` consumes it. A transport failure mid-command faults the
//! session permanently; only `disconnect` is accepted afterwards, and a new
//! `connect` call starts a fresh handshake. Validation failures and
//! undecodable device responses never fault the session.

pub mod codec;
pub mod convert;
pub mod error;
mod session;
pub mod transport;
pub mod types;

pub use error::{ConnectionError, DecodeError, Error, IoError, Result, ValidationError};
pub use session::{MugSession, SessionConfig};
pub use transport::{BleTransport, Characteristic, DiscoveredMug, Transport, scan};
pub use types::{
    LiquidState, MugName, MugStatus, TargetTemperature, Temperature, TemperatureUnit,
};
