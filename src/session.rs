// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mug session: the command surface over one open connection.
//!
//! A [`MugSession`] owns exactly one transport connection to one physical
//! mug. The disconnected state has no value representation: [`connect`]
//! yields a session only once the link is up, and [`disconnect`] consumes
//! the session while releasing the transport. In between, the session is
//! either usable or faulted:
//!
//! - validation failures never reach the transport and never change state
//! - a decode failure surfaces [`Error::Protocol`] and leaves the session
//!   usable (the link itself was fine)
//! - a transport I/O failure faults the session; every later command except
//!   `disconnect` fails fast with [`Error::Faulted`] without touching the
//!   transport, because a broken BLE link needs a fresh handshake
//!
//! At most one command is in flight at a time. Overlapping calls on a shared
//! session get [`Error::SessionBusy`] instead of interleaved writes.
//!
//! [`connect`]: MugSession::connect
//! [`disconnect`]: MugSession::disconnect

use std::time::Duration;

use tokio::sync::Mutex;

use crate::codec;
use crate::error::{Error, IoError, Result};
use crate::transport::{BleTransport, Characteristic, Transport};
use crate::types::{MugName, MugStatus, TargetTemperature, TemperatureUnit};

/// Timeouts applied to session transport operations.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use embermug::SessionConfig;
///
/// let config = SessionConfig::new()
///     .with_connect_timeout(Duration::from_secs(20))
///     .with_io_timeout(Duration::from_secs(5));
/// assert_eq!(config.io_timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    connect_timeout: Duration,
    io_timeout: Duration,
}

impl SessionConfig {
    /// Default bound on peripheral discovery plus connection handshake.
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

    /// Default bound on a single characteristic read or write.
    pub const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a config with the default timeouts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the per-operation I/O timeout.
    #[must_use]
    pub fn with_io_timeout(mut self, timeout: Duration) -> Self {
        self.io_timeout = timeout;
        self
    }

    /// Returns the connect timeout.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the per-operation I/O timeout.
    #[must_use]
    pub fn io_timeout(&self) -> Duration {
        self.io_timeout
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            io_timeout: Self::DEFAULT_IO_TIMEOUT,
        }
    }
}

/// One active connection to one physical mug.
///
/// Generic over [`Transport`] so the command surface can be driven against
/// a mock in tests; production sessions use [`BleTransport`].
///
/// # Examples
///
/// ```no_run
/// use embermug::{MugSession, TemperatureUnit};
///
/// #[tokio::main]
/// async fn main() -> embermug::Result<()> {
///     let session = MugSession::connect("aa:bb:cc:dd:ee:ff").await?;
///
///     let status = session.status().await?;
///     println!("{} is at {}", status.name(), status.current_temperature());
///
///     session.set_target_temperature(55.0, TemperatureUnit::Celsius).await?;
///     session.disconnect().await;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MugSession<T: Transport> {
    address: String,
    /// Guards the single in-flight transport operation.
    transport: Mutex<T>,
    faulted: parking_lot::Mutex<bool>,
}

impl MugSession<BleTransport> {
    /// Connects to the mug at the given address with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] if the device cannot be found or the
    /// handshake fails; no session value exists in that case and the caller
    /// decides whether to retry.
    pub async fn connect(address: &str) -> Result<Self> {
        Self::connect_with_config(address, &SessionConfig::default()).await
    }

    /// Connects with explicit timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connection`] on discovery or handshake failure.
    pub async fn connect_with_config(address: &str, config: &SessionConfig) -> Result<Self> {
        let transport =
            BleTransport::connect(address, config.connect_timeout(), config.io_timeout()).await?;
        Ok(Self::with_transport(address, transport))
    }
}

impl<T: Transport> MugSession<T> {
    /// Wraps an already-open transport in a session.
    #[must_use]
    pub fn with_transport(address: &str, transport: T) -> Self {
        Self {
            address: address.to_string(),
            transport: Mutex::new(transport),
            faulted: parking_lot::Mutex::new(false),
        }
    }

    /// Returns the address this session is connected to.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns whether a transport failure has faulted this session.
    #[must_use]
    pub fn is_faulted(&self) -> bool {
        *self.faulted.lock()
    }

    /// Queries a fresh status snapshot.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] faults the session; [`Error::Protocol`] (undecodable
    /// payload) leaves it usable.
    pub async fn status(&self) -> Result<MugStatus> {
        let payload = self.read_guarded(Characteristic::Status).await?;
        let status = codec::decode_status(&payload)?;
        tracing::debug!(address = %self.address, name = status.name(), "status query");
        Ok(status)
    }

    /// Validates and sets the mug's name.
    ///
    /// Returns the accepted name.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if the name violates the charset or length
    /// rules; nothing is written in that case.
    pub async fn set_name(&self, raw: &str) -> Result<MugName> {
        let name = MugName::new(raw)?;
        let payload = codec::encode_name(&name);
        self.write_guarded(Characteristic::Name, &payload).await?;
        tracing::info!(address = %self.address, name = %name, "name set");
        Ok(name)
    }

    /// Validates and sets the target temperature, expressed in `unit`.
    ///
    /// Returns the accepted target.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if the value is outside the safe range for
    /// `unit`; nothing is written in that case.
    pub async fn set_target_temperature(
        &self,
        value: f64,
        unit: TemperatureUnit,
    ) -> Result<TargetTemperature> {
        let target = TargetTemperature::new(value, unit)?;
        let payload = codec::encode_target_temperature(&target);
        self.write_guarded(Characteristic::TargetTemperature, &payload)
            .await?;
        tracing::info!(address = %self.address, target = %target, "target temperature set");
        Ok(target)
    }

    /// Switches the unit the mug reports and accepts temperatures in.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] on write failure, which faults the session.
    pub async fn set_unit(&self, unit: TemperatureUnit) -> Result<()> {
        let payload = codec::encode_unit(unit);
        self.write_guarded(Characteristic::TemperatureUnit, &payload)
            .await?;
        tracing::info!(address = %self.address, %unit, "temperature unit set");
        Ok(())
    }

    /// Releases the connection and consumes the session.
    ///
    /// Valid from both the usable and the faulted state; teardown is
    /// best-effort and never fails the caller.
    pub async fn disconnect(self) {
        let transport = self.transport.into_inner();
        transport.close().await;
        tracing::info!(address = %self.address, "disconnected");
    }

    /// Runs one guarded characteristic read.
    ///
    /// Rejects when faulted, rejects overlap, and latches the faulted flag
    /// on I/O failure.
    async fn read_guarded(&self, characteristic: Characteristic) -> Result<Vec<u8>> {
        let transport = self.acquire()?;
        let result = transport.read(characteristic).await;
        self.finish(result)
    }

    /// Runs one guarded characteristic write. Same state rules as reads.
    async fn write_guarded(&self, characteristic: Characteristic, payload: &[u8]) -> Result<()> {
        let transport = self.acquire()?;
        let result = transport.write(characteristic, payload).await;
        self.finish(result)
    }

    fn acquire(&self) -> Result<tokio::sync::MutexGuard<'_, T>> {
        if self.is_faulted() {
            return Err(Error::Faulted);
        }
        let Ok(transport) = self.transport.try_lock() else {
            return Err(Error::SessionBusy);
        };
        // Re-check under the lock: the command that held it may have faulted
        // the session in the meantime.
        if self.is_faulted() {
            return Err(Error::Faulted);
        }
        Ok(transport)
    }

    fn finish<R>(&self, result: std::result::Result<R, IoError>) -> Result<R> {
        result.map_err(|e| {
            *self.faulted.lock() = true;
            tracing::warn!(
                address = %self.address,
                error = %e,
                "transport failure, session faulted"
            );
            e.into()
        })
    }
}
