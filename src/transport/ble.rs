// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BLE transport backed by `btleplug`.
//!
//! Handles adapter selection, advertisement scanning, connection
//! establishment, and characteristic I/O. Everything protocol-shaped lives
//! in the codec and session; this module only moves bytes.

use std::time::Duration;

use btleplug::api::{Central, Manager as _, Peripheral as _, ScanFilter, WriteType};
use btleplug::platform::{Adapter, Manager, Peripheral};
use tokio::time::{Instant, timeout, timeout_at};

use crate::error::{ConnectionError, IoError};
use crate::transport::{Characteristic, Transport};

/// How often the scanner polls the adapter for new advertisements.
const SCAN_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// A mug seen during an advertisement scan.
#[derive(Debug, Clone)]
pub struct DiscoveredMug {
    /// Platform address of the peripheral, usable with `connect`.
    pub address: String,
    /// Advertised device name.
    pub name: String,
    /// Signal strength at discovery time, if the adapter reported one.
    pub rssi: Option<i16>,
}

/// Scans for advertising Ember mugs.
///
/// Runs one scan pass of the given duration and returns every peripheral
/// whose advertised name contains "ember", case-insensitively. Devices
/// without a name are skipped. The adapter scan is stopped before
/// returning, on success and failure alike.
///
/// # Errors
///
/// Returns [`ConnectionError`] if no adapter is available or the scan cannot
/// be started.
pub async fn scan(duration: Duration) -> Result<Vec<DiscoveredMug>, ConnectionError> {
    let adapter = default_adapter().await?;

    tracing::debug!(duration_secs = duration.as_secs(), "starting BLE scan");
    adapter.start_scan(ScanFilter::default()).await?;
    tokio::time::sleep(duration).await;

    // The adapter keeps scanning until told otherwise, so stop it even when
    // collection fails.
    let collected = collect_mugs(&adapter).await;
    let _ = adapter.stop_scan().await;

    let mugs = collected?;
    tracing::info!(count = mugs.len(), "BLE scan finished");
    Ok(mugs)
}

async fn collect_mugs(adapter: &Adapter) -> Result<Vec<DiscoveredMug>, ConnectionError> {
    let mut mugs = Vec::new();
    for peripheral in adapter.peripherals().await? {
        let Some(props) = peripheral.properties().await? else {
            continue;
        };
        let Some(name) = props.local_name else {
            continue;
        };
        if name.to_lowercase().contains("ember") {
            mugs.push(DiscoveredMug {
                address: peripheral.address().to_string(),
                name,
                rssi: props.rssi,
            });
        }
    }
    Ok(mugs)
}

/// A live `btleplug` connection to one mug.
#[derive(Debug)]
pub struct BleTransport {
    peripheral: Peripheral,
    io_timeout: Duration,
}

impl BleTransport {
    /// Discovers and connects to the mug with the given address.
    ///
    /// Peripheral discovery and the connection handshake share a single
    /// `connect_timeout` budget, so the call returns within that bound.
    /// Reads and writes on the resulting transport are bounded by
    /// `io_timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::DeviceNotFound`] if the address never
    /// showed up in advertisements, [`ConnectionError::Timeout`] if the
    /// handshake stalled, or the underlying BLE error otherwise.
    pub async fn connect(
        address: &str,
        connect_timeout: Duration,
        io_timeout: Duration,
    ) -> Result<Self, ConnectionError> {
        let adapter = default_adapter().await?;
        let deadline = Instant::now() + connect_timeout;

        adapter.start_scan(ScanFilter::default()).await?;
        let found = timeout_at(deadline, find_peripheral(&adapter, address)).await;
        let _ = adapter.stop_scan().await;

        let peripheral = match found {
            Ok(result) => result?,
            Err(_) => return Err(ConnectionError::DeviceNotFound(address.to_string())),
        };

        tracing::debug!(%address, "peripheral found, connecting");
        match timeout_at(deadline, peripheral.connect()).await {
            Ok(result) => result?,
            Err(_) => {
                // The platform-level connect can still complete in the
                // background after the future is dropped; tear the link
                // down rather than leave it half open.
                let _ = peripheral.disconnect().await;
                return Err(ConnectionError::Timeout(connect_timeout));
            }
        }

        if let Err(e) = peripheral.discover_services().await {
            let _ = peripheral.disconnect().await;
            return Err(e.into());
        }

        tracing::info!(%address, "connected");
        Ok(Self {
            peripheral,
            io_timeout,
        })
    }

    fn resolve(
        &self,
        characteristic: Characteristic,
    ) -> Result<btleplug::api::Characteristic, IoError> {
        self.peripheral
            .characteristics()
            .into_iter()
            .find(|c| c.uuid == characteristic.uuid())
            .ok_or(IoError::MissingCharacteristic(characteristic))
    }
}

impl Transport for BleTransport {
    async fn read(&self, characteristic: Characteristic) -> Result<Vec<u8>, IoError> {
        let gatt_char = self.resolve(characteristic)?;
        let payload = timeout(self.io_timeout, self.peripheral.read(&gatt_char))
            .await
            .map_err(|_| IoError::Timeout(self.io_timeout))??;
        tracing::trace!(%characteristic, len = payload.len(), "read");
        Ok(payload)
    }

    async fn write(&self, characteristic: Characteristic, payload: &[u8]) -> Result<(), IoError> {
        let gatt_char = self.resolve(characteristic)?;
        timeout(
            self.io_timeout,
            self.peripheral
                .write(&gatt_char, payload, WriteType::WithResponse),
        )
        .await
        .map_err(|_| IoError::Timeout(self.io_timeout))??;
        tracing::trace!(%characteristic, len = payload.len(), "write");
        Ok(())
    }

    async fn close(&self) {
        if let Err(e) = self.peripheral.disconnect().await {
            tracing::debug!(error = %e, "disconnect failed, link already torn down");
        }
    }
}

/// Returns the first Bluetooth adapter on this host.
async fn default_adapter() -> Result<Adapter, ConnectionError> {
    let manager = Manager::new().await?;
    manager
        .adapters()
        .await?
        .into_iter()
        .next()
        .ok_or(ConnectionError::NoAdapter)
}

/// Polls the adapter until a peripheral with the given address appears.
///
/// The caller bounds this with a timeout; on its own it polls forever.
async fn find_peripheral(adapter: &Adapter, address: &str) -> Result<Peripheral, ConnectionError> {
    loop {
        for peripheral in adapter.peripherals().await? {
            if peripheral.address().to_string().eq_ignore_ascii_case(address) {
                return Ok(peripheral);
            }
        }
        tokio::time::sleep(SCAN_POLL_INTERVAL).await;
    }
}
