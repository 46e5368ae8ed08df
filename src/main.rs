// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line interface for controlling Ember mugs.
//!
//! Thin collaborator over the library: argument parsing and printing only.
//! All validation, encoding, and session sequencing happens in the library,
//! so a failure here is always a library error surfaced with its specific
//! rule.

use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use embermug::{MugSession, MugStatus, TemperatureUnit};

#[derive(Parser)]
#[command(name = "embermug", version, about = "Connects to and controls Ember mugs")]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Scan for advertising Ember mugs
    Scan {
        /// Number of seconds to poll for devices
        #[arg(long, default_value_t = 5)]
        time: u64,
    },
    /// Connect to the mug with the given address and run a command
    Connect {
        /// Address of the mug to connect to
        #[arg(long)]
        id: String,
        #[command(subcommand)]
        command: MugCommand,
    },
}

#[derive(Subcommand)]
enum MugCommand {
    /// Display the mug's status
    Status(StatusArgs),
    /// Set the mug's name
    SetName {
        /// Name to set: ASCII, no spaces, shorter than 14 bytes
        #[arg(long)]
        name: String,
    },
    /// Set the target temperature, in the unit the mug currently reports
    SetTargetTemp {
        /// Target temperature to set
        #[arg(long)]
        temp: f64,
    },
    /// Set the temperature unit
    SetTempUnit {
        /// Unit to switch to: C or F
        #[arg(long)]
        unit: TemperatureUnit,
    },
}

#[derive(Args)]
struct StatusArgs {
    /// Print the status as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.mode {
        Mode::Scan { time } => scan(Duration::from_secs(time)).await,
        Mode::Connect { id, command } => connect(&id, command).await,
    }
}

async fn scan(duration: Duration) -> anyhow::Result<()> {
    let mugs = embermug::scan(duration).await?;
    if mugs.is_empty() {
        println!("No Ember mugs found.");
        return Ok(());
    }
    for (i, mug) in mugs.iter().enumerate() {
        match mug.rssi {
            Some(rssi) => println!("[{}]: {} [{}] ({rssi} dBm)", i + 1, mug.name, mug.address),
            None => println!("[{}]: {} [{}]", i + 1, mug.name, mug.address),
        }
    }
    Ok(())
}

async fn connect(id: &str, command: MugCommand) -> anyhow::Result<()> {
    let session = MugSession::connect(id)
        .await
        .with_context(|| format!("unable to reach mug {id}"))?;

    let result = run_command(&session, command).await;
    session.disconnect().await;
    result
}

async fn run_command(
    session: &MugSession<embermug::BleTransport>,
    command: MugCommand,
) -> anyhow::Result<()> {
    match command {
        MugCommand::Status(args) => {
            let status = session.status().await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                print_status(&status);
            }
        }
        MugCommand::SetName { name } => {
            let name = session.set_name(&name).await?;
            println!("Successfully set the name to {name}.");
        }
        MugCommand::SetTargetTemp { temp } => {
            // Targets are validated in the unit the mug currently reports,
            // so fetch that first.
            let unit = session.status().await?.unit();
            let target = session.set_target_temperature(temp, unit).await?;
            println!("Successfully set the target temperature to {target}.");
        }
        MugCommand::SetTempUnit { unit } => {
            session.set_unit(unit).await?;
            println!("Successfully set the temperature unit to {unit}.");
        }
    }
    Ok(())
}

fn print_status(status: &MugStatus) {
    println!("Mug Name: {} | Status: {}", status.name(), status.liquid());
    println!(
        "Battery: {}% | State: {}",
        status.battery_percent(),
        if status.charging() { "Charging" } else { "Not Charging" },
    );
    let other = match status.unit() {
        TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
        TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
    };
    println!(
        "Current Temp: {} ({}) | Target: {} ({})",
        status.current_temperature(),
        status.current_temperature().to_unit(other),
        status.target_temperature(),
        status.target_temperature().to_unit(other),
    );
}
