// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tunnel run` - Simulate traffic through the tunnel

use crate::output::{self, OutputFormat};
use crate::simulation::Simulation;
use crate::traffic::SimulationConfig;
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use tunnel_core::{BridgeMonitor, PolicyKind};

#[derive(Args)]
pub struct RunArgs {
    /// Simulation config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Admission policy
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Waiting cars that revoke the opposite direction's free pass
    #[arg(long)]
    pub car_limit: Option<u32>,

    /// Waiting pedestrians that revoke the cars' free pass
    #[arg(long)]
    pub ped_limit: Option<u32>,

    /// Northbound cars to send
    #[arg(long)]
    pub north: Option<u32>,

    /// Southbound cars to send
    #[arg(long)]
    pub south: Option<u32>,

    /// Pedestrians to send
    #[arg(long)]
    pub pedestrians: Option<u32>,

    /// Seed for transit time picks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Summary format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    Simple,
    Fair,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Simple => PolicyKind::Simple,
            PolicyArg::Fair => PolicyKind::Fair,
        }
    }
}

impl RunArgs {
    /// Flags take precedence over the config file
    fn apply(&self, config: &mut SimulationConfig) {
        if let Some(policy) = self.policy {
            config.monitor.policy = policy.into();
        }
        if let Some(limit) = self.car_limit {
            config.monitor.car_limit = limit;
        }
        if let Some(limit) = self.ped_limit {
            config.monitor.ped_limit = limit;
        }
        if let Some(count) = self.north {
            config.traffic.north_cars = count;
        }
        if let Some(count) = self.south {
            config.traffic.south_cars = count;
        }
        if let Some(count) = self.pedestrians {
            config.traffic.pedestrians = count;
        }
        if self.seed.is_some() {
            config.traffic.seed = self.seed;
        }
    }
}

pub async fn handle(args: RunArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    args.apply(&mut config);
    config.validate()?;

    let monitor = Arc::new(BridgeMonitor::from_config(&config.monitor)?);

    let stop = Arc::new(AtomicBool::new(false));
    let s = stop.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nStopping arrivals, waiting for the bridge to clear...");
        s.store(true, Ordering::SeqCst);
    })?;

    info!(
        policy = %monitor.policy(),
        travelers = config.traffic.total(),
        "starting simulation"
    );

    let summary = Simulation::new(monitor, config.traffic).run(&stop).await?;
    output::print(&summary, args.output)
}
