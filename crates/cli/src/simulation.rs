// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traffic simulation driving a shared bridge monitor
//!
//! Arrivals are released on the async runtime following the schedule. Each
//! traveler then runs on a blocking thread, since entering the bridge parks
//! the calling thread until the monitor admits it.

use crate::traffic::{Traveler, TrafficConfig};
use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::{sleep_until, Instant};
use tracing::info;
use tunnel_core::{BridgeMonitor, BridgeState, Group};

pub struct Simulation {
    monitor: Arc<BridgeMonitor>,
    traffic: TrafficConfig,
}

impl Simulation {
    pub fn new(monitor: Arc<BridgeMonitor>, traffic: TrafficConfig) -> Self {
        Self { monitor, traffic }
    }

    /// Release every scheduled traveler and wait for all of them to cross.
    ///
    /// Once `stop` is set no further travelers arrive; those already
    /// released still finish their crossing.
    pub async fn run(&self, stop: &AtomicBool) -> Result<Summary> {
        let mut rng = match self.traffic.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let start = Instant::now();
        let mut travelers = JoinSet::new();
        let mut released = 0;
        let mut interrupted = false;

        for arrival in self.traffic.schedule() {
            if !stop.load(Ordering::SeqCst) {
                sleep_until(start + arrival.at).await;
            }
            if stop.load(Ordering::SeqCst) {
                interrupted = true;
                info!(released, "arrivals stopped");
                break;
            }

            let transit = self
                .traffic
                .transit(arrival.traveler.group)
                .choose(&mut rng)
                .map(|d| **d)
                .unwrap_or_default();
            let monitor = Arc::clone(&self.monitor);
            travelers.spawn_blocking(move || travel(&monitor, arrival.traveler, transit));
            released += 1;
        }

        while let Some(joined) = travelers.join_next().await {
            joined.context("traveler thread failed")?;
        }

        Ok(Summary {
            travelers: released,
            interrupted,
            elapsed_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            state: self.monitor.snapshot(),
        })
    }
}

fn travel(monitor: &BridgeMonitor, traveler: Traveler, transit: Duration) {
    info!("{traveler} wants to enter. {monitor}");
    let on_bridge = || {
        info!("{traveler} enters. {monitor}");
        std::thread::sleep(transit);
        info!("{traveler} leaving. {monitor}");
    };
    match traveler.group.direction() {
        Some(direction) => monitor.cross_car(direction, on_bridge),
        None => monitor.cross_pedestrian(on_bridge),
    }
    info!("{traveler} out of the bridge. {monitor}");
}

/// Outcome of a run
#[derive(Debug, Serialize)]
pub struct Summary {
    /// Travelers released onto the road
    pub travelers: u32,
    /// Whether arrivals were cut short
    pub interrupted: bool,
    pub elapsed_ms: u64,
    /// Monitor state after the last traveler left
    pub state: BridgeState,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Policy: {}", self.state.policy)?;
        write!(f, "Travelers: {}", self.travelers)?;
        if self.interrupted {
            write!(f, " (interrupted)")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Crossed: {} north cars, {} south cars, {} pedestrians",
            self.state.departed[Group::NorthCar],
            self.state.departed[Group::SouthCar],
            self.state.departed[Group::Pedestrian],
        )?;
        writeln!(f, "Monitor: {}", self.state.operations)?;
        write!(f, "Elapsed: {}ms", self.elapsed_ms)
    }
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod tests;
