// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation configuration and arrival schedule
//!
//! ```toml
//! [monitor]
//! policy = "fair"
//! car_limit = 10
//! ped_limit = 3
//!
//! [traffic]
//! north_cars = 20
//! south_cars = 20
//! pedestrians = 4
//! car_spacing = "50ms"
//! pedestrian_spacing = "500ms"
//! car_transit = ["100ms", "50ms"]
//! pedestrian_transit = ["3s", "1s"]
//! ```

use anyhow::{bail, Context, Result};
use humantime_serde::Serde;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tunnel_core::{Group, MonitorConfig};

/// A full simulation: how the monitor behaves and who shows up
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub monitor: MonitorConfig,
    pub traffic: TrafficConfig,
}

impl SimulationConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        self.monitor.validate()?;
        self.traffic.validate()
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Who crosses and how long they take
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrafficConfig {
    pub north_cars: u32,
    pub south_cars: u32,
    pub pedestrians: u32,
    /// Gap between consecutive cars in one direction
    #[serde(with = "humantime_serde")]
    pub car_spacing: Duration,
    /// Gap between consecutive pedestrians
    #[serde(with = "humantime_serde")]
    pub pedestrian_spacing: Duration,
    /// Time on the bridge, one picked at random per car
    pub car_transit: Vec<Serde<Duration>>,
    /// Time on the bridge, one picked at random per pedestrian
    pub pedestrian_transit: Vec<Serde<Duration>>,
    /// Fixes the transit picks for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            north_cars: 20,
            south_cars: 20,
            pedestrians: 4,
            car_spacing: Duration::from_millis(50),
            pedestrian_spacing: Duration::from_millis(500),
            car_transit: millis(&[100, 50]),
            pedestrian_transit: millis(&[3000, 1000]),
            seed: None,
        }
    }
}

fn millis(values: &[u64]) -> Vec<Serde<Duration>> {
    values
        .iter()
        .map(|&ms| Serde::from(Duration::from_millis(ms)))
        .collect()
}

impl TrafficConfig {
    pub fn count(&self, group: Group) -> u32 {
        match group {
            Group::NorthCar => self.north_cars,
            Group::SouthCar => self.south_cars,
            Group::Pedestrian => self.pedestrians,
        }
    }

    pub fn total(&self) -> u32 {
        Group::ALL.iter().map(|&group| self.count(group)).sum()
    }

    pub fn spacing(&self, group: Group) -> Duration {
        match group {
            Group::Pedestrian => self.pedestrian_spacing,
            Group::NorthCar | Group::SouthCar => self.car_spacing,
        }
    }

    pub fn transit(&self, group: Group) -> &[Serde<Duration>] {
        match group {
            Group::Pedestrian => &self.pedestrian_transit,
            Group::NorthCar | Group::SouthCar => &self.car_transit,
        }
    }

    /// A group that sends anyone needs at least one transit time to draw from
    pub fn validate(&self) -> Result<()> {
        for group in Group::ALL {
            if self.count(group) > 0 && self.transit(group).is_empty() {
                let field = match group {
                    Group::Pedestrian => "pedestrian_transit",
                    Group::NorthCar | Group::SouthCar => "car_transit",
                };
                bail!("invalid value for {field}: needs at least one duration");
            }
        }
        Ok(())
    }

    /// Every traveler with their offset from the start of the run, earliest
    /// first. Ties keep north, south, pedestrian order.
    pub fn schedule(&self) -> Vec<Arrival> {
        let mut arrivals: Vec<Arrival> = Group::ALL
            .iter()
            .flat_map(|&group| {
                let spacing = self.spacing(group);
                (0..self.count(group)).map(move |i| Arrival {
                    at: spacing.saturating_mul(i),
                    traveler: Traveler { id: i + 1, group },
                })
            })
            .collect();
        arrivals.sort_by_key(|arrival| arrival.at);
        arrivals
    }
}

/// A traveler due at `at` after the run starts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arrival {
    pub at: Duration,
    pub traveler: Traveler,
}

/// One car or pedestrian, numbered within its group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Traveler {
    pub id: u32,
    pub group: Group,
}

impl fmt::Display for Traveler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.group.direction() {
            Some(direction) => write!(f, "Car {} heading {}", self.id, direction),
            None => write!(f, "Pedestrian {}", self.id),
        }
    }
}

#[cfg(test)]
#[path = "traffic_tests.rs"]
mod tests;
