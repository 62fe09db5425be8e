// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tunnel-core: Bridge monitor for a single-lane tunnel
//!
//! This crate provides:
//! - Shared bridge state as a pure state machine
//! - Admission predicates for the simple and fair policies
//! - The fairness controller that moves the right-of-way token
//! - `BridgeMonitor`, the blocking monitor travelers call into

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod admission;
pub mod config;
pub mod effect;
pub mod fairness;
pub mod group;
pub mod monitor;
pub mod policy;
pub mod state;
pub mod token;

// Re-exports
pub use config::{ConfigError, MonitorConfig, PolicyKind};
pub use effect::{Effect, Event};
pub use group::{Direction, Group, GroupCounts};
pub use monitor::BridgeMonitor;
pub use policy::{FairLimits, Policy, DEFAULT_CAR_LIMIT, DEFAULT_PED_LIMIT};
pub use state::{BridgeInput, BridgeState};
pub use token::Token;
