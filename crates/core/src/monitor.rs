// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bridge monitor
//!
//! Serializes every entry and exit behind one mutex, with one condition
//! variable per group as that group's wait-set. A blocked traveler sleeps
//! without holding the lock and re-checks its admission predicate on every
//! wake, so over-broad or spurious wakeups are harmless.

use crate::config::{ConfigError, MonitorConfig};
use crate::effect::{Effect, Event};
use crate::group::{Direction, Group};
use crate::policy::Policy;
use crate::state::{BridgeInput, BridgeState};
use std::fmt;
use std::sync::{Condvar, Mutex, MutexGuard};
use tracing::{debug, error, info, trace};

/// Arbitrates access to a single-lane bridge shared by northbound cars,
/// southbound cars and pedestrians.
#[derive(Debug)]
pub struct BridgeMonitor {
    state: Mutex<BridgeState>,
    north_car: Condvar,
    south_car: Condvar,
    pedestrian: Condvar,
}

impl BridgeMonitor {
    pub fn new(policy: Policy) -> Self {
        Self {
            state: Mutex::new(BridgeState::new(policy)),
            north_car: Condvar::new(),
            south_car: Condvar::new(),
            pedestrian: Condvar::new(),
        }
    }

    /// Build a monitor from a validated configuration
    pub fn from_config(config: &MonitorConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.to_policy()?))
    }

    pub fn policy(&self) -> Policy {
        self.lock().policy
    }

    /// Block until a car heading `direction` may enter, then enter.
    pub fn enter_car(&self, direction: Direction) {
        self.enter(direction.group());
    }

    /// Leave the bridge as a car heading `direction`.
    pub fn exit_car(&self, direction: Direction) {
        self.exit(direction.group());
    }

    /// Block until a pedestrian may enter, then enter.
    pub fn enter_pedestrian(&self) {
        self.enter(Group::Pedestrian);
    }

    /// Leave the bridge as a pedestrian.
    pub fn exit_pedestrian(&self) {
        self.exit(Group::Pedestrian);
    }

    /// Enter as a car, run `work` while on the bridge, then exit.
    ///
    /// The exit also happens if `work` unwinds.
    pub fn cross_car<T>(&self, direction: Direction, work: impl FnOnce() -> T) -> T {
        self.cross(direction.group(), work)
    }

    /// Enter as a pedestrian, run `work` while on the bridge, then exit.
    pub fn cross_pedestrian<T>(&self, work: impl FnOnce() -> T) -> T {
        self.cross(Group::Pedestrian, work)
    }

    /// Copy of the shared state, taken under the lock
    pub fn snapshot(&self) -> BridgeState {
        self.lock().clone()
    }

    fn cross<T>(&self, group: Group, work: impl FnOnce() -> T) -> T {
        self.enter(group);
        let _crossing = Crossing {
            monitor: self,
            group,
        };
        work()
    }

    fn enter(&self, group: Group) {
        let mut state = self.lock();
        let effects = state.apply(BridgeInput::Arrive(group));
        self.dispatch(effects);

        if !state.can_enter(group) {
            trace!(%group, "blocked");
        }
        let mut state = self
            .wait_set(group)
            .wait_while(state, |s| !s.can_enter(group))
            .unwrap_or_else(|e| e.into_inner());

        let effects = state.apply(BridgeInput::Admit(group));
        self.dispatch(effects);
    }

    fn exit(&self, group: Group) {
        let mut state = self.lock();
        let effects = state.apply(BridgeInput::Depart(group));
        self.dispatch(effects);
    }

    /// Carry out transition effects. Called with the lock held.
    fn dispatch(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Wake(group) => {
                    trace!(%group, "wake");
                    self.wait_set(group).notify_all();
                }
                Effect::Emit(event) => log_event(&event),
            }
        }
    }

    fn wait_set(&self, group: Group) -> &Condvar {
        match group {
            Group::NorthCar => &self.north_car,
            Group::SouthCar => &self.south_car,
            Group::Pedestrian => &self.pedestrian,
        }
    }

    fn lock(&self) -> MutexGuard<'_, BridgeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for BridgeMonitor {
    fn default() -> Self {
        Self::new(Policy::default())
    }
}

impl fmt::Display for BridgeMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monitor: {}", self.lock().operations)
    }
}

/// Exits on drop so a panicking crossing does not leave the bridge occupied
struct Crossing<'a> {
    monitor: &'a BridgeMonitor,
    group: Group,
}

impl Drop for Crossing<'_> {
    fn drop(&mut self) {
        self.monitor.exit(self.group);
    }
}

fn log_event(event: &Event) {
    let name = event.name();
    match event {
        Event::Arrived { group, waiting } => {
            trace!(event = name, %group, waiting, "arrived");
        }
        Event::Admitted { group, occupants } => {
            debug!(event = name, %group, occupants, "admitted");
        }
        Event::Departed { group, occupants } => {
            debug!(event = name, %group, occupants, "departed");
        }
        Event::TokenMoved { from, to } => {
            info!(event = name, %from, %to, "right of way moved");
        }
        Event::ExitWithoutEntry { group } => {
            error!(event = name, %group, "exit without matching entry");
        }
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
