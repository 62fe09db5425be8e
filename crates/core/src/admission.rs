// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admission predicates
//!
//! Pure functions of [`BridgeState`] deciding whether a group may step onto
//! the bridge right now. They are re-evaluated on every wake and never cached.
//!
//! Under the fair policy both branches of the admission disjunction require the
//! bridge to be clear of incompatible groups. The token only decides who may go
//! once the bridge is physically free; it never lets a group in alongside
//! opposing traffic.

use crate::group::{Direction, Group};
use crate::policy::{FairLimits, Policy};
use crate::state::BridgeState;

/// Whether `group` may enter given the current state
pub fn can_enter(state: &BridgeState, group: Group) -> bool {
    match group.direction() {
        Some(direction) => car_can_enter(state, direction),
        None => ped_can_enter(state),
    }
}

/// `CarCanEnter(direction)`
pub fn car_can_enter(state: &BridgeState, direction: Direction) -> bool {
    let group = direction.group();
    if !is_clear_for(state, group) {
        return false;
    }

    match state.policy {
        Policy::Simple => true,
        Policy::Fair(limits) => {
            car_queues_short(state, direction, limits) || state.token.favors(group)
        }
    }
}

/// `PedCanEnter()`
pub fn ped_can_enter(state: &BridgeState) -> bool {
    if !is_clear_for(state, Group::Pedestrian) {
        return false;
    }

    match state.policy {
        Policy::Simple => true,
        Policy::Fair(limits) => {
            ped_queues_short(state, limits) || state.token.favors(Group::Pedestrian)
        }
    }
}

/// No member of an incompatible group is on the bridge
pub fn is_clear_for(state: &BridgeState, group: Group) -> bool {
    group
        .incompatible()
        .iter()
        .all(|other| state.occupants[*other] == 0)
}

/// Opposing cars and pedestrians have not backed up to their limits
fn car_queues_short(state: &BridgeState, direction: Direction, limits: FairLimits) -> bool {
    state.waiting[direction.opposite().group()] < limits.car_limit
        && state.waiting[Group::Pedestrian] < limits.ped_limit
}

/// Neither car direction has backed up to the car limit
fn ped_queues_short(state: &BridgeState, limits: FairLimits) -> bool {
    state.waiting[Group::NorthCar] < limits.car_limit
        && state.waiting[Group::SouthCar] < limits.car_limit
}

#[cfg(test)]
#[path = "admission_tests.rs"]
mod tests;
