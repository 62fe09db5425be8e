// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bridge state machine
//!
//! The shared counters and right-of-way token protected by the monitor, with a
//! pure transition function. The monitor owns the only live instance and only
//! mutates it while holding its lock.

use crate::admission;
use crate::effect::{Effect, Effects, Event};
use crate::fairness;
use crate::group::{Group, GroupCounts};
use crate::policy::Policy;
use crate::token::Token;
use serde::{Deserialize, Serialize};

/// Shared state of the bridge
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeState {
    pub policy: Policy,
    /// Travelers currently on the bridge
    pub occupants: GroupCounts,
    /// Travelers blocked waiting for admission
    pub waiting: GroupCounts,
    /// Right-of-way. Stays `Empty` under the simple policy.
    pub token: Token,
    /// Completed admissions per group
    pub admitted: GroupCounts,
    /// Completed departures per group
    pub departed: GroupCounts,
    /// Monitor operations invoked so far
    pub operations: u64,
}

/// Inputs that drive bridge transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeInput {
    /// A traveler asks to enter and starts waiting
    Arrive(Group),
    /// A waiting traveler whose predicate holds steps onto the bridge
    Admit(Group),
    /// A traveler on the bridge leaves it
    Depart(Group),
}

impl BridgeState {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            occupants: GroupCounts::new(),
            waiting: GroupCounts::new(),
            token: Token::Empty,
            admitted: GroupCounts::new(),
            departed: GroupCounts::new(),
            operations: 0,
        }
    }

    /// Whether `group` may step onto the bridge now
    pub fn can_enter(&self, group: Group) -> bool {
        admission::can_enter(self, group)
    }

    /// At most one group is on the bridge
    pub fn is_exclusive(&self) -> bool {
        self.occupants.groups_present() <= 1
    }

    /// Nobody on the bridge and nobody waiting
    pub fn is_quiescent(&self) -> bool {
        self.occupants.is_zero() && self.waiting.is_zero()
    }

    /// Pure state transition function
    pub fn transition(&self, input: BridgeInput) -> (BridgeState, Vec<Effect>) {
        let mut next = self.clone();
        let effects = next.apply(input);
        (next, effects)
    }

    /// In-place transition used by the monitor under its lock
    pub fn apply(&mut self, input: BridgeInput) -> Vec<Effect> {
        let mut effects = Effects::default();

        match input {
            BridgeInput::Arrive(group) => {
                self.operations += 1;
                self.waiting[group] += 1;
                effects.emit(Event::Arrived {
                    group,
                    waiting: self.waiting[group],
                });
            }

            BridgeInput::Admit(group) => {
                debug_assert!(self.can_enter(group), "admitted {group} while blocked");
                self.waiting[group] = self.waiting[group].saturating_sub(1);

                if self.policy.is_fair() {
                    let claimed = fairness::claim(self.token, group);
                    if claimed != self.token {
                        effects.emit(Event::TokenMoved {
                            from: self.token,
                            to: claimed,
                        });
                        self.token = claimed;
                        // Peers blocked under an older token re-check
                        effects.wake(group);
                    }
                }

                self.occupants[group] += 1;
                self.admitted[group] += 1;
                effects.emit(Event::Admitted {
                    group,
                    occupants: self.occupants[group],
                });
            }

            BridgeInput::Depart(group) => {
                self.operations += 1;
                let Some(remaining) = self.occupants[group].checked_sub(1) else {
                    effects.emit(Event::ExitWithoutEntry { group });
                    return effects.into_vec();
                };
                self.occupants[group] = remaining;
                self.departed[group] += 1;

                if self.policy.is_fair() {
                    let next = fairness::hand_off(self.token, group, &self.waiting);
                    if next != self.token {
                        effects.emit(Event::TokenMoved {
                            from: self.token,
                            to: next,
                        });
                        self.token = next;
                        match next.holder() {
                            Some(holder) => effects.wake(holder),
                            None => Group::ALL.into_iter().for_each(|g| effects.wake(g)),
                        }
                    }
                }

                if remaining == 0 {
                    for other in group.incompatible() {
                        effects.wake(other);
                    }
                }

                effects.emit(Event::Departed {
                    group,
                    occupants: remaining,
                });
            }
        }

        effects.into_vec()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
