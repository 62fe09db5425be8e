// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events produced by bridge state transitions

use crate::group::Group;
use crate::token::Token;
use serde::{Deserialize, Serialize};

/// Side effects a transition asks the monitor to carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Wake every traveler blocked in the given group's wait-set
    Wake(Group),
    /// Emit an event for observers (logging)
    Emit(Event),
}

/// Events emitted by the bridge state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A traveler started waiting for admission
    Arrived { group: Group, waiting: u32 },
    /// A traveler stepped onto the bridge
    Admitted { group: Group, occupants: u32 },
    /// A traveler left the bridge
    Departed { group: Group, occupants: u32 },
    /// Right-of-way changed hands
    TokenMoved { from: Token, to: Token },
    /// A group exited with nobody of that group on the bridge
    ExitWithoutEntry { group: Group },
}

impl Event {
    /// Stable name for logs and filtering
    pub fn name(&self) -> &'static str {
        match self {
            Event::Arrived { .. } => "bridge:arrived",
            Event::Admitted { .. } => "bridge:admitted",
            Event::Departed { .. } => "bridge:departed",
            Event::TokenMoved { .. } => "token:moved",
            Event::ExitWithoutEntry { .. } => "bridge:exit_without_entry",
        }
    }
}

/// Collects effects, keeping at most one wake per group
#[derive(Debug, Default)]
pub(crate) struct Effects(Vec<Effect>);

impl Effects {
    pub(crate) fn wake(&mut self, group: Group) {
        if !self.0.contains(&Effect::Wake(group)) {
            self.0.push(Effect::Wake(group));
        }
    }

    pub(crate) fn emit(&mut self, event: Event) {
        self.0.push(Effect::Emit(event));
    }

    pub(crate) fn into_vec(self) -> Vec<Effect> {
        self.0
    }
}
