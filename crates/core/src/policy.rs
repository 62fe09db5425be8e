// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordination policies

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of waiting cars in one direction before the other direction
/// loses its free pass.
pub const DEFAULT_CAR_LIMIT: u32 = 10;

/// Default number of waiting pedestrians before cars lose their free pass.
pub const DEFAULT_PED_LIMIT: u32 = 3;

/// Queue capacities for the fair policy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairLimits {
    pub car_limit: u32,
    pub ped_limit: u32,
}

impl Default for FairLimits {
    fn default() -> Self {
        Self {
            car_limit: DEFAULT_CAR_LIMIT,
            ped_limit: DEFAULT_PED_LIMIT,
        }
    }
}

/// How the monitor arbitrates between groups
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Policy {
    /// Mutual exclusion between groups only. A group can starve.
    Simple,
    /// Mutual exclusion plus bounded waiting via the right-of-way token.
    Fair(FairLimits),
}

impl Policy {
    /// Fair policy with the default limits
    pub fn fair() -> Self {
        Policy::Fair(FairLimits::default())
    }

    pub fn fair_with_limits(car_limit: u32, ped_limit: u32) -> Self {
        Policy::Fair(FairLimits {
            car_limit,
            ped_limit,
        })
    }

    pub fn is_fair(&self) -> bool {
        matches!(self, Policy::Fair(_))
    }

    pub fn limits(&self) -> Option<FairLimits> {
        match self {
            Policy::Simple => None,
            Policy::Fair(limits) => Some(*limits),
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy::fair()
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limits() {
            None => write!(f, "simple"),
            Some(limits) => write!(
                f,
                "fair (car_limit={}, ped_limit={})",
                limits.car_limit, limits.ped_limit
            ),
        }
    }
}
