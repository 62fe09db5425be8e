// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traveler groups and per-group counters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Direction of car traffic across the bridge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }

    /// The group made up of cars heading this way
    pub fn group(self) -> Group {
        match self {
            Direction::North => Group::NorthCar,
            Direction::South => Group::SouthCar,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
        }
    }
}

/// A traveler group. Members of the same group may share the bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    NorthCar,
    SouthCar,
    Pedestrian,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::NorthCar, Group::SouthCar, Group::Pedestrian];

    /// Car direction for car groups, `None` for pedestrians
    pub fn direction(self) -> Option<Direction> {
        match self {
            Group::NorthCar => Some(Direction::North),
            Group::SouthCar => Some(Direction::South),
            Group::Pedestrian => None,
        }
    }

    /// Groups that may never be on the bridge together with this one
    pub fn incompatible(self) -> [Group; 2] {
        match self {
            Group::NorthCar => [Group::SouthCar, Group::Pedestrian],
            Group::SouthCar => [Group::NorthCar, Group::Pedestrian],
            Group::Pedestrian => [Group::NorthCar, Group::SouthCar],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Group::NorthCar => "north_car",
            Group::SouthCar => "south_car",
            Group::Pedestrian => "pedestrian",
        }
    }
}

impl From<Direction> for Group {
    fn from(direction: Direction) -> Self {
        direction.group()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One counter per group
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCounts {
    pub north_car: u32,
    pub south_car: u32,
    pub pedestrian: u32,
}

impl GroupCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combined count of both car directions
    pub fn cars(&self) -> u32 {
        self.north_car + self.south_car
    }

    pub fn total(&self) -> u32 {
        self.cars() + self.pedestrian
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }

    /// Number of groups with a non-zero count
    pub fn groups_present(&self) -> usize {
        Group::ALL.iter().filter(|g| self[**g] > 0).count()
    }
}

impl Index<Group> for GroupCounts {
    type Output = u32;

    fn index(&self, group: Group) -> &u32 {
        match group {
            Group::NorthCar => &self.north_car,
            Group::SouthCar => &self.south_car,
            Group::Pedestrian => &self.pedestrian,
        }
    }
}

impl IndexMut<Group> for GroupCounts {
    fn index_mut(&mut self, group: Group) -> &mut u32 {
        match group {
            Group::NorthCar => &mut self.north_car,
            Group::SouthCar => &mut self.south_car,
            Group::Pedestrian => &mut self.pedestrian,
        }
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
