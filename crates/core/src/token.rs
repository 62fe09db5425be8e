// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Right-of-way token used by the fair policy

use crate::group::{Direction, Group};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The group currently favored for admission, or `Empty` when nobody is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    #[default]
    Empty,
    North,
    South,
    Pedestrian,
}

impl Token {
    pub fn is_empty(self) -> bool {
        self == Token::Empty
    }

    /// The group holding the token, if any
    pub fn holder(self) -> Option<Group> {
        match self {
            Token::Empty => None,
            Token::North => Some(Group::NorthCar),
            Token::South => Some(Group::SouthCar),
            Token::Pedestrian => Some(Group::Pedestrian),
        }
    }

    pub fn is_held_by(self, group: Group) -> bool {
        self.holder() == Some(group)
    }

    /// True when `group` holds the token or nobody does
    pub fn favors(self, group: Group) -> bool {
        self.is_empty() || self.is_held_by(group)
    }
}

impl From<Group> for Token {
    fn from(group: Group) -> Self {
        match group {
            Group::NorthCar => Token::North,
            Group::SouthCar => Token::South,
            Group::Pedestrian => Token::Pedestrian,
        }
    }
}

impl From<Direction> for Token {
    fn from(direction: Direction) -> Self {
        Token::from(direction.group())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Empty => write!(f, "empty"),
            Token::North => write!(f, "north"),
            Token::South => write!(f, "south"),
            Token::Pedestrian => write!(f, "pedestrian"),
        }
    }
}
