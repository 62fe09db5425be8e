// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fairness controller: right-of-way token updates
//!
//! Always runs inside a monitor critical section, as part of the admission or
//! departure that triggered it.

use crate::group::{Group, GroupCounts};
use crate::token::Token;

/// Token after `group` is admitted. An unowned token goes to the newcomer.
pub fn claim(token: Token, group: Group) -> Token {
    if token.is_empty() {
        Token::from(group)
    } else {
        token
    }
}

/// Token after a member of `leaving` exits.
///
/// Only the holder's departures move the token. Cars hand it to the opposite
/// direction first and pedestrians second; pedestrians hand it to whichever car
/// direction has more waiters, north on a tie.
pub fn hand_off(token: Token, leaving: Group, waiting: &GroupCounts) -> Token {
    if !token.is_held_by(leaving) {
        return token;
    }

    match leaving.direction() {
        Some(direction) => {
            let opposite = direction.opposite().group();
            if waiting[opposite] > 0 {
                Token::from(opposite)
            } else if waiting[Group::Pedestrian] > 0 {
                Token::Pedestrian
            } else {
                Token::Empty
            }
        }
        None => next_car_direction(waiting),
    }
}

fn next_car_direction(waiting: &GroupCounts) -> Token {
    let north = waiting[Group::NorthCar];
    let south = waiting[Group::SouthCar];

    if north > 0 && north >= south {
        Token::North
    } else if south > 0 {
        Token::South
    } else {
        Token::Empty
    }
}

#[cfg(test)]
#[path = "fairness_tests.rs"]
mod tests;
