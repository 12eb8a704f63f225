// ABOUTME: Two-dice roll used to pick a session duration in minutes
// ABOUTME: Sum of two six-sided dice, always within the stored dice range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use rand::Rng;

/// Sum of two six-sided dice
pub fn roll_dice<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(1..=6) + rng.gen_range(1..=6)
}

/// Roll and print a session duration
pub fn roll() {
    let value = roll_dice(&mut rand::thread_rng());
    println!("Rolled {value}: practice for {value} minutes");
}
