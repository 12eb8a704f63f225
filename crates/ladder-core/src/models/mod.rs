// ABOUTME: Core data models for the kettlebell ladder tracker
// ABOUTME: Re-exports PracticeSession, NewPracticeSession, Intensity and LadderSets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

//! # Data Models
//!
//! - `PracticeSession`: one stored session, unique per user and calendar day
//! - `NewPracticeSession`: create/update payload
//! - `Intensity`: Heavy / Medium / Light
//! - `LadderSets`: the five ladder slot heights of a session

mod intensity;
mod ladder;
mod practice;

pub use intensity::Intensity;
pub use ladder::LadderSets;
pub use practice::{NewPracticeSession, PracticeSession};
