// ABOUTME: Re-exports command modules for ladder-cli
// ABOUTME: Session logging and suggestion, statistics, and dice rolling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

pub mod roll;
pub mod session;
pub mod stats;
