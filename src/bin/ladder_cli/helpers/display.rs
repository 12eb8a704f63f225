// ABOUTME: Output formatting helpers for ladder-cli
// ABOUTME: Consistent display of suggestions, sessions, and statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kettlebell Ladder Contributors

use chrono::NaiveDate;
use kettlebell_ladder::{
    intelligence::{session_pushes, ProgressionBasis},
    models::PracticeSession,
    services::{PracticeStats, SessionSuggestion},
};

/// Display the next session suggestion
pub fn display_suggestion(suggestion: &SessionSuggestion) {
    println!("\nNext Session");
    println!("{}", "=".repeat(50));
    println!("   Intensity: {}", suggestion.intensity);
    if suggestion.intensity != suggestion.suggested_intensity {
        println!("   (cycle suggests {})", suggestion.suggested_intensity);
    }
    println!("   Ladders:   {}", suggestion.ladder_sets);
    println!("   Pushes:    {}", suggestion.total_pushes);
    println!("   Basis:     {}", describe_basis(&suggestion.basis));
    if let Some(date) = suggestion.based_on_date {
        println!("   Based on heavy session of {date}");
    }
}

fn describe_basis(basis: &ProgressionBasis) -> String {
    match basis {
        ProgressionBasis::Bootstrap => "first heavy session not recorded yet".to_owned(),
        ProgressionBasis::Advanced { from_step, to_step } => {
            format!("staircase step {from_step} -> {to_step}")
        }
        ProgressionBasis::Ceiling => "staircase ceiling reached".to_owned(),
        ProgressionBasis::Reset => "last heavy session off the staircase, restarting".to_owned(),
        ProgressionBasis::Offset { offset } => format!("heavy baseline minus {offset}"),
    }
}

/// Display one session in detail
pub fn display_session(session: &PracticeSession) {
    println!("{}", "=".repeat(50));
    println!("   Date:      {}", session.date);
    println!("   Intensity: {}", session.intensity);
    println!("   Ladders:   {}", session.ladder_sets);
    println!("   Minutes:   {}", session.dice);
    println!("   Pulls:     {}", session.pull_count);
    if let Some(weight) = session.weight_kg {
        println!("   Weight:    {weight} kg");
    }
    println!("   Success:   {}", if session.success { "yes" } else { "no" });
}

/// Display sessions as a table
pub fn display_session_table(sessions: &[PracticeSession]) {
    println!(
        "\n{:<12} {:<8} {:<14} {:>4} {:>6} {:>7} {:>8}",
        "Date", "Level", "Ladders", "Min", "Pulls", "Pushes", "Success"
    );
    println!("{}", "-".repeat(66));
    for session in sessions {
        println!(
            "{:<12} {:<8} {:<14} {:>4} {:>6} {:>7} {:>8}",
            session.date.to_string(),
            session.intensity.as_str(),
            session.ladder_sets.to_string(),
            session.dice,
            session.pull_count,
            session_pushes(&session.ladder_sets),
            if session.success { "yes" } else { "no" },
        );
    }
    println!("{}", "-".repeat(66));
    println!("{} session(s)", sessions.len());
}

/// Display streak and volume statistics
pub fn display_stats(stats: &PracticeStats, today: NaiveDate) {
    println!("\nPractice Statistics (as of {today})");
    println!("{}", "=".repeat(50));
    println!(
        "   Sessions:               {} ({} successful)",
        stats.sessions, stats.successful_sessions
    );
    println!("   Successful pulls:       {}", stats.total_successful_pulls);
    println!("   Ladder pushes:          {}", stats.total_ladder_pushes);
    println!("   Current weekly streak:  {}", stats.current_weekly_streak);
    println!("   Longest weekly streak:  {}", stats.longest_weekly_streak);
    if let Some(last) = stats.last_session_date {
        println!("   Last session:           {last}");
    }
}
