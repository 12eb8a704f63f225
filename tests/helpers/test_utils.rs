// ABOUTME: Practice session fixtures and in-memory test resources
// ABOUTME: Builds databases, services, and session records for integration tests

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use kettlebell_ladder::{
    config::{DatabaseConfig, ServerConfig},
    database::Database,
    models::{Intensity, LadderSets, NewPracticeSession, PracticeSession},
    resources::ServerResources,
};
use uuid::Uuid;

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Fresh migrated in-memory database
pub async fn create_test_database() -> Database {
    Database::new(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to create in-memory database")
}

/// Resources over a fresh in-memory database
pub async fn create_test_resources() -> Arc<ServerResources> {
    Arc::new(
        ServerResources::new(ServerConfig::for_testing())
            .await
            .expect("Failed to create test resources"),
    )
}

/// Successful session payload with a fixed duration
pub fn new_session(day: NaiveDate, intensity: Intensity, slots: [u32; 5]) -> NewPracticeSession {
    NewPracticeSession::new(day, intensity, LadderSets::new(slots), 8, 40)
}

/// Stored session record for pure engine tests
pub fn stored_session(
    day: NaiveDate,
    intensity: Intensity,
    slots: [u32; 5],
    success: bool,
) -> PracticeSession {
    let now = Utc::now();
    PracticeSession {
        id: Uuid::new_v4().to_string(),
        user_id: Uuid::nil(),
        date: day,
        intensity,
        ladder_sets: LadderSets::new(slots),
        dice: 8,
        pull_count: 40,
        weight_kg: None,
        success,
        created_at: now,
        updated_at: now,
        entered_at: now,
    }
}

/// Heavy successful session on `day`
pub fn heavy_on(day: NaiveDate, slots: [u32; 5]) -> PracticeSession {
    stored_session(day, Intensity::Heavy, slots, true)
}

/// Light session on `day` with the bootstrap light configuration
pub fn light_on(day: NaiveDate) -> PracticeSession {
    stored_session(day, Intensity::Light, [1, 1, 1, 0, 0], true)
}
