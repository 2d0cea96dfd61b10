//! # fixture_core - Tournament Fixture & Standings Engine
//!
//! Deterministic scheduling core for amateur leagues: zone draws,
//! round-robin fixture generation, calendar mapping, per-category match
//! expansion, playoff brackets, and standings derived from the match log.
//!
//! ## Features
//! - 100% deterministic draws (same seed = same schedule)
//! - Pure, in-memory pipeline; persistence stays with the caller
//! - JSON API for easy embedding

pub mod api;
pub mod error;
pub mod models;
pub mod schedule;
pub mod standings;

// Re-export main API functions
pub use api::{
    apply_edit_json, build_playoff_json, compute_standings_json, generate_schedule_json,
    ApplyEditRequest, ApplyEditResponse, BuildPlayoffRequest, BuildPlayoffResponse,
    GenerateScheduleRequest, GenerateScheduleResponse, StandingsRequest, StandingsResponse,
};
pub use error::{FixtureError, Result};

// Re-export the data model
pub use models::{
    Category, DayOfWeek, DrawFormat, DrawSettings, Match, Pairing, PlayoffModality, RoundSlot,
    SlotRef, StandingsRow, SymbolicSlot, Team,
};

// Re-export the scheduling pipeline
pub use schedule::{
    allocate_zones, apply_edit, apply_zone_labels, build_final_round, build_playoff_round,
    date_for_round, expand_rounds, propose_schedule, round_robin_rounds, MatchEdit,
    ScheduleProposal, TeamSide, Zone, DEFAULT_MATCHDAY,
};
pub use standings::{standings_for_category, standings_for_zone, standings_table};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
