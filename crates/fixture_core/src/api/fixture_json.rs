//! JSON entry points for drawing and editing schedules.
//!
//! The engine is embedded by host applications through string-in/
//! string-out functions: every request carries a `schema_version`, every
//! response echoes it, and errors come back as plain strings the host can
//! show or log.

use crate::models::{
    Category, DayOfWeek, DrawFormat, DrawSettings, Match, PlayoffModality, RoundSlot, Team,
};
use crate::schedule::{self, expand_rounds, MatchEdit, Zone};
use crate::SCHEMA_VERSION;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct GenerateScheduleRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub teams: Vec<Team>,
    pub categories: Vec<Category>,
    pub format: DrawFormat,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub matchdays: Vec<DayOfWeek>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateScheduleResponse {
    pub schema_version: u8,
    pub zones: Vec<Zone>,
    pub rounds: Vec<RoundSlot>,
    pub matches: Vec<Match>,
    /// Where a playoff would land: one past the last group round.
    pub playoff_round_number: u32,
}

/// Draw a complete schedule from a JSON request.
pub fn generate_schedule_json(request_json: &str) -> Result<String, String> {
    let request: GenerateScheduleRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let settings = DrawSettings {
        format: request.format,
        start_date: request.start_date,
        matchdays: request.matchdays,
        seed: request.seed,
    };

    let proposal = schedule::propose_schedule(&request.teams, &request.categories, &settings)
        .map_err(|e| e.to_string())?;

    info!(
        "Draw request served: {} teams -> {} matches",
        request.teams.len(),
        proposal.matches.len()
    );

    let response = GenerateScheduleResponse {
        schema_version: SCHEMA_VERSION,
        playoff_round_number: proposal.playoff_round_number(),
        zones: proposal.zones,
        rounds: proposal.rounds,
        matches: proposal.matches,
    };
    to_response_json(&response)
}

#[derive(Debug, Deserialize)]
pub struct BuildPlayoffRequest {
    pub schema_version: u8,
    pub modality: PlayoffModality,
    /// Zone labels, e.g. `["A", "B"]`.
    pub zones: Vec<String>,
    pub round_number: u32,
    pub date: NaiveDate,
    /// Categories to expand the round into; only active ones count.
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BuildPlayoffResponse {
    pub schema_version: u8,
    pub round: RoundSlot,
    pub matches: Vec<Match>,
}

/// Build the symbolic playoff round and expand it per category.
pub fn build_playoff_json(request_json: &str) -> Result<String, String> {
    let request: BuildPlayoffRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let round = schedule::build_playoff_round(
        request.modality,
        &request.zones,
        request.round_number,
        request.date,
    )
    .map_err(|e| e.to_string())?;

    let matches = expand_rounds(std::slice::from_ref(&round), &request.categories)
        .map_err(|e| e.to_string())?;
    debug!(
        "Playoff round {} expanded into {} matches",
        round.round_number,
        matches.len()
    );

    let response = BuildPlayoffResponse {
        schema_version: SCHEMA_VERSION,
        round,
        matches,
    };
    to_response_json(&response)
}

#[derive(Debug, Deserialize)]
pub struct ApplyEditRequest {
    pub schema_version: u8,
    pub matches: Vec<Match>,
    pub edit: MatchEdit,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyEditResponse {
    pub schema_version: u8,
    pub matches: Vec<Match>,
}

/// Apply one operator edit and return the full edited match list.
pub fn apply_edit_json(request_json: &str) -> Result<String, String> {
    let request: ApplyEditRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let matches =
        schedule::apply_edit(&request.matches, &request.edit).map_err(|e| e.to_string())?;
    debug!("Edit applied; {} matches returned", matches.len());

    let response = ApplyEditResponse {
        schema_version: SCHEMA_VERSION,
        matches,
    };
    to_response_json(&response)
}

pub(crate) fn check_schema_version(found: u8) -> Result<(), String> {
    if found != SCHEMA_VERSION {
        return Err(format!(
            "Unsupported schema version: {} (expected {})",
            found, SCHEMA_VERSION
        ));
    }
    Ok(())
}

pub(crate) fn to_response_json<T: Serialize>(response: &T) -> Result<String, String> {
    serde_json::to_string(response).map_err(|e| format!("Failed to serialize response: {}", e))
}
