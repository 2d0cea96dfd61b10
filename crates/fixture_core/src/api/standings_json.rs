use crate::api::fixture_json::{check_schema_version, to_response_json};
use crate::models::{Match, StandingsRow, Team};
use crate::standings;
use crate::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct StandingsRequest {
    pub schema_version: u8,
    pub matches: Vec<Match>,
    pub teams: Vec<Team>,
    /// Restrict to one zone (teams must carry their zone stamp).
    #[serde(default)]
    pub zone: Option<String>,
    /// Restrict to one category.
    #[serde(default)]
    pub category_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub schema_version: u8,
    pub rows: Vec<StandingsRow>,
}

/// Compute a standings table from a match log, optionally scoped to a
/// zone and/or a category.
pub fn compute_standings_json(request_json: &str) -> Result<String, String> {
    let request: StandingsRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    check_schema_version(request.schema_version)?;

    let matches: Vec<Match> = match &request.category_id {
        Some(category_id) => request
            .matches
            .iter()
            .filter(|m| &m.category_id == category_id)
            .cloned()
            .collect(),
        None => request.matches,
    };

    let rows = match &request.zone {
        Some(zone) => standings::standings_for_zone(&matches, &request.teams, zone),
        None => standings::standings_table(&matches, &request.teams),
    };
    debug!("Standings computed: {} rows", rows.len());

    let response = StandingsResponse {
        schema_version: SCHEMA_VERSION,
        rows,
    };
    to_response_json(&response)
}
