//! Fixture CLI Library
//!
//! Team/category JSON → drawn schedule file → draw summary JSON
//! File helpers shared by the draw / playoff / standings commands

use anyhow::{Context, Result};
use fixture_core::{Category, ScheduleProposal, Team};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Summary of one drawn schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawSummary {
    /// Seed the draw ran with; the same seed reproduces the schedule
    pub seed: u64,
    /// Zones dealt (0 for a single league)
    pub zone_count: usize,
    /// Scheduled round slots across all zones
    pub round_count: usize,
    /// Matches across all active categories
    pub match_count: usize,
    /// Round number a playoff round would occupy
    pub playoff_round_number: u32,
    /// First matchday (YYYY-MM-DD), absent when nothing was scheduled
    pub first_matchday: Option<String>,
    /// Last group matchday (YYYY-MM-DD)
    pub last_matchday: Option<String>,
    /// Draw time (RFC3339 format)
    pub drawn_at: String,
}

impl DrawSummary {
    pub fn from_proposal(seed: u64, proposal: &ScheduleProposal) -> Self {
        let dates: Vec<_> = proposal.rounds.iter().map(|r| r.date).collect();
        DrawSummary {
            seed,
            zone_count: proposal.zones.len(),
            round_count: proposal.rounds.len(),
            match_count: proposal.matches.len(),
            playoff_round_number: proposal.playoff_round_number(),
            first_matchday: dates.iter().min().map(|d| d.format("%Y-%m-%d").to_string()),
            last_matchday: dates.iter().max().map(|d| d.format("%Y-%m-%d").to_string()),
            drawn_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Read a team registry from a JSON file.
pub fn load_teams(path: &Path) -> Result<Vec<Team>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read team file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid team file {}", path.display()))
}

/// Read a category list from a JSON file.
pub fn load_categories(path: &Path) -> Result<Vec<Category>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read category file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid category file {}", path.display()))
}

/// Read a schedule file produced by `draw` (and maybe extended by
/// `playoff`).
pub fn load_schedule(path: &Path) -> Result<ScheduleProposal> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read schedule file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid schedule file {}", path.display()))
}

/// Write a schedule file that `load_schedule` reads back.
pub fn save_schedule(path: &Path, proposal: &ScheduleProposal) -> Result<()> {
    let json = serde_json::to_string_pretty(proposal)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write schedule file {}", path.display()))?;
    Ok(())
}
