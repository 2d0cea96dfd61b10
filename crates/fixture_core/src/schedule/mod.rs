pub mod calendar;
pub mod edit;
pub mod expander;
pub mod playoff;
pub mod round_robin;
pub mod zones;

pub use calendar::{date_for_round, DEFAULT_MATCHDAY};
pub use edit::{apply_edit, MatchEdit, TeamSide};
pub use expander::{expand_rounds, MAX_PAIRINGS_PER_ROUND};
pub use playoff::{build_final_round, build_playoff_round};
pub use round_robin::round_robin_rounds;
pub use zones::{allocate_zones, apply_zone_labels, Zone, MAX_ZONES};

use crate::error::{FixtureError, Result};
use crate::models::{Category, DrawFormat, DrawSettings, Match, Pairing, RoundSlot, Team};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A fully generated schedule, held in memory until the caller decides to
/// commit it. Proposing is pure computation; persisting (and confirming
/// the overwrite of an old schedule) stays with the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleProposal {
    /// Empty for a single-league draw.
    pub zones: Vec<Zone>,
    pub rounds: Vec<RoundSlot>,
    pub matches: Vec<Match>,
}

impl ScheduleProposal {
    /// Round number a playoff would occupy: one past the last group round.
    pub fn playoff_round_number(&self) -> u32 {
        self.rounds.iter().map(|r| r.round_number).max().unwrap_or(0) + 1
    }

    pub fn round(&self, round_number: u32, zone: Option<&str>) -> Option<&RoundSlot> {
        self.rounds
            .iter()
            .find(|r| r.round_number == round_number && r.zone.as_deref() == zone)
    }
}

/// Run the whole draw: deal zones, generate round-robins, map rounds onto
/// the calendar, and expand pairings into per-category matches.
///
/// Validation happens before anything else, so a bad request never yields
/// a partial schedule. The RNG is seeded from `settings.seed`: one seed,
/// one draw.
pub fn propose_schedule(
    teams: &[Team],
    categories: &[Category],
    settings: &DrawSettings,
) -> Result<ScheduleProposal> {
    settings.validate()?;
    if teams.is_empty() {
        return Err(FixtureError::EmptyTeamList);
    }
    if !categories.iter().any(|c| c.active) {
        return Err(FixtureError::NoActiveCategories);
    }
    if settings.matchdays.is_empty() {
        warn!("No matchdays configured; defaulting to {:?}", DEFAULT_MATCHDAY);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);

    // (zone stamp, pairing lists per round) per competition group.
    let (zones, groups): (Vec<Zone>, Vec<(Option<String>, Vec<Vec<Pairing>>)>) =
        match settings.format {
            DrawFormat::SingleLeague => {
                let mut ids: Vec<String> = teams.iter().map(|t| t.id.clone()).collect();
                ids.shuffle(&mut rng);
                (Vec::new(), vec![(None, round_robin_rounds(&ids))])
            }
            DrawFormat::Zoned { zone_count } => {
                let zones = allocate_zones(teams, zone_count, &mut rng)?;
                let groups = zones
                    .iter()
                    .map(|z| (Some(z.label.clone()), round_robin_rounds(&z.team_ids)))
                    .collect();
                (zones, groups)
            }
        };

    let mut rounds = Vec::new();
    for (zone, per_round) in &groups {
        for (i, pairings) in per_round.iter().enumerate() {
            let round_number = (i + 1) as u32;
            let date = date_for_round(settings.start_date, &settings.matchdays, round_number)?;
            rounds.push(RoundSlot {
                round_number,
                zone: zone.clone(),
                date,
                pairings: pairings.clone(),
            });
        }
    }
    // Zone groups run in parallel: round r of every zone shares a date.
    rounds.sort_by_key(|r| (r.round_number, r.zone.clone()));

    let matches = expand_rounds(&rounds, categories)?;

    info!(
        "Schedule proposed: {} teams, {} zones, {} rounds, {} matches",
        teams.len(),
        zones.len(),
        rounds.len(),
        matches.len()
    );

    Ok(ScheduleProposal {
        zones,
        rounds,
        matches,
    })
}
