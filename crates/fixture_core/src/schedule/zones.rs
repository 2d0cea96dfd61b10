use crate::error::{FixtureError, Result};
use crate::models::Team;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Zone labels run A..Z; more zones than letters is not a draw we support.
pub const MAX_ZONES: u8 = 26;

/// One zone of the group phase with its dealt membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub label: String,
    pub team_ids: Vec<String>,
}

// Callers are bounded by MAX_ZONES, so the arithmetic stays inside A..Z.
fn zone_label(index: u8) -> String {
    ((b'A' + index) as char).to_string()
}

/// Deal teams into `zone_count` zones.
///
/// Seeded teams go first in registry order, round-robin (`seeded[i]` into
/// zone `i % zone_count`), so they land in distinct zones whenever there
/// are at least as many zones as seeds. The unseeded rest is shuffled with
/// the caller's RNG and dealt continuing the same cursor, which keeps zone
/// sizes within one of each other.
///
/// More zones than teams is accepted and leaves the surplus zones empty;
/// a league that expects late registrations draws that way on purpose.
pub fn allocate_zones(teams: &[Team], zone_count: u8, rng: &mut ChaCha8Rng) -> Result<Vec<Zone>> {
    if zone_count == 0 || zone_count > MAX_ZONES {
        return Err(FixtureError::InvalidZoneCount { given: zone_count });
    }
    if teams.is_empty() {
        return Err(FixtureError::EmptyTeamList);
    }

    let mut zones: Vec<Zone> = (0..zone_count)
        .map(|i| Zone {
            label: zone_label(i),
            team_ids: Vec::new(),
        })
        .collect();

    let seeded: Vec<&Team> = teams.iter().filter(|t| t.seeded).collect();
    let mut unseeded: Vec<&Team> = teams.iter().filter(|t| !t.seeded).collect();
    unseeded.shuffle(rng);

    let mut cursor = 0usize;
    for team in seeded.iter().chain(unseeded.iter()) {
        zones[cursor % zone_count as usize].team_ids.push(team.id.clone());
        cursor += 1;
    }

    for zone in &zones {
        debug!("Zone {} dealt {} teams", zone.label, zone.team_ids.len());
        if zone.team_ids.is_empty() {
            warn!("Zone {} has no teams (more zones than teams)", zone.label);
        }
    }

    Ok(zones)
}

/// Pure companion transform: a new team list with `zone` stamped from the
/// draw, and cleared for every team the draw does not mention. The caller
/// persists the result; nothing is mutated in place.
pub fn apply_zone_labels(teams: &[Team], zones: &[Zone]) -> Vec<Team> {
    teams
        .iter()
        .map(|team| {
            let mut team = team.clone();
            team.zone = zones
                .iter()
                .find(|z| z.team_ids.iter().any(|id| id == &team.id))
                .map(|z| z.label.clone());
            team
        })
        .collect()
}


#[cfg(all(test, feature = "proptest"))]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn prop_zone_balance(team_count in 1usize..40, zone_count in 1u8..8, seed in any::<u64>()) {
            let teams: Vec<Team> = (0..team_count)
                .map(|i| Team::new(&format!("t{}", i), &format!("Team {}", i)))
                .collect();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let zones = allocate_zones(&teams, zone_count, &mut rng).unwrap();

            let sizes: Vec<usize> = zones.iter().map(|z| z.team_ids.len()).collect();
            let max = sizes.iter().max().unwrap();
            let min = sizes.iter().min().unwrap();
            prop_assert!(max - min <= 1);

            let total: usize = sizes.iter().sum();
            prop_assert_eq!(total, team_count);
        }

        #[test]
        fn prop_seeds_in_distinct_zones(seed_count in 1usize..6, seed in any::<u64>()) {
            // As many zones as seeds: every seed must land alone.
            let zone_count = seed_count as u8;
            let teams: Vec<Team> = (0..seed_count * 3)
                .map(|i| {
                    let id = format!("t{}", i);
                    if i < seed_count {
                        Team::seeded(&id, &id)
                    } else {
                        Team::new(&id, &id)
                    }
                })
                .collect();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let zones = allocate_zones(&teams, zone_count, &mut rng).unwrap();

            for zone in &zones {
                let seeds_here = zone
                    .team_ids
                    .iter()
                    .filter(|id| teams.iter().any(|t| &t.id == *id && t.seeded))
                    .count();
                prop_assert_eq!(seeds_here, 1);
            }
        }
    }
}
