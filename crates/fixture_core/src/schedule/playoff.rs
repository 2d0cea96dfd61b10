use crate::error::{FixtureError, Result};
use crate::models::{Pairing, PlayoffModality, RoundSlot, SlotRef};
use chrono::NaiveDate;
use tracing::debug;

/// Build the symbolic playoff round that follows the group phase.
///
/// All three modalities are defined over exactly two zones. Every slot is
/// a symbolic `(zone, rank)` placeholder: this builder never looks at the
/// standings, and a placeholder only becomes a team through the explicit
/// assignment edit. The caller picks `round_number`, normally one past the
/// last group round.
pub fn build_playoff_round(
    modality: PlayoffModality,
    zone_labels: &[String],
    round_number: u32,
    date: NaiveDate,
) -> Result<RoundSlot> {
    if round_number == 0 {
        return Err(FixtureError::InvalidRound { given: round_number });
    }
    let (a, b) = match zone_labels {
        [a, b] => (a.as_str(), b.as_str()),
        _ => {
            return Err(FixtureError::UnsupportedZoneCount {
                given: zone_labels.len(),
            })
        }
    };

    let pairings = match modality {
        PlayoffModality::SingleFinal => vec![Pairing::new(
            SlotRef::symbolic(a, 1),
            SlotRef::symbolic(b, 1),
        )],
        PlayoffModality::TwoPlaceFinals => vec![
            Pairing::new(SlotRef::symbolic(a, 1), SlotRef::symbolic(b, 1)),
            Pairing::new(SlotRef::symbolic(a, 2), SlotRef::symbolic(b, 2)),
        ],
        // Crossed matchups; the final is appended later, once the
        // semifinal winners are known.
        PlayoffModality::SemifinalsAndFinal => vec![
            Pairing::new(SlotRef::symbolic(a, 1), SlotRef::symbolic(b, 2)),
            Pairing::new(SlotRef::symbolic(b, 1), SlotRef::symbolic(a, 2)),
        ],
    };

    debug!(
        "Playoff round {} ({:?}): {} pairings",
        round_number,
        modality,
        pairings.len()
    );

    Ok(RoundSlot {
        round_number,
        zone: None,
        date,
        pairings,
    })
}

/// Append the final once the semifinals are decided. Participants are
/// concrete team ids here; `(zone, rank)` cannot name a semifinal winner.
pub fn build_final_round(
    round_number: u32,
    date: NaiveDate,
    home_team_id: &str,
    away_team_id: &str,
) -> RoundSlot {
    RoundSlot {
        round_number,
        zone: None,
        date,
        pairings: vec![Pairing::new(
            SlotRef::team(home_team_id),
            SlotRef::team(away_team_id),
        )],
    }
}
