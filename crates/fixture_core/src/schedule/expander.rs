use crate::error::{FixtureError, Result};
use crate::models::{Category, Match, RoundSlot};

/// Most pairings one round can carry: `pairing_index` is a `u8` and part
/// of a match's identity, so indices must not wrap.
pub const MAX_PAIRINGS_PER_ROUND: usize = u8::MAX as usize + 1;

/// Expand scheduled rounds into one match per pairing and active category.
///
/// Pure and idempotent: the same rounds and categories always produce the
/// same list, so a re-run can be diffed against a stored schedule. An
/// empty active-category set yields an empty list, which the caller
/// surfaces as a state of its own rather than an error; symbolic playoff
/// pairings expand exactly like concrete ones. A round with more than
/// [`MAX_PAIRINGS_PER_ROUND`] pairings is rejected before any match is
/// built, so two pairings can never share an index.
pub fn expand_rounds(rounds: &[RoundSlot], categories: &[Category]) -> Result<Vec<Match>> {
    let active: Vec<&Category> = categories.iter().filter(|c| c.active).collect();

    let mut matches = Vec::with_capacity(rounds.len() * active.len());
    for round in rounds {
        if round.pairings.len() > MAX_PAIRINGS_PER_ROUND {
            return Err(FixtureError::TooManyPairings {
                round_number: round.round_number,
                count: round.pairings.len(),
            });
        }
        for (index, pairing) in round.pairings.iter().enumerate() {
            for category in &active {
                matches.push(Match {
                    round_number: round.round_number,
                    zone: round.zone.clone(),
                    date: round.date,
                    pairing_index: index as u8,
                    category_id: category.id.clone(),
                    kickoff: category.kickoff,
                    home: pairing.home.clone(),
                    away: pairing.away.clone(),
                    played: false,
                    home_goals: 0,
                    away_goals: 0,
                });
            }
        }
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pairing, SlotRef};
    use chrono::{NaiveDate, NaiveTime};

    fn rounds() -> Vec<RoundSlot> {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        vec![
            RoundSlot {
                round_number: 1,
                zone: Some("A".to_string()),
                date,
                pairings: vec![
                    Pairing::new(SlotRef::team("t1"), SlotRef::team("t2")),
                    Pairing::new(SlotRef::team("t3"), SlotRef::team("t4")),
                ],
            },
            RoundSlot {
                round_number: 2,
                zone: Some("A".to_string()),
                date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
                pairings: vec![Pairing::new(SlotRef::team("t2"), SlotRef::team("t3"))],
            },
        ]
    }

    fn categories() -> Vec<Category> {
        let mut c2016 = Category::new("c2016", "2016", NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        c2016.active = false;
        vec![
            Category::new("c2015", "2015", NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
            Category::new("c2014", "2014", NaiveTime::from_hms_opt(11, 0, 0).unwrap()),
            c2016,
        ]
    }

    #[test]
    fn test_one_match_per_pairing_and_active_category() {
        let matches = expand_rounds(&rounds(), &categories()).unwrap();
        // 3 pairings x 2 active categories.
        assert_eq!(matches.len(), 6);
        assert!(matches.iter().all(|m| m.category_id != "c2016"));

        let first = &matches[0];
        assert_eq!(first.round_number, 1);
        assert_eq!(first.pairing_index, 0);
        assert_eq!(first.category_id, "c2015");
        assert_eq!(first.kickoff, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(first.zone.as_deref(), Some("A"));
        assert!(!first.played);
    }

    #[test]
    fn test_pairing_index_follows_round_order() {
        let matches = expand_rounds(&rounds(), &categories()).unwrap();
        let indices: Vec<(u32, u8)> = matches.iter().map(|m| (m.round_number, m.pairing_index)).collect();
        assert_eq!(
            indices,
            vec![(1, 0), (1, 0), (1, 1), (1, 1), (2, 0), (2, 0)]
        );
    }

    #[test]
    fn test_no_active_categories_yields_no_matches() {
        let mut all = categories();
        for c in &mut all {
            c.active = false;
        }
        // An explicit empty state, not an error.
        assert!(expand_rounds(&rounds(), &all).unwrap().is_empty());
        assert!(expand_rounds(&rounds(), &[]).unwrap().is_empty());
    }

    #[test]
    fn test_expansion_is_idempotent() {
        let rounds = rounds();
        let cats = categories();
        let first = serde_json::to_string(&expand_rounds(&rounds, &cats).unwrap()).unwrap();
        let second = serde_json::to_string(&expand_rounds(&rounds, &cats).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_symbolic_pairings_expand_unresolved() {
        let playoff = vec![RoundSlot {
            round_number: 4,
            zone: None,
            date: NaiveDate::from_ymd_opt(2026, 4, 25).unwrap(),
            pairings: vec![Pairing::new(SlotRef::symbolic("A", 1), SlotRef::symbolic("B", 1))],
        }];
        let matches = expand_rounds(&playoff, &categories()).unwrap();
        assert_eq!(matches.len(), 2);
        for m in &matches {
            assert!(!m.is_resolved());
            assert_eq!(m.zone, None);
            assert_eq!(m.round_number, 4);
        }
    }

    fn wide_round(pairing_count: usize) -> RoundSlot {
        RoundSlot {
            round_number: 1,
            zone: None,
            date: NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
            pairings: (0..pairing_count)
                .map(|i| {
                    Pairing::new(
                        SlotRef::team(&format!("h{}", i)),
                        SlotRef::team(&format!("a{}", i)),
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_pairing_count_at_the_ceiling_keeps_indices_distinct() {
        let matches = expand_rounds(&[wide_round(256)], &categories()).unwrap();
        assert_eq!(matches.len(), 512);
        assert_eq!(matches.last().unwrap().pairing_index, u8::MAX);
    }

    #[test]
    fn test_round_with_too_many_pairings_rejected() {
        let result = expand_rounds(&[wide_round(257)], &categories());
        assert!(matches!(
            result,
            Err(FixtureError::TooManyPairings {
                round_number: 1,
                count: 257
            })
        ));
    }
}
