use crate::models::{Pairing, SlotRef};

/// Circle-method round-robin over the given team ids.
///
/// Returns one pairing list per round. Odd team counts play against a
/// synthetic bye whose pairings are dropped, so each team rests exactly
/// once: N teams give N rounds when N is odd, N - 1 when N is even, with
/// floor(N / 2) pairings per round. Home/away flips with round parity.
///
/// Deterministic over the input order; a caller that wants a random draw
/// shuffles the ids first. Fewer than two teams produce no rounds.
pub fn round_robin_rounds(team_ids: &[String]) -> Vec<Vec<Pairing>> {
    if team_ids.len() < 2 {
        return Vec::new();
    }

    // Seats around the circle; `None` is the bye seat for odd counts.
    let mut seats: Vec<Option<&String>> = team_ids.iter().map(Some).collect();
    if seats.len() % 2 == 1 {
        seats.push(None);
    }
    let n = seats.len();
    let rounds = n - 1;
    let half = n / 2;

    let mut schedule = Vec::with_capacity(rounds);
    for round in 0..rounds {
        let mut pairings = Vec::with_capacity(half);
        for i in 0..half {
            if let (Some(a), Some(b)) = (seats[i], seats[n - 1 - i]) {
                let pairing = if round % 2 == 0 {
                    Pairing::new(SlotRef::team(a), SlotRef::team(b))
                } else {
                    Pairing::new(SlotRef::team(b), SlotRef::team(a))
                };
                pairings.push(pairing);
            }
        }
        schedule.push(pairings);

        // Keep seat 0 fixed, rotate everyone else one step.
        if let Some(last) = seats.pop() {
            seats.insert(1, last);
        }
    }
    schedule
}


#[cfg(all(test, feature = "proptest"))]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn prop_completeness(n in 2usize..=12) {
            let ids: Vec<String> = (0..n).map(|i| format!("t{}", i)).collect();
            let schedule = round_robin_rounds(&ids);

            let expected_rounds = if n % 2 == 0 { n - 1 } else { n };
            prop_assert_eq!(schedule.len(), expected_rounds);

            let mut seen = HashSet::new();
            for round in &schedule {
                prop_assert_eq!(round.len(), n / 2);
                let mut in_round = HashSet::new();
                for pairing in round {
                    let home = pairing.home.team_id().unwrap().to_string();
                    let away = pairing.away.team_id().unwrap().to_string();
                    prop_assert!(in_round.insert(home.clone()));
                    prop_assert!(in_round.insert(away.clone()));
                    let key = if home < away { (home, away) } else { (away, home) };
                    prop_assert!(seen.insert(key));
                }
            }
            prop_assert_eq!(seen.len(), n * (n - 1) / 2);
        }
    }
}
