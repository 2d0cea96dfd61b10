use crate::models::{Match, StandingsRow, Team};
use std::collections::HashMap;

/// League points per result.
pub const POINTS_WIN: u16 = 3;
pub const POINTS_DRAW: u16 = 1;

/// Fold the played matches into a table for the given teams.
///
/// Matches that are unplayed, still symbolic, or reference teams outside
/// the scope are skipped. Every team in scope gets a row, zero matches or
/// not. Rows sort by points, then goal difference, then goals for; the
/// sort is stable, so teams tied on all three keep the order of the input
/// team list. Ties beyond goals-for stay ties.
pub fn standings_table(matches: &[Match], teams: &[Team]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = teams.iter().map(|t| StandingsRow::new(&t.id)).collect();
    let index: HashMap<&str, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id.as_str(), i))
        .collect();

    for m in matches {
        if !m.played {
            continue;
        }
        let home = match m.home.team_id() {
            Some(id) => id,
            None => continue,
        };
        let away = match m.away.team_id() {
            Some(id) => id,
            None => continue,
        };

        if let Some(&i) = index.get(home) {
            let row = &mut rows[i];
            row.played += 1;
            row.goals_for += m.home_goals as u16;
            row.goals_against += m.away_goals as u16;
            if m.home_goals > m.away_goals {
                row.won += 1;
                row.points += POINTS_WIN;
            } else if m.home_goals == m.away_goals {
                row.drawn += 1;
                row.points += POINTS_DRAW;
            } else {
                row.lost += 1;
            }
        }
        if let Some(&i) = index.get(away) {
            let row = &mut rows[i];
            row.played += 1;
            row.goals_for += m.away_goals as u16;
            row.goals_against += m.home_goals as u16;
            if m.away_goals > m.home_goals {
                row.won += 1;
                row.points += POINTS_WIN;
            } else if m.away_goals == m.home_goals {
                row.drawn += 1;
                row.points += POINTS_DRAW;
            } else {
                row.lost += 1;
            }
        }
    }

    for row in &mut rows {
        row.goal_diff = row.goals_for as i32 - row.goals_against as i32;
    }

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_diff.cmp(&a.goal_diff))
            .then(b.goals_for.cmp(&a.goals_for))
    });
    rows
}

/// Table for one zone. Matches are filtered by their zone stamp and teams
/// by theirs, so callers stamp teams (see `apply_zone_labels`) before
/// asking for zone tables.
pub fn standings_for_zone(matches: &[Match], teams: &[Team], zone: &str) -> Vec<StandingsRow> {
    let zone_matches: Vec<Match> = matches
        .iter()
        .filter(|m| m.zone.as_deref() == Some(zone))
        .cloned()
        .collect();
    let zone_teams: Vec<Team> = teams
        .iter()
        .filter(|t| t.zone.as_deref() == Some(zone))
        .cloned()
        .collect();
    standings_table(&zone_matches, &zone_teams)
}

/// Table for one category across the given scope.
pub fn standings_for_category(
    matches: &[Match],
    teams: &[Team],
    category_id: &str,
) -> Vec<StandingsRow> {
    let category_matches: Vec<Match> = matches
        .iter()
        .filter(|m| m.category_id == category_id)
        .cloned()
        .collect();
    standings_table(&category_matches, teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotRef;
    use chrono::{NaiveDate, NaiveTime};

    fn team(id: &str) -> Team {
        Team::new(id, id)
    }

    fn played(home: &str, away: &str, home_goals: u8, away_goals: u8) -> Match {
        Match {
            round_number: 1,
            zone: None,
            date: NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
            pairing_index: 0,
            category_id: "c2015".to_string(),
            kickoff: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            home: SlotRef::team(home),
            away: SlotRef::team(away),
            played: true,
            home_goals,
            away_goals,
        }
    }

    #[test]
    fn test_points_three_one_zero() {
        let teams = vec![team("t1"), team("t2"), team("t3")];
        let matches = vec![played("t1", "t2", 2, 0), played("t2", "t3", 1, 1)];
        let table = standings_table(&matches, &teams);

        let row = |id: &str| table.iter().find(|r| r.team_id == id).unwrap().clone();
        assert_eq!(row("t1").points, 3);
        assert_eq!(row("t1").won, 1);
        assert_eq!(row("t2").points, 1);
        assert_eq!(row("t2").lost, 1);
        assert_eq!(row("t2").drawn, 1);
        assert_eq!(row("t3").points, 1);
        assert_eq!(row("t3").played, 1);
    }

    #[test]
    fn test_goal_difference_orders_equal_points() {
        // Both win once: t1 by 5-2, t2 by 4-3.
        let teams = vec![team("t2"), team("t1"), team("t3"), team("t4")];
        let matches = vec![played("t1", "t3", 5, 2), played("t2", "t4", 4, 3)];
        let table = standings_table(&matches, &teams);

        assert_eq!(table[0].team_id, "t1");
        assert_eq!(table[1].team_id, "t2");
        assert_eq!(table[0].points, table[1].points);
        assert!(table[0].goal_diff > table[1].goal_diff);
    }

    #[test]
    fn test_goals_for_breaks_equal_goal_difference() {
        // Equal points, equal difference, t1 scored more.
        let teams = vec![team("t2"), team("t1"), team("t3"), team("t4")];
        let matches = vec![
            played("t1", "t3", 4, 2),
            played("t2", "t4", 2, 0),
        ];
        let table = standings_table(&matches, &teams);
        assert_eq!(table[0].team_id, "t1");
        assert_eq!(table[0].goal_diff, table[1].goal_diff);
        assert!(table[0].goals_for > table[1].goals_for);
    }

    #[test]
    fn test_full_ties_keep_team_list_order() {
        let teams = vec![team("t5"), team("t2"), team("t9")];
        let table = standings_table(&[], &teams);
        let order: Vec<&str> = table.iter().map(|r| r.team_id.as_str()).collect();
        assert_eq!(order, vec!["t5", "t2", "t9"]);
    }

    #[test]
    fn test_unplayed_and_unresolved_matches_are_skipped() {
        let teams = vec![team("t1"), team("t2")];
        let mut unplayed = played("t1", "t2", 3, 0);
        unplayed.played = false;

        let mut symbolic = played("t1", "t2", 3, 0);
        symbolic.away = SlotRef::symbolic("A", 1);

        let table = standings_table(&[unplayed, symbolic], &teams);
        assert!(table.iter().all(|r| r.played == 0 && r.points == 0));
    }

    #[test]
    fn test_out_of_scope_teams_are_ignored() {
        let teams = vec![team("t1")];
        let table = standings_table(&[played("t1", "t8", 1, 0)], &teams);
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].team_id, "t1");
        assert_eq!(table[0].points, 3);
    }

    #[test]
    fn test_zone_scope_filters_matches_and_teams() {
        let mut t1 = team("t1");
        t1.zone = Some("A".to_string());
        let mut t2 = team("t2");
        t2.zone = Some("A".to_string());
        let mut t3 = team("t3");
        t3.zone = Some("B".to_string());
        let teams = vec![t1, t2, t3];

        let mut in_a = played("t1", "t2", 2, 1);
        in_a.zone = Some("A".to_string());
        let mut in_b = played("t3", "t1", 9, 0); // wrong zone, must not count
        in_b.zone = Some("B".to_string());

        let table = standings_for_zone(&[in_a, in_b], &teams, "A");
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].team_id, "t1");
        assert_eq!(table[0].goals_against, 1);
    }

    #[test]
    fn test_category_scope() {
        let teams = vec![team("t1"), team("t2")];
        let mut other = played("t2", "t1", 4, 0);
        other.category_id = "c2014".to_string();

        let table = standings_for_category(&[played("t1", "t2", 1, 0), other], &teams, "c2015");
        assert_eq!(table[0].team_id, "t1");
        assert_eq!(table[0].points, 3);
        assert_eq!(table[0].goals_against, 0);
    }

    #[test]
    fn test_match_order_does_not_change_the_table() {
        let teams = vec![team("t1"), team("t2"), team("t3")];
        let mut matches = vec![
            played("t1", "t2", 2, 0),
            played("t2", "t3", 0, 0),
            played("t3", "t1", 1, 2),
        ];
        let expected = standings_table(&matches, &teams);
        matches.rotate_left(1);
        assert_eq!(standings_table(&matches, &teams), expected);
        matches.reverse();
        assert_eq!(standings_table(&matches, &teams), expected);
    }
}
