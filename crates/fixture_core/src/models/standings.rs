use serde::{Deserialize, Serialize};

/// One row of a standings table. Always derived from the match log on
/// demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_id: String,
    pub played: u16,
    pub won: u16,
    pub drawn: u16,
    pub lost: u16,
    pub goals_for: u16,
    pub goals_against: u16,
    pub goal_diff: i32,
    pub points: u16,
}

impl StandingsRow {
    pub fn new(team_id: &str) -> Self {
        StandingsRow {
            team_id: team_id.to_string(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_diff: 0,
            points: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_row_is_zeroed() {
        let row = StandingsRow::new("t9");
        assert_eq!(row.team_id, "t9");
        assert_eq!(row.played, 0);
        assert_eq!(row.points, 0);
        assert_eq!(row.goal_diff, 0);
    }
}
