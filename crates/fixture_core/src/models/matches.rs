use super::SlotRef;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One playable game: a pairing expanded into a specific category.
///
/// Identity is `(round_number, zone, pairing_index, category_id)`; results
/// are recorded by the host application and only ever read here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub round_number: u32,
    #[serde(default)]
    pub zone: Option<String>,
    pub date: NaiveDate,
    pub pairing_index: u8,
    pub category_id: String,
    pub kickoff: NaiveTime,
    pub home: SlotRef,
    pub away: SlotRef,
    #[serde(default)]
    pub played: bool,
    #[serde(default)]
    pub home_goals: u8,
    #[serde(default)]
    pub away_goals: u8,
}

impl Match {
    /// True when both sides are concrete team ids.
    pub fn is_resolved(&self) -> bool {
        self.home.is_resolved() && self.away.is_resolved()
    }

    pub fn same_pairing(&self, round_number: u32, zone: Option<&str>, pairing_index: u8) -> bool {
        self.round_number == round_number
            && self.zone.as_deref() == zone
            && self.pairing_index == pairing_index
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.home.team_id() == Some(team_id) || self.away.team_id() == Some(team_id)
    }
}
