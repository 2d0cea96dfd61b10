use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A playoff placeholder: "rank N of zone Z". It stays symbolic until an
/// operator explicitly assigns a concrete team once the group tables are
/// final; nothing resolves it automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolicSlot {
    pub zone: String,
    pub rank: u8,
}

/// One side of a pairing: a concrete team id or a symbolic playoff slot.
///
/// Serialized untagged, so a bare string is a team id and an object is a
/// symbolic slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotRef {
    Team(String),
    Symbolic(SymbolicSlot),
}

impl SlotRef {
    pub fn team(id: &str) -> Self {
        SlotRef::Team(id.to_string())
    }

    pub fn symbolic(zone: &str, rank: u8) -> Self {
        SlotRef::Symbolic(SymbolicSlot {
            zone: zone.to_string(),
            rank,
        })
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, SlotRef::Team(_))
    }

    pub fn team_id(&self) -> Option<&str> {
        match self {
            SlotRef::Team(id) => Some(id),
            SlotRef::Symbolic(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub home: SlotRef,
    pub away: SlotRef,
}

impl Pairing {
    pub fn new(home: SlotRef, away: SlotRef) -> Self {
        Pairing { home, away }
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.home.team_id() == Some(team_id) || self.away.team_id() == Some(team_id)
    }
}

/// One scheduled round: the pairings of a zone (or of the whole league)
/// on one calendar date. Round numbers are 1-based and contiguous; the
/// playoff round is `None`-zoned because it crosses zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSlot {
    pub round_number: u32,
    #[serde(default)]
    pub zone: Option<String>,
    pub date: NaiveDate,
    pub pairings: Vec<Pairing>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_ref_untagged_json() {
        let concrete = SlotRef::team("t7");
        assert_eq!(serde_json::to_string(&concrete).unwrap(), "\"t7\"");

        let symbolic = SlotRef::symbolic("A", 1);
        let json = serde_json::to_string(&symbolic).unwrap();
        assert_eq!(json, r#"{"zone":"A","rank":1}"#);

        let back: SlotRef = serde_json::from_str("\"t7\"").unwrap();
        assert_eq!(back, concrete);
        let back: SlotRef = serde_json::from_str(r#"{"zone":"A","rank":1}"#).unwrap();
        assert_eq!(back, symbolic);
    }

    #[test]
    fn test_slot_ref_resolution() {
        assert!(SlotRef::team("t1").is_resolved());
        assert!(!SlotRef::symbolic("B", 2).is_resolved());
        assert_eq!(SlotRef::team("t1").team_id(), Some("t1"));
        assert_eq!(SlotRef::symbolic("B", 2).team_id(), None);
    }

    #[test]
    fn test_pairing_involves_ignores_symbolic() {
        let pairing = Pairing::new(SlotRef::team("t1"), SlotRef::symbolic("A", 1));
        assert!(pairing.involves("t1"));
        assert!(!pairing.involves("A"));
    }
}
