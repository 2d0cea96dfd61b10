use serde::{Deserialize, Serialize};

/// A registered team. The engine never invents teams; it only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    /// Seeded teams are spread across zones before anyone else is dealt.
    #[serde(default)]
    pub seeded: bool,
    /// Zone label stamped by the latest draw; cleared on every re-draw.
    #[serde(default)]
    pub zone: Option<String>,
}

impl Team {
    pub fn new(id: &str, name: &str) -> Self {
        Team {
            id: id.to_string(),
            name: name.to_string(),
            seeded: false,
            zone: None,
        }
    }

    pub fn seeded(id: &str, name: &str) -> Self {
        Team {
            seeded: true,
            ..Team::new(id, name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_defaults() {
        let team = Team::new("t1", "Atlético Norte");
        assert!(!team.seeded);
        assert!(team.zone.is_none());
        assert!(Team::seeded("t2", "Sur FC").seeded);
    }

    #[test]
    fn test_team_json_optional_fields() {
        // Hand-written registries usually omit `seeded` and `zone`.
        let team: Team = serde_json::from_str(r#"{"id":"t1","name":"Norte"}"#).unwrap();
        assert_eq!(team.id, "t1");
        assert!(!team.seeded);
        assert!(team.zone.is_none());
    }
}
