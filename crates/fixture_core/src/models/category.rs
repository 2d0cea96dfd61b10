use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// An age or competition category. Every pairing expands into one match
/// per active category; inactive categories are skipped entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub active: bool,
    /// Kickoff time stamped on every match of this category.
    pub kickoff: NaiveTime,
}

impl Category {
    pub fn new(id: &str, name: &str, kickoff: NaiveTime) -> Self {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            active: true,
            kickoff,
        }
    }
}
