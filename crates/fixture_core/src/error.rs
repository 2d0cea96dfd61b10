use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixtureError>;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Team list is empty")]
    EmptyTeamList,

    #[error("Invalid zone count: {given} (must be between 1 and 26)")]
    InvalidZoneCount { given: u8 },

    #[error("No active categories")]
    NoActiveCategories,

    #[error("Invalid round number: {given} (rounds are numbered from 1)")]
    InvalidRound { given: u32 },

    #[error("Playoff needs exactly 2 zones, found {given}")]
    UnsupportedZoneCount { given: usize },

    #[error("Round {round_number} has {count} pairings (max 256 per round)")]
    TooManyPairings { round_number: u32, count: usize },

    #[error("No pairing {pairing_index} in round {round_number}")]
    PairingNotFound { round_number: u32, pairing_index: u8 },

    #[error("Category not found: {category_id}")]
    CategoryNotFound { category_id: String },

    #[error("Team {team_id} already plays in round {round_number}")]
    DuplicateTeamInRound { team_id: String, round_number: u32 },

    #[error("Slot is already resolved to team {team_id}")]
    SlotAlreadyResolved { team_id: String },

    #[error("Slot is still symbolic (zone {zone}, rank {rank}); assign a team first")]
    SlotUnresolved { zone: String, rank: u8 },
}

impl FixtureError {
    /// True for errors a caller can fix by correcting the draw input,
    /// as opposed to edits that target schedule positions that no
    /// longer exist.
    pub fn is_input_error(&self) -> bool {
        match self {
            FixtureError::EmptyTeamList => true,
            FixtureError::InvalidZoneCount { .. } => true,
            FixtureError::NoActiveCategories => true,
            FixtureError::InvalidRound { .. } => true,
            FixtureError::UnsupportedZoneCount { .. } => true,
            FixtureError::TooManyPairings { .. } => true,
            _ => false,
        }
    }
}
