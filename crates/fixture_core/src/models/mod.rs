pub mod category;
pub mod matches;
pub mod round;
pub mod settings;
pub mod standings;
pub mod team;

pub use category::Category;
pub use matches::Match;
pub use round::{Pairing, RoundSlot, SlotRef, SymbolicSlot};
pub use settings::{DayOfWeek, DrawFormat, DrawSettings, PlayoffModality};
pub use standings::StandingsRow;
pub use team::Team;
