use crate::error::{FixtureError, Result};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Day of week for matchday selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }

    pub fn to_weekday(self) -> Weekday {
        match self {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }
}

/// Group-phase format: everyone in one league table, or dealt into zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawFormat {
    SingleLeague,
    Zoned { zone_count: u8 },
}

/// How the champion is decided after a zoned group phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayoffModality {
    /// Zone winners meet in a single final.
    SingleFinal,
    /// Final plus a third-place match between the runners-up.
    TwoPlaceFinals,
    /// Crossed semifinals; the final is appended once winners are known.
    SemifinalsAndFinal,
}

/// Everything a draw needs, passed in explicitly. The engine reads no
/// ambient configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSettings {
    pub format: DrawFormat,
    /// First date a round may land on; counts itself if it is a matchday.
    pub start_date: NaiveDate,
    /// Allowed matchdays. Empty falls back to Saturday.
    #[serde(default)]
    pub matchdays: Vec<DayOfWeek>,
    /// One seed, one draw: the same seed reproduces the same schedule.
    pub seed: u64,
}

impl DrawSettings {
    pub fn validate(&self) -> Result<()> {
        if let DrawFormat::Zoned { zone_count } = self.format {
            if zone_count == 0 || zone_count > crate::schedule::zones::MAX_ZONES {
                return Err(FixtureError::InvalidZoneCount { given: zone_count });
            }
        }
        Ok(())
    }
}
