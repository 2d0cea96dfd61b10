use crate::error::{FixtureError, Result};
use crate::models::DayOfWeek;
use chrono::{Datelike, NaiveDate, Weekday};

/// Matchday used when the caller configures none.
pub const DEFAULT_MATCHDAY: DayOfWeek = DayOfWeek::Saturday;

/// Date of the `round_number`-th allowed matchday, counting from `start`
/// inclusive: round 1 lands on `start` itself when `start` falls on an
/// allowed weekday.
///
/// Walks the calendar day by day, so month lengths and leap years come
/// from chrono rather than any arithmetic here. An empty matchday set
/// falls back to [`DEFAULT_MATCHDAY`] instead of walking forever.
pub fn date_for_round(
    start: NaiveDate,
    matchdays: &[DayOfWeek],
    round_number: u32,
) -> Result<NaiveDate> {
    if round_number == 0 {
        return Err(FixtureError::InvalidRound { given: round_number });
    }

    let allowed: Vec<Weekday> = if matchdays.is_empty() {
        vec![DEFAULT_MATCHDAY.to_weekday()]
    } else {
        matchdays.iter().map(|d| d.to_weekday()).collect()
    };

    let mut date = start;
    let mut remaining = round_number;
    loop {
        if allowed.contains(&date.weekday()) {
            remaining -= 1;
            if remaining == 0 {
                return Ok(date);
            }
        }
        date = date + chrono::Duration::days(1);
    }
}
