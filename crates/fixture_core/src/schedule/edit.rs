use crate::error::{FixtureError, Result};
use crate::models::{Match, SlotRef};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Which side of a pairing an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

/// An operator edit to a schedule.
///
/// Edits address a pairing by `(round_number, zone, pairing_index)` and
/// apply to every category row of that pairing at once, so the rows can
/// never drift apart. `apply_edit` returns a new list; the input stays
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchEdit {
    /// Swap home and away of a pairing.
    SwapHomeAway {
        round_number: u32,
        #[serde(default)]
        zone: Option<String>,
        pairing_index: u8,
    },
    /// Replace a concrete team with another one.
    ReassignTeam {
        round_number: u32,
        #[serde(default)]
        zone: Option<String>,
        pairing_index: u8,
        side: TeamSide,
        team_id: String,
    },
    /// Resolve a symbolic playoff slot to a concrete team. The only way a
    /// placeholder ever becomes real.
    AssignSlot {
        round_number: u32,
        #[serde(default)]
        zone: Option<String>,
        pairing_index: u8,
        side: TeamSide,
        team_id: String,
    },
    /// Retime a single category row of a pairing.
    ChangeKickoff {
        round_number: u32,
        #[serde(default)]
        zone: Option<String>,
        pairing_index: u8,
        category_id: String,
        kickoff: NaiveTime,
    },
}

pub fn apply_edit(matches: &[Match], edit: &MatchEdit) -> Result<Vec<Match>> {
    match edit {
        MatchEdit::SwapHomeAway {
            round_number,
            zone,
            pairing_index,
        } => edit_pairing(matches, *round_number, zone.as_deref(), *pairing_index, |m| {
            std::mem::swap(&mut m.home, &mut m.away);
            Ok(())
        }),

        MatchEdit::ReassignTeam {
            round_number,
            zone,
            pairing_index,
            side,
            team_id,
        } => {
            reject_double_booking(matches, *round_number, zone.as_deref(), *pairing_index, team_id)?;
            edit_pairing(matches, *round_number, zone.as_deref(), *pairing_index, |m| {
                match side_slot(m, *side) {
                    SlotRef::Symbolic(slot) => Err(FixtureError::SlotUnresolved {
                        zone: slot.zone.clone(),
                        rank: slot.rank,
                    }),
                    slot => {
                        *slot = SlotRef::team(team_id);
                        check_distinct_sides(m)
                    }
                }
            })
        }

        MatchEdit::AssignSlot {
            round_number,
            zone,
            pairing_index,
            side,
            team_id,
        } => {
            reject_double_booking(matches, *round_number, zone.as_deref(), *pairing_index, team_id)?;
            edit_pairing(matches, *round_number, zone.as_deref(), *pairing_index, |m| {
                match side_slot(m, *side) {
                    SlotRef::Team(existing) => Err(FixtureError::SlotAlreadyResolved {
                        team_id: existing.clone(),
                    }),
                    slot => {
                        *slot = SlotRef::team(team_id);
                        check_distinct_sides(m)
                    }
                }
            })
        }

        MatchEdit::ChangeKickoff {
            round_number,
            zone,
            pairing_index,
            category_id,
            kickoff,
        } => {
            let mut out = matches.to_vec();
            let mut pairing_seen = false;
            let mut touched = false;
            for m in out.iter_mut() {
                if m.same_pairing(*round_number, zone.as_deref(), *pairing_index) {
                    pairing_seen = true;
                    if &m.category_id == category_id {
                        m.kickoff = *kickoff;
                        touched = true;
                    }
                }
            }
            if !pairing_seen {
                return Err(FixtureError::PairingNotFound {
                    round_number: *round_number,
                    pairing_index: *pairing_index,
                });
            }
            if !touched {
                return Err(FixtureError::CategoryNotFound {
                    category_id: category_id.clone(),
                });
            }
            Ok(out)
        }
    }
}

fn edit_pairing(
    matches: &[Match],
    round_number: u32,
    zone: Option<&str>,
    pairing_index: u8,
    mut apply: impl FnMut(&mut Match) -> Result<()>,
) -> Result<Vec<Match>> {
    let mut out = matches.to_vec();
    let mut touched = false;
    for m in out.iter_mut() {
        if m.same_pairing(round_number, zone, pairing_index) {
            apply(m)?;
            touched = true;
        }
    }
    if !touched {
        return Err(FixtureError::PairingNotFound {
            round_number,
            pairing_index,
        });
    }
    Ok(out)
}

fn side_slot(m: &mut Match, side: TeamSide) -> &mut SlotRef {
    match side {
        TeamSide::Home => &mut m.home,
        TeamSide::Away => &mut m.away,
    }
}

// A team plays at most once per round; reject edits that would book it
// into a second pairing of the same round.
fn reject_double_booking(
    matches: &[Match],
    round_number: u32,
    zone: Option<&str>,
    pairing_index: u8,
    team_id: &str,
) -> Result<()> {
    let clash = matches.iter().any(|m| {
        m.round_number == round_number
            && !(m.zone.as_deref() == zone && m.pairing_index == pairing_index)
            && m.involves(team_id)
    });
    if clash {
        return Err(FixtureError::DuplicateTeamInRound {
            team_id: team_id.to_string(),
            round_number,
        });
    }
    Ok(())
}

// Both sides of the edited pairing must stay distinct teams.
fn check_distinct_sides(m: &Match) -> Result<()> {
    if m.home.is_resolved() && m.home.team_id() == m.away.team_id() {
        return Err(FixtureError::DuplicateTeamInRound {
            team_id: m.home.team_id().unwrap_or_default().to_string(),
            round_number: m.round_number,
        });
    }
    Ok(())
}
