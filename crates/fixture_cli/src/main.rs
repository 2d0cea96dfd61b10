//! Fixture CLI
//!
//! Draw schedules, append playoff rounds, and print standings from JSON
//! team and category files.

#[cfg(feature = "cli")]
use anyhow::{bail, Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use fixture_core::{
    apply_zone_labels, build_playoff_round, expand_rounds, propose_schedule, standings_for_zone,
    standings_table, DayOfWeek, DrawFormat, DrawSettings, Match, PlayoffModality,
};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "fixture_cli")]
#[command(about = "Draw tournament schedules and standings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Draw a new schedule from team and category files
    Draw {
        /// Team registry JSON file
        #[arg(long)]
        teams: PathBuf,

        /// Category list JSON file
        #[arg(long)]
        categories: PathBuf,

        /// Draw seed; the same seed reproduces the same schedule
        #[arg(long)]
        seed: u64,

        /// First possible matchday (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Number of zones; omit for a single league
        #[arg(long)]
        zones: Option<u8>,

        /// Allowed matchday, repeatable (monday..sunday)
        #[arg(long = "matchday")]
        matchdays: Vec<String>,

        /// Write the full schedule JSON here
        #[arg(long)]
        out: Option<PathBuf>,

        /// Write a draw summary JSON here
        #[arg(long)]
        summary: Option<PathBuf>,
    },

    /// Append a playoff round to a drawn schedule
    Playoff {
        /// Schedule JSON file produced by `draw`
        #[arg(long)]
        schedule: PathBuf,

        /// Category list JSON file
        #[arg(long)]
        categories: PathBuf,

        /// single-final | two-place-finals | semifinals-and-final
        #[arg(long)]
        modality: String,

        /// Playoff date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Write the extended schedule JSON here
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the standings table of a schedule file
    Standings {
        /// Schedule JSON file with recorded results
        #[arg(long)]
        schedule: PathBuf,

        /// Team registry JSON file (for names)
        #[arg(long)]
        teams: PathBuf,

        /// Restrict to one zone label
        #[arg(long)]
        zone: Option<String>,

        /// Restrict to one category id
        #[arg(long)]
        category: Option<String>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Draw {
            teams,
            categories,
            seed,
            start,
            zones,
            matchdays,
            out,
            summary: summary_path,
        } => {
            let teams = fixture_cli::load_teams(&teams)?;
            let categories = fixture_cli::load_categories(&categories)?;
            let matchdays = matchdays
                .iter()
                .map(|day| parse_matchday(day))
                .collect::<Result<Vec<_>>>()?;
            let format = match zones {
                Some(zone_count) => DrawFormat::Zoned { zone_count },
                None => DrawFormat::SingleLeague,
            };
            let settings = DrawSettings {
                format,
                start_date: parse_date(&start)?,
                matchdays,
                seed,
            };

            println!("🎲 Drawing schedule...");
            println!("   Teams:      {}", teams.len());
            println!(
                "   Categories: {} active",
                categories.iter().filter(|c| c.active).count()
            );

            let proposal = propose_schedule(&teams, &categories, &settings)?;
            let summary = fixture_cli::DrawSummary::from_proposal(seed, &proposal);

            println!("\n✅ Schedule drawn!");
            for zone in &proposal.zones {
                println!("   Zone {}: {} teams", zone.label, zone.team_ids.len());
            }
            print_summary(&summary);

            if let Some(out) = out {
                fixture_cli::save_schedule(&out, &proposal)?;
                println!("\n📄 Schedule saved to: {}", out.display());
            }
            if let Some(summary_path) = summary_path {
                save_summary(&summary_path, &summary)?;
            }
        }

        Commands::Playoff {
            schedule,
            categories,
            modality,
            date,
            out,
        } => {
            let mut proposal = fixture_cli::load_schedule(&schedule)?;
            let categories = fixture_cli::load_categories(&categories)?;
            let modality = parse_modality(&modality)?;

            let labels: Vec<String> = proposal.zones.iter().map(|z| z.label.clone()).collect();
            let round_number = proposal.playoff_round_number();
            let round = build_playoff_round(modality, &labels, round_number, parse_date(&date)?)?;
            let matches = expand_rounds(std::slice::from_ref(&round), &categories)?;

            println!("🏆 Playoff round {} ({} pairings)", round_number, round.pairings.len());
            println!("   Matches added: {}", matches.len());

            proposal.rounds.push(round);
            proposal.matches.extend(matches);

            if let Some(out) = out {
                fixture_cli::save_schedule(&out, &proposal)?;
                println!("\n📄 Schedule saved to: {}", out.display());
            }
        }

        Commands::Standings {
            schedule,
            teams,
            zone,
            category,
        } => {
            let proposal = fixture_cli::load_schedule(&schedule)?;
            let teams = fixture_cli::load_teams(&teams)?;
            let teams = apply_zone_labels(&teams, &proposal.zones);

            let matches: Vec<Match> = match &category {
                Some(category_id) => proposal
                    .matches
                    .iter()
                    .filter(|m| &m.category_id == category_id)
                    .cloned()
                    .collect(),
                None => proposal.matches,
            };
            let rows = match &zone {
                Some(label) => standings_for_zone(&matches, &teams, label),
                None => standings_table(&matches, &teams),
            };

            println!(
                "{:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
                "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
            );
            for row in &rows {
                let name = teams
                    .iter()
                    .find(|t| t.id == row.team_id)
                    .map(|t| t.name.as_str())
                    .unwrap_or(row.team_id.as_str());
                println!(
                    "{:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}",
                    name,
                    row.played,
                    row.won,
                    row.drawn,
                    row.lost,
                    row.goals_for,
                    row.goals_against,
                    row.goal_diff,
                    row.points
                );
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_summary(summary: &fixture_cli::DrawSummary) {
    println!("   Rounds:  {}", summary.round_count);
    println!("   Matches: {}", summary.match_count);
    if let (Some(first), Some(last)) = (&summary.first_matchday, &summary.last_matchday) {
        println!("   Matchdays: {} to {}", first, last);
    }
    println!(
        "   Playoff would start at round {}",
        summary.playoff_round_number
    );
}

#[cfg(feature = "cli")]
fn save_summary(path: &PathBuf, summary: &fixture_cli::DrawSummary) -> Result<()> {
    let summary_json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, summary_json)?;
    println!("\n📄 Summary saved to: {}", path.display());
    Ok(())
}

#[cfg(feature = "cli")]
fn parse_date(s: &str) -> Result<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' (expected YYYY-MM-DD)", s))
}

#[cfg(feature = "cli")]
fn parse_matchday(s: &str) -> Result<DayOfWeek> {
    match s.to_lowercase().as_str() {
        "monday" | "mon" => Ok(DayOfWeek::Monday),
        "tuesday" | "tue" => Ok(DayOfWeek::Tuesday),
        "wednesday" | "wed" => Ok(DayOfWeek::Wednesday),
        "thursday" | "thu" => Ok(DayOfWeek::Thursday),
        "friday" | "fri" => Ok(DayOfWeek::Friday),
        "saturday" | "sat" => Ok(DayOfWeek::Saturday),
        "sunday" | "sun" => Ok(DayOfWeek::Sunday),
        other => bail!("Unknown matchday: {}", other),
    }
}

#[cfg(feature = "cli")]
fn parse_modality(s: &str) -> Result<PlayoffModality> {
    match s {
        "single-final" => Ok(PlayoffModality::SingleFinal),
        "two-place-finals" => Ok(PlayoffModality::TwoPlaceFinals),
        "semifinals-and-final" => Ok(PlayoffModality::SemifinalsAndFinal),
        other => bail!("Unknown modality: {}", other),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("fixture_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
