use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use confdash_grid::{parse_grid_csv, Day};
use confdash_model::{is_wip, parse_sessions, SessionRecord};
use confdash_overrides::{FileBackend, OverrideFields, OverrideStore};
use confdash_roster::{build_lab_index, parse_roster, roster_stats};
use confdash_stats::{product_rollup, summarize, track_summaries};
use confdash_xref::lab_card;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "confdash")]
#[command(about = "Conference-operations dashboard pipeline", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summary statistics for a session export
    Summary {
        sessions: PathBuf,
        #[command(flatten)]
        overrides: OverrideArgs,
    },

    /// Track × type cross-tab with completion percentages
    Tracks {
        sessions: PathBuf,
        #[command(flatten)]
        overrides: OverrideArgs,
    },

    /// Lab coverage per product, plus uncovered catalog products
    Products {
        sessions: PathBuf,
        #[command(flatten)]
        overrides: OverrideArgs,
    },

    /// Parse the scheduling grid, optionally filtered to one day
    Schedule {
        grid: PathBuf,

        /// Monday, Tuesday, Wednesday or Thursday
        #[arg(long)]
        day: Option<String>,
    },

    /// Session codes scheduled in several venues at the same slot
    Conflicts { grid: PathBuf },

    /// TA roster records and assignment statistics
    Roster { roster: PathBuf },

    /// Staffing cards for every Hands-on Lab in the export
    Labs { sessions: PathBuf, roster: PathBuf },

    /// Sessions that look like work-in-progress placeholders
    Wip { sessions: PathBuf },

    /// Manage manual session overrides
    Override {
        /// Path of the persisted override file
        #[arg(long, default_value = "confdash-overrides.json")]
        store: PathBuf,

        #[command(subcommand)]
        action: OverrideAction,
    },
}

#[derive(clap::Args)]
struct OverrideArgs {
    /// Merge manual overrides from this store before aggregating
    #[arg(long)]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum OverrideAction {
    /// Create or update the override for a session code
    Save {
        code: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        speaker1: Option<String>,
        #[arg(long)]
        speaker1_company: Option<String>,
        #[arg(long)]
        speaker2: Option<String>,
        #[arg(long)]
        speaker2_company: Option<String>,
    },

    /// Print the stored override for a code
    Get { code: String },

    /// Remove the override for a code
    Delete { code: String },

    /// Show the override again without re-entering it
    Enable { code: String },

    /// Hide the override, keeping the edit
    Disable { code: String },

    /// Print every stored override
    List,

    /// Number of stored overrides
    Count,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Summary { sessions, overrides } => {
            let sessions = load_sessions(&sessions, overrides.store.as_deref())?;
            print_json(&summarize(&sessions))
        }
        Commands::Tracks { sessions, overrides } => {
            let sessions = load_sessions(&sessions, overrides.store.as_deref())?;
            print_json(&track_summaries(&sessions))
        }
        Commands::Products { sessions, overrides } => {
            let sessions = load_sessions(&sessions, overrides.store.as_deref())?;
            print_json(&product_rollup(&sessions))
        }
        Commands::Schedule { grid, day } => {
            let schedule = parse_grid_csv(&read(&grid)?)?;
            match day {
                Some(day) => print_json(&schedule.for_day(parse_day(&day)?)),
                None => print_json(&schedule),
            }
        }
        Commands::Conflicts { grid } => {
            let schedule = parse_grid_csv(&read(&grid)?)?;
            print_json(&schedule.find_conflicts())
        }
        Commands::Roster { roster } => {
            let tas = parse_roster(&read(&roster)?)?;
            let index = build_lab_index(&tas);
            #[derive(Serialize)]
            struct RosterReport {
                stats: confdash_roster::RosterStats,
                tas: Vec<confdash_roster::TaRecord>,
            }
            print_json(&RosterReport {
                stats: roster_stats(&tas, &index),
                tas,
            })
        }
        Commands::Labs { sessions, roster } => {
            let sessions = load_sessions(&sessions, None)?;
            let tas = parse_roster(&read(&roster)?)?;
            let index = build_lab_index(&tas);

            let cards: Vec<_> = sessions
                .iter()
                .filter(|s| s.derived_type == confdash_model::SessionType::HandsOnLab)
                .map(|s| lab_card(s.code(), &sessions, &index))
                .collect();
            print_json(&cards)
        }
        Commands::Wip { sessions } => {
            let sessions = load_sessions(&sessions, None)?;
            let wip: Vec<&SessionRecord> = sessions.iter().filter(|s| is_wip(s)).collect();
            print_json(&wip)
        }
        Commands::Override { store, action } => run_override(&store, action),
    }
}

fn run_override(store_path: &Path, action: OverrideAction) -> Result<()> {
    let mut store = OverrideStore::open(FileBackend::new(store_path));

    match action {
        OverrideAction::Save {
            code,
            title,
            description,
            speaker1,
            speaker1_company,
            speaker2,
            speaker2_company,
        } => {
            let fields = OverrideFields {
                title,
                description,
                speaker1,
                speaker1_company,
                speaker2,
                speaker2_company,
            };
            if !store.save(&code, fields) {
                bail!("Failed to persist override for {code}");
            }
            log::info!("Saved override for {code}");
            Ok(())
        }
        OverrideAction::Get { code } => match store.get(&code) {
            Some(entry) => print_json(entry),
            None => bail!("No override stored for {code}"),
        },
        OverrideAction::Delete { code } => {
            if !store.delete(&code) {
                bail!("No override stored for {code}");
            }
            log::info!("Deleted override for {code}");
            Ok(())
        }
        OverrideAction::Enable { code } => {
            if !store.set_enabled(&code, true) {
                bail!("No override stored for {code}");
            }
            Ok(())
        }
        OverrideAction::Disable { code } => {
            if !store.set_enabled(&code, false) {
                bail!("No override stored for {code}");
            }
            Ok(())
        }
        OverrideAction::List => {
            let entries: std::collections::BTreeMap<&str, &confdash_overrides::SessionOverride> =
                store.iter().collect();
            print_json(&entries)
        }
        OverrideAction::Count => print_json(&store.count()),
    }
}

/// Parse the session export, merging overrides when a store is given.
/// The merge happens before aggregation so every downstream number
/// reflects the manually edited fields.
fn load_sessions(path: &Path, store_path: Option<&Path>) -> Result<Vec<SessionRecord>> {
    let sessions = parse_sessions(&read(path)?)?;
    match store_path {
        Some(store_path) => {
            let store = OverrideStore::open(FileBackend::new(store_path));
            Ok(store.apply_all(&sessions, true))
        }
        None => Ok(sessions),
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn parse_day(day: &str) -> Result<Day> {
    match day.to_lowercase().as_str() {
        "monday" | "mon" => Ok(Day::Monday),
        "tuesday" | "tue" => Ok(Day::Tuesday),
        "wednesday" | "wed" => Ok(Day::Wednesday),
        "thursday" | "thu" => Ok(Day::Thursday),
        other => bail!("Unknown day: {other}"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
