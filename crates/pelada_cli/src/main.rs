//! pelada CLI
//!
//! Ranking, match-day plans, dues, birthdays and top scorers from a season snapshot file.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use pelada_core::{
    plan_match_day, season_ranking, season_top_scorers, snapshot_schema, SeasonSnapshot,
    DEFAULT_TOP_SCORERS,
};
use pelada_cli::{birthday_report, dues_report, load_snapshot, logger};

#[derive(Parser)]
#[command(name = "pelada")]
#[command(version, about = "Match-day planning for a weekly football group", long_about = None)]
struct Cli {
    /// Log at DEBUG level
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SnapshotArgs {
    /// Season snapshot JSON file
    #[arg(long)]
    snapshot: PathBuf,

    /// Engine config (YAML, or JSON by extension) replacing the snapshot's own
    #[arg(long)]
    config: Option<PathBuf>,
}

impl SnapshotArgs {
    fn load(&self) -> Result<SeasonSnapshot> {
        load_snapshot(&self.snapshot, self.config.as_deref())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the season ranking table
    Ranking {
        #[command(flatten)]
        input: SnapshotArgs,
    },

    /// Select starters and reserves, balance the teams and plan substitutions
    Plan {
        #[command(flatten)]
        input: SnapshotArgs,
    },

    /// List players with unpaid months
    Dues {
        #[command(flatten)]
        input: SnapshotArgs,

        /// Reference date (YYYY-MM-DD)
        #[arg(long)]
        today: NaiveDate,
    },

    /// List birthdays in the week containing the given date
    Birthdays {
        #[command(flatten)]
        input: SnapshotArgs,

        /// Reference date (YYYY-MM-DD)
        #[arg(long)]
        today: NaiveDate,
    },

    /// Print the season's top scorers
    Scorers {
        #[command(flatten)]
        input: SnapshotArgs,

        /// Number of rows
        #[arg(long, default_value_t = DEFAULT_TOP_SCORERS)]
        top: usize,
    },

    /// Print the JSON Schema of the snapshot format
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose)?;

    match cli.command {
        Commands::Ranking { input } => {
            let snapshot = input.load()?;
            print_json(&season_ranking(&snapshot))?;
        }

        Commands::Plan { input } => {
            let snapshot = input.load()?;
            let plan = plan_match_day(&snapshot)?;
            print_json(&plan)?;
        }

        Commands::Dues { input, today } => {
            let snapshot = input.load()?;
            let rows = dues_report(&snapshot, today)?;
            info!(%today, overdue = rows.len(), "dues report");
            print_json(&rows)?;
        }

        Commands::Birthdays { input, today } => {
            let snapshot = input.load()?;
            print_json(&birthday_report(&snapshot, today))?;
        }

        Commands::Scorers { input, top } => {
            let snapshot = input.load()?;
            print_json(&season_top_scorers(&snapshot, top))?;
        }

        Commands::Schema => print_json(&snapshot_schema())?,
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
