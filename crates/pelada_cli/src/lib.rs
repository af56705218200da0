//! pelada CLI library
//!
//! Snapshot and config loading plus the report rows the binary prints.

pub mod logger;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use pelada_core::calendar::birthdays_in_week;
use pelada_core::dues::overdue_months;
use pelada_core::{EngineConfig, PlayerId, SeasonSnapshot};

/// Reads a snapshot and, when given, replaces its config with the one at `config`.
pub fn load_snapshot(path: &Path, config: Option<&Path>) -> Result<SeasonSnapshot> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    let mut snapshot: SeasonSnapshot = serde_json::from_str(&source)
        .with_context(|| format!("Invalid snapshot JSON: {}", path.display()))?;

    if let Some(config_path) = config {
        snapshot.config = load_config(config_path)?;
        debug!(config = %config_path.display(), "snapshot config overridden");
    }
    snapshot.check()?;

    debug!(
        players = snapshot.players.len(),
        rounds = snapshot.rounds.len(),
        year = snapshot.year,
        "snapshot loaded"
    );
    Ok(snapshot)
}

/// YAML unless the file ends in `.json`.
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        EngineConfig::from_json_str(&source)
    } else {
        EngineConfig::from_yaml_str(&source)
    };
    config.with_context(|| format!("Invalid config: {}", path.display()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuesRow {
    pub player_id: PlayerId,
    pub name: String,
    pub unpaid_months: Vec<u32>,
}

/// Fails when the snapshot carries no payments ledger.
pub fn dues_report(snapshot: &SeasonSnapshot, today: NaiveDate) -> Result<Vec<DuesRow>> {
    let Some(payments) = snapshot.payments.as_ref() else {
        bail!("snapshot has no payments ledger, cannot report dues");
    };

    let months = overdue_months(
        &snapshot.players,
        payments,
        snapshot.year,
        today,
        &snapshot.config.dues,
    );
    let rows = months
        .into_iter()
        .filter_map(|(id, unpaid_months)| {
            let player = snapshot.players.iter().find(|p| p.id == id)?;
            Some(DuesRow {
                name: player.name.clone(),
                player_id: id,
                unpaid_months,
            })
        })
        .collect();
    Ok(rows)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayRow {
    pub player_id: PlayerId,
    pub name: String,
    pub date: NaiveDate,
}

pub fn birthday_report(snapshot: &SeasonSnapshot, today: NaiveDate) -> Vec<BirthdayRow> {
    birthdays_in_week(&snapshot.players, today, snapshot.year)
        .into_iter()
        .filter_map(|p| {
            let date = p.birthday?.in_year(snapshot.year)?;
            Some(BirthdayRow {
                player_id: p.id.clone(),
                name: p.name.clone(),
                date,
            })
        })
        .collect()
}
