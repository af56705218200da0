use thiserror::Error;

use crate::models::PlayerId;

/// Roster selection failures. Reported to the operator as-is, never auto-corrected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("exactly 2 goalkeepers must be playing, found {found}")]
    WrongGoalkeeperCount { found: usize },

    #[error("{required} field players are required but only {found} are playing")]
    InsufficientFieldPlayers { required: usize, found: usize },
}

impl SelectionError {
    /// Missing field players, zero for every other failure.
    pub fn shortfall(&self) -> usize {
        match self {
            SelectionError::InsufficientFieldPlayers { required, found } => {
                required.saturating_sub(*found)
            }
            SelectionError::WrongGoalkeeperCount { .. } => 0,
        }
    }

    /// Stable machine-readable code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            SelectionError::WrongGoalkeeperCount { .. } => "WRONG_GOALKEEPER_COUNT",
            SelectionError::InsufficientFieldPlayers { .. } => "INSUFFICIENT_FIELD_PLAYERS",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("balancing needs at least 2 goalkeepers among the starters, found {found}")]
    MissingGoalkeepers { found: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeasonError {
    #[error("player {0} already exists")]
    DuplicatePlayer(PlayerId),

    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("round {0} not found")]
    RoundNotFound(String),

    #[error("round {0} already exists")]
    DuplicateRound(String),

    #[error("invalid player {id}: {reason}")]
    InvalidPlayer { id: PlayerId, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchDayError {
    #[error("player {0} is not part of this match")]
    PlayerNotInMatch(PlayerId),

    #[error("player {0} is already part of this match")]
    AlreadyInMatch(PlayerId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("could not parse configuration: {0}")]
    Parse(String),
}

/// Umbrella error for the JSON entry points.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Balance(#[from] BalanceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unsupported schema version: {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl EngineError {
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Selection(err) => err.code(),
            EngineError::Balance(_) => "MISSING_GOALKEEPERS",
            EngineError::Config(_) => "INVALID_CONFIG",
            EngineError::SchemaVersion { .. } => "UNSUPPORTED_SCHEMA_VERSION",
            EngineError::Snapshot(_) => "INVALID_SNAPSHOT",
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
