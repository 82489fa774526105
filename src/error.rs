//! Error types for the Sleeper trades viewer

use thiserror::Error;

use crate::cli::types::LeagueId;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, SleeperError>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("User '{username}' not found")]
    UserNotFound { username: String },

    #[error("Username must be non-empty with no whitespace or URL delimiters")]
    InvalidUsername,

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Invalid round spec: {spec}")]
    InvalidRounds { spec: String },

    #[error("Fetching league {league_id} failed: {source}")]
    PartialFetch {
        league_id: LeagueId,
        #[source]
        source: Box<SleeperError>,
    },

    #[error("Player cache error: {message}")]
    Cache { message: String },

    #[error("Server error: {message}")]
    Server { message: String },
}

impl SleeperError {
    /// Wrap a failure that only affects one league's rows.
    pub fn partial(league_id: LeagueId, source: SleeperError) -> Self {
        SleeperError::PartialFetch {
            league_id,
            source: Box::new(source),
        }
    }

    /// Whether this error should be shown to the user as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, SleeperError::UserNotFound { .. })
    }
}
