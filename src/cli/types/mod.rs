//! Type-safe wrappers for Sleeper identifiers, seasons, and rounds.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, PlayerId, RosterId, TransactionId, UserId};
pub use time::{RoundSet, Season, MAX_ROUND};
