//! Display rows produced by the aggregator.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::cli::types::{LeagueId, PlayerId, Season, TransactionId};

/// Something that changed hands in a trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Asset {
    /// `name` is `None` when the ID is missing from the player directory;
    /// the asset then displays as its raw ID.
    Player {
        id: PlayerId,
        name: Option<String>,
    },
    DraftPick {
        season: Season,
        round: u8,
        original_owner: String,
    },
    Faab {
        amount: u32,
    },
}

impl Asset {
    /// Human-readable label used by the table renderers.
    pub fn label(&self) -> String {
        self.to_string()
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Asset::Player { name: None, .. })
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Player {
                name: Some(name), ..
            } => write!(f, "{}", name),
            Asset::Player { id, name: None } => write!(f, "{}", id),
            Asset::DraftPick {
                season,
                round,
                original_owner,
            } => write!(f, "{} Round {} pick ({})", season, round, original_owner),
            Asset::Faab { amount } => write!(f, "${} FAAB", amount),
        }
    }
}

/// One trade, seen from the queried user's side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeRow {
    /// UTC calendar day of `timestamp_ms`; `None` when Sleeper sent no time.
    pub date: Option<NaiveDate>,
    pub timestamp_ms: Option<i64>,
    pub league_id: LeagueId,
    pub league_name: String,
    pub transaction_id: TransactionId,
    /// The other side(s) of the trade.
    pub counterparties: Vec<String>,
    pub lost: Vec<Asset>,
    pub gained: Vec<Asset>,
}

impl TradeRow {
    /// `YYYY-MM-DD`, or an empty string for an undated trade.
    pub fn date_label(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// UTC calendar day for an epoch-milliseconds timestamp.
pub fn date_from_millis(timestamp_ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(timestamp_ms).map(|dt| dt.date_naive())
}

/// Newest first, undated trades last; ties by league ID, then transaction ID.
pub fn newest_first(a: &TradeRow, b: &TradeRow) -> Ordering {
    b.timestamp_ms
        .cmp(&a.timestamp_ms)
        .then_with(|| a.league_id.cmp(&b.league_id))
        .then_with(|| a.transaction_id.cmp(&b.transaction_id))
}
