//! Wire types for the Sleeper v1 API.
//!
//! Only the fields the aggregator reads are modelled; everything else in the
//! payloads is ignored so additive schema changes never break parsing.

use crate::cli::types::{LeagueId, RosterId, Season, TransactionId, UserId};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// Sleeper sends `null` for empty maps and lists on most transaction fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `GET /user/{username}`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub user_id: UserId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// `GET /user/{user_id}/leagues/nfl/{season}`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct League {
    pub league_id: LeagueId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
}

impl League {
    /// League name, or the ID when the league is unnamed.
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.league_id.to_string())
    }
}

/// `GET /league/{league_id}/rosters`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: RosterId,
    #[serde(default)]
    pub owner_id: Option<UserId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub co_owners: Vec<UserId>,
}

impl Roster {
    /// Whether `user_id` owns or co-owns this roster.
    pub fn is_controlled_by(&self, user_id: &UserId) -> bool {
        self.owner_id.as_ref() == Some(user_id) || self.co_owners.contains(user_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MemberMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// `GET /league/{league_id}/users`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LeagueMember {
    pub user_id: UserId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: MemberMetadata,
}

impl LeagueMember {
    /// Team name when set, otherwise the member's display name.
    pub fn label(&self) -> Option<String> {
        self.metadata
            .team_name
            .as_deref()
            .or(self.display_name.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
    }
}

/// Transaction type as reported by Sleeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Trade,
    FreeAgent,
    Waiver,
    Commissioner,
    #[serde(other)]
    Other,
}

/// A draft pick moved in a trade.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DraftPick {
    pub season: Season,
    pub round: u8,
    /// Roster the pick originally belonged to.
    pub roster_id: RosterId,
    #[serde(default)]
    pub previous_owner_id: Option<RosterId>,
    #[serde(default)]
    pub owner_id: Option<RosterId>,
}

/// FAAB dollars moved in a trade.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WaiverBudgetMove {
    pub sender: RosterId,
    pub receiver: RosterId,
    pub amount: u32,
}

/// `GET /league/{league_id}/transactions/{round}`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub status: Option<String>,
    /// Epoch milliseconds.
    #[serde(default)]
    pub status_updated: Option<i64>,
    /// Epoch milliseconds.
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub roster_ids: Vec<RosterId>,
    /// Player ID -> receiving roster.
    #[serde(default, deserialize_with = "null_as_default")]
    pub adds: BTreeMap<String, RosterId>,
    /// Player ID -> sending roster.
    #[serde(default, deserialize_with = "null_as_default")]
    pub drops: BTreeMap<String, RosterId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub draft_picks: Vec<DraftPick>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub waiver_budget: Vec<WaiverBudgetMove>,
}

impl Transaction {
    pub fn is_trade(&self) -> bool {
        self.kind == TransactionKind::Trade
    }

    pub fn is_failed(&self) -> bool {
        self.status.as_deref() == Some("failed")
    }

    /// When the transaction settled, falling back to its creation time.
    /// `None` when Sleeper reported neither.
    pub fn timestamp_ms(&self) -> Option<i64> {
        self.status_updated.or(self.created)
    }

    /// Every roster that sends or receives something in this transaction.
    pub fn involves(&self, roster_id: RosterId) -> bool {
        self.roster_ids.contains(&roster_id)
            || self.adds.values().any(|r| *r == roster_id)
            || self.drops.values().any(|r| *r == roster_id)
            || self.draft_picks.iter().any(|p| {
                p.owner_id == Some(roster_id) || p.previous_owner_id == Some(roster_id)
            })
            || self
                .waiver_budget
                .iter()
                .any(|w| w.sender == roster_id || w.receiver == roster_id)
    }
}

/// `GET /state/nfl`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NflState {
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub league_season: Option<Season>,
    #[serde(default)]
    pub week: Option<u16>,
}

impl NflState {
    /// The season leagues are currently being created for.
    pub fn effective_season(&self) -> Option<Season> {
        self.league_season.or(self.season)
    }
}

/// One entry of `GET /players/nfl` (keyed by player ID in the payload).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerRecord {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

impl PlayerRecord {
    /// `"Full Name (POS TEAM)"`, or `None` when the record carries no name.
    pub fn display_name(&self) -> Option<String> {
        let name = match self.full_name.as_deref().map(str::trim) {
            Some(full) if !full.is_empty() => full.to_string(),
            _ => {
                let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
                    .into_iter()
                    .flatten()
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .collect();
                if parts.is_empty() {
                    return None;
                }
                parts.join(" ")
            }
        };

        let tags: Vec<&str> = [self.position.as_deref(), self.team.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        if tags.is_empty() {
            Some(name)
        } else {
            Some(format!("{} ({})", name, tags.join(" ")))
        }
    }
}

/// Raw player payload: player ID -> record.
pub type PlayerPayload = BTreeMap<String, PlayerRecord>;
