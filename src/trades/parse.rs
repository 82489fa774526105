//! Turning raw league transactions into `TradeRow`s from one user's side.
//!
//! Sleeper records who received each player in `adds` and who gave it up in
//! `drops`; draft picks carry `owner_id` (new) and `previous_owner_id` (old),
//! and FAAB moves carry `receiver` and `sender`. Anything received by one of
//! the user's rosters is *gained*, anything sent is *lost*.

use std::collections::{BTreeSet, HashMap};

use crate::{
    cli::types::{PlayerId, RosterId, UserId},
    core::PlayerDirectory,
    sleeper::types::{League, LeagueMember, Roster, Transaction},
    trades::row::{date_from_millis, Asset, TradeRow},
};

/// Per-league lookup tables needed to interpret its transactions.
#[derive(Debug, Clone)]
pub struct LeagueContext<'a> {
    league: &'a League,
    user_rosters: BTreeSet<RosterId>,
    roster_labels: HashMap<RosterId, String>,
}

impl<'a> LeagueContext<'a> {
    pub fn new(
        league: &'a League,
        user_id: &UserId,
        rosters: &[Roster],
        members: &[LeagueMember],
    ) -> Self {
        let member_labels: HashMap<&UserId, String> = members
            .iter()
            .filter_map(|m| m.label().map(|label| (&m.user_id, label)))
            .collect();

        let user_rosters = rosters
            .iter()
            .filter(|r| r.is_controlled_by(user_id))
            .map(|r| r.roster_id)
            .collect();

        let roster_labels = rosters
            .iter()
            .filter_map(|r| {
                let owner = r.owner_id.as_ref()?;
                let label = member_labels.get(owner)?;
                Some((r.roster_id, label.clone()))
            })
            .collect();

        Self {
            league,
            user_rosters,
            roster_labels,
        }
    }

    /// Whether the user controls any roster in this league.
    pub fn has_user_roster(&self) -> bool {
        !self.user_rosters.is_empty()
    }

    fn is_users(&self, roster_id: &RosterId) -> bool {
        self.user_rosters.contains(roster_id)
    }

    /// Owner's team or display name, or `Roster N` for orphaned rosters.
    pub fn roster_label(&self, roster_id: RosterId) -> String {
        self.roster_labels
            .get(&roster_id)
            .cloned()
            .unwrap_or_else(|| format!("Roster {}", roster_id))
    }

    /// The user's view of `tx`, or `None` if it is not a completed trade the
    /// user took part in.
    pub fn trade_row(&self, tx: &Transaction, directory: &PlayerDirectory) -> Option<TradeRow> {
        if !tx.is_trade() || tx.is_failed() {
            return None;
        }
        if !self.user_rosters.iter().any(|r| tx.involves(*r)) {
            return None;
        }

        let mut gained = Vec::new();
        let mut lost = Vec::new();

        for (player, roster) in &tx.adds {
            if self.is_users(roster) {
                gained.push(player_asset(player, directory));
            }
        }
        for (player, roster) in &tx.drops {
            if self.is_users(roster) {
                lost.push(player_asset(player, directory));
            }
        }

        let mut picks: Vec<_> = tx.draft_picks.iter().collect();
        picks.sort_by_key(|p| (p.season.as_u16(), p.round, p.roster_id));
        for pick in picks {
            let asset = || Asset::DraftPick {
                season: pick.season,
                round: pick.round,
                original_owner: self.roster_label(pick.roster_id),
            };
            if pick.owner_id.as_ref().is_some_and(|r| self.is_users(r)) {
                gained.push(asset());
            }
            if pick
                .previous_owner_id
                .as_ref()
                .is_some_and(|r| self.is_users(r))
            {
                lost.push(asset());
            }
        }

        for budget in &tx.waiver_budget {
            if self.is_users(&budget.receiver) {
                gained.push(Asset::Faab {
                    amount: budget.amount,
                });
            }
            if self.is_users(&budget.sender) {
                lost.push(Asset::Faab {
                    amount: budget.amount,
                });
            }
        }

        if gained.is_empty() && lost.is_empty() {
            return None;
        }

        let timestamp_ms = tx.timestamp_ms();
        Some(TradeRow {
            date: timestamp_ms.and_then(date_from_millis),
            timestamp_ms,
            league_id: self.league.league_id.clone(),
            league_name: self.league.display_name(),
            transaction_id: tx.transaction_id.clone(),
            counterparties: self.counterparties(tx),
            lost,
            gained,
        })
    }

    fn counterparties(&self, tx: &Transaction) -> Vec<String> {
        let others: BTreeSet<RosterId> = tx
            .roster_ids
            .iter()
            .chain(tx.adds.values())
            .chain(tx.drops.values())
            .copied()
            .filter(|roster| !self.is_users(roster))
            .collect();
        others
            .into_iter()
            .map(|roster| self.roster_label(roster))
            .collect()
    }
}

fn player_asset(player: &str, directory: &PlayerDirectory) -> Asset {
    let id = PlayerId::new(player);
    let name = directory.name(&id).map(str::to_string);
    Asset::Player { id, name }
}
