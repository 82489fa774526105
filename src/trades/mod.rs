//! Trade aggregation across every league a user belongs to.
//!
//! Flow: username -> user ID -> leagues for the season -> per-league rosters,
//! members, and transactions (fetched concurrently) -> trade rows resolved
//! through the player directory -> one list sorted newest first.

pub mod parse;
pub mod row;


use futures::future::{join_all, try_join_all};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    cli::types::{RoundSet, Season, UserId},
    core::{PlayerDirectory, PlayerDirectoryCache, UserCache},
    sleeper::{
        types::{League, LeagueMember, Roster, Transaction, User},
        SleeperApi,
    },
    Result, SleeperError,
};

pub use parse::LeagueContext;
pub use row::{Asset, TradeRow};

/// Optional knobs for one `get_trades` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeQuery {
    /// Defaults to the season reported by `/state/nfl`.
    pub season: Option<Season>,
    pub rounds: RoundSet,
}

/// Everything fetched for one league before interpretation.
#[derive(Debug, Clone)]
struct LeagueData {
    rosters: Vec<Roster>,
    members: Vec<LeagueMember>,
    /// Trades only, deduplicated by transaction ID.
    trades: Vec<Transaction>,
}

/// Walks the Sleeper API for one user and flattens their trades.
///
/// Cheap to share: the API handle and caches are reference counted, so one
/// `Aggregator` serves every request of a process.
#[derive(Clone)]
pub struct Aggregator {
    api: Arc<dyn SleeperApi>,
    players: Arc<PlayerDirectoryCache>,
    users: Arc<UserCache>,
}

impl Aggregator {
    pub fn new(api: Arc<dyn SleeperApi>, players: Arc<PlayerDirectoryCache>) -> Self {
        Self {
            api,
            players,
            users: Arc::new(UserCache::default()),
        }
    }

    pub fn with_user_cache(mut self, users: Arc<UserCache>) -> Self {
        self.users = users;
        self
    }

    pub fn players(&self) -> &Arc<PlayerDirectoryCache> {
        &self.players
    }

    /// Every completed trade the user took part in, newest first.
    ///
    /// Fails only when the username is blank or unknown, or the user/league
    /// listing itself cannot be fetched. A league whose data cannot be fetched
    /// contributes no rows; an unreachable player directory leaves players
    /// labelled by ID.
    pub async fn get_trades(&self, username: &str, query: &TradeQuery) -> Result<Vec<TradeRow>> {
        let user = self.resolve_user(username).await?;
        let season = self.resolve_season(query.season).await;
        let leagues = self.api.leagues(&user.user_id, season).await?;

        info!(
            username = username.trim(),
            user_id = %user.user_id,
            %season,
            leagues = leagues.len(),
            "Aggregating trades"
        );
        if leagues.is_empty() {
            return Ok(Vec::new());
        }

        let fetches = leagues
            .iter()
            .map(|league| self.fetch_league(league, &query.rounds));
        let (directory, fetched) = tokio::join!(self.directory(), join_all(fetches));

        let mut rows = Vec::new();
        for (league, result) in leagues.iter().zip(fetched) {
            match result {
                Ok(data) => rows.extend(league_rows(league, &user.user_id, &data, &directory)),
                Err(e) => {
                    let e = SleeperError::partial(league.league_id.clone(), e);
                    warn!(error = %e, "Skipping league");
                }
            }
        }

        rows.sort_by(row::newest_first);
        info!(username = username.trim(), trades = rows.len(), "Trades ready");
        Ok(rows)
    }

    /// Requested season, else the API's current league season, else this year.
    pub async fn resolve_season(&self, requested: Option<Season>) -> Season {
        if let Some(season) = requested {
            return season;
        }
        match self.api.nfl_state().await {
            Ok(state) => state.effective_season().unwrap_or_else(Season::current),
            Err(e) => {
                warn!(error = %e, "Could not read NFL state; using calendar year");
                Season::current()
            }
        }
    }

    async fn resolve_user(&self, username: &str) -> Result<User> {
        let username = validate_username(username)?;
        if let Some(user) = self.users.get(username) {
            return Ok(user);
        }

        let user = self
            .api
            .user(username)
            .await?
            .ok_or_else(|| SleeperError::UserNotFound {
                username: username.to_string(),
            })?;
        self.users.put(username, user.clone());
        Ok(user)
    }

    async fn directory(&self) -> Arc<PlayerDirectory> {
        match self.players.get().await {
            Ok(directory) => directory,
            Err(e) => {
                warn!(error = %e, "Player directory unavailable; players will show as IDs");
                Arc::new(PlayerDirectory::empty())
            }
        }
    }

    async fn fetch_league(&self, league: &League, rounds: &RoundSet) -> Result<LeagueData> {
        let id = &league.league_id;
        let rounds_fut = try_join_all(rounds.iter().map(|r| self.api.transactions(id, r)));
        let (rosters, members, per_round) = tokio::join!(
            self.api.rosters(id),
            self.api.league_members(id),
            rounds_fut
        );

        let members = members.unwrap_or_else(|e| {
            warn!(league_id = %id, error = %e, "League members unavailable; using roster numbers");
            Vec::new()
        });

        // the same trade can show up in more than one round
        let mut trades = BTreeMap::new();
        for tx in per_round?.into_iter().flatten().filter(Transaction::is_trade) {
            trades.entry(tx.transaction_id.clone()).or_insert(tx);
        }

        Ok(LeagueData {
            rosters: rosters?,
            members,
            trades: trades.into_values().collect(),
        })
    }
}

fn league_rows(
    league: &League,
    user_id: &UserId,
    data: &LeagueData,
    directory: &PlayerDirectory,
) -> Vec<TradeRow> {
    let ctx = LeagueContext::new(league, user_id, &data.rosters, &data.members);
    if !ctx.has_user_roster() {
        warn!(league_id = %league.league_id, "User owns no roster in league");
        return Vec::new();
    }
    data.trades
        .iter()
        .filter_map(|tx| ctx.trade_row(tx, directory))
        .collect()
}

/// Trimmed username, rejecting blanks and anything that would alter the URL path.
pub fn validate_username(username: &str) -> Result<&str> {
    let username = username.trim();
    let forbidden = |c: char| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%' | '\\');
    if username.is_empty() || username.contains(forbidden) {
        return Err(SleeperError::InvalidUsername);
    }
    Ok(username)
}
