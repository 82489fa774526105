//! In-memory `SleeperApi` for unit tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::{
    cli::types::{LeagueId, RosterId, Season, UserId},
    sleeper::{
        types::{League, LeagueMember, NflState, PlayerPayload, Roster, Transaction, User},
        SleeperApi,
    },
    Result, SleeperError,
};

fn connection_reset(what: &str) -> SleeperError {
    SleeperError::Io(io::Error::new(io::ErrorKind::ConnectionReset, what.to_string()))
}

#[derive(Default)]
pub struct FakeSleeper {
    pub users: HashMap<String, User>,
    pub fail_user_lookup: bool,
    pub leagues: Vec<League>,
    pub rosters: HashMap<LeagueId, Vec<Roster>>,
    pub members: HashMap<LeagueId, Vec<LeagueMember>>,
    pub transactions: HashMap<(LeagueId, u8), Vec<Transaction>>,
    pub failing_leagues: HashSet<LeagueId>,
    pub players: PlayerPayload,
    pub fail_players: bool,
    pub players_delay: Option<Duration>,
    pub state: Option<NflState>,
    pub player_calls: AtomicUsize,
    pub user_calls: AtomicUsize,
    pub seasons_requested: Mutex<Vec<Season>>,
}

impl FakeSleeper {
    pub fn with_user(mut self, username: &str, user_id: &str) -> Self {
        self.users.insert(
            username.to_string(),
            User {
                user_id: UserId::new(user_id),
                username: Some(username.to_string()),
                display_name: Some(username.to_string()),
            },
        );
        self
    }

    /// Add a league with the given `(roster_id, owner_id)` pairs.
    pub fn with_league(mut self, league_id: &str, name: &str, owners: &[(u32, &str)]) -> Self {
        let id = LeagueId::new(league_id);
        self.leagues.push(League {
            league_id: id.clone(),
            name: Some(name.to_string()),
            season: None,
        });
        self.rosters.insert(
            id.clone(),
            owners
                .iter()
                .map(|(roster, owner)| Roster {
                    roster_id: RosterId::new(*roster),
                    owner_id: Some(UserId::new(*owner)),
                    co_owners: Vec::new(),
                })
                .collect(),
        );
        self.members.insert(
            id,
            owners
                .iter()
                .map(|(_, owner)| LeagueMember {
                    user_id: UserId::new(*owner),
                    display_name: Some(format!("user{owner}")),
                    metadata: Default::default(),
                })
                .collect(),
        );
        self
    }

    pub fn with_transactions(mut self, league_id: &str, round: u8, txs: Vec<Transaction>) -> Self {
        self.transactions
            .insert((LeagueId::new(league_id), round), txs);
        self
    }

    pub fn player_calls(&self) -> usize {
        self.player_calls.load(Ordering::SeqCst)
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SleeperApi for FakeSleeper {
    async fn user(&self, username: &str) -> Result<Option<User>> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_user_lookup {
            return Err(connection_reset("user lookup"));
        }
        Ok(self.users.get(username).cloned())
    }

    async fn leagues(&self, _user_id: &UserId, season: Season) -> Result<Vec<League>> {
        self.seasons_requested
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(season);
        Ok(self.leagues.clone())
    }

    async fn transactions(&self, league_id: &LeagueId, round: u8) -> Result<Vec<Transaction>> {
        if self.failing_leagues.contains(league_id) {
            return Err(connection_reset("transactions"));
        }
        Ok(self
            .transactions
            .get(&(league_id.clone(), round))
            .cloned()
            .unwrap_or_default())
    }

    async fn rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        Ok(self.rosters.get(league_id).cloned().unwrap_or_default())
    }

    async fn league_members(&self, league_id: &LeagueId) -> Result<Vec<LeagueMember>> {
        Ok(self.members.get(league_id).cloned().unwrap_or_default())
    }

    async fn players(&self) -> Result<PlayerPayload> {
        self.player_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.players_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_players {
            return Err(connection_reset("players"));
        }
        Ok(self.players.clone())
    }

    async fn nfl_state(&self) -> Result<NflState> {
        self.state
            .clone()
            .ok_or_else(|| connection_reset("state"))
    }
}
