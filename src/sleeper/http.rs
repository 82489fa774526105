use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::{Semaphore, SemaphorePermit};
use tracing::debug;

use crate::{
    cli::types::{LeagueId, Season, UserId},
    config::Settings,
    sleeper::types::{League, LeagueMember, NflState, PlayerPayload, Roster, Transaction, User},
    Result, SleeperError,
};


/// Read-only view of the Sleeper API used by the aggregator.
///
/// `SleeperClient` is the production implementation; tests substitute fakes
/// to control league data and count downloads.
#[async_trait]
pub trait SleeperApi: Send + Sync {
    /// Look up a user by username. `Ok(None)` means the user does not exist.
    async fn user(&self, username: &str) -> Result<Option<User>>;

    async fn leagues(&self, user_id: &UserId, season: Season) -> Result<Vec<League>>;

    /// Transactions for one round (week) of a league.
    async fn transactions(&self, league_id: &LeagueId, round: u8) -> Result<Vec<Transaction>>;

    async fn rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>>;

    async fn league_members(&self, league_id: &LeagueId) -> Result<Vec<LeagueMember>>;

    /// Full NFL player payload (several megabytes).
    async fn players(&self) -> Result<PlayerPayload>;

    async fn nfl_state(&self) -> Result<NflState>;
}

/// HTTP client for the public Sleeper API.
///
/// Every request holds a permit from a shared semaphore, so the number of
/// in-flight calls never exceeds `max_concurrent` no matter how many leagues
/// are fetched at once.
#[derive(Clone)]
pub struct SleeperClient {
    http: Client,
    base_url: String,
    permits: Arc<Semaphore>,
}

impl SleeperClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("sleeper-trades/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            permits: Arc::new(Semaphore::new(settings.max_concurrent.max(1))),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Hold the returned permit until the response body has been read.
    async fn permit(&self) -> Result<SemaphorePermit<'_>> {
        self.permits
            .acquire()
            .await
            .map_err(|e| SleeperError::Server {
                message: e.to_string(),
            })
    }

    async fn send(&self, path: &str) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        Ok(self.http.get(&url).send().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let _permit = self.permit().await?;
        let res = self.send(path).await?.error_for_status()?;
        Ok(res.json::<T>().await?)
    }

    /// Like `get_json`, but an empty list for a `null` body.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        Ok(self
            .get_json::<Option<Vec<T>>>(path)
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl SleeperApi for SleeperClient {
    async fn user(&self, username: &str) -> Result<Option<User>> {
        let _permit = self.permit().await?;
        let res = self.send(&format!("/user/{}", username)).await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        // Sleeper answers unknown usernames with `200 null`.
        Ok(res.error_for_status()?.json::<Option<User>>().await?)
    }

    async fn leagues(&self, user_id: &UserId, season: Season) -> Result<Vec<League>> {
        self.get_list(&format!("/user/{}/leagues/nfl/{}", user_id, season))
            .await
    }

    async fn transactions(&self, league_id: &LeagueId, round: u8) -> Result<Vec<Transaction>> {
        self.get_list(&format!("/league/{}/transactions/{}", league_id, round))
            .await
    }

    async fn rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        self.get_list(&format!("/league/{}/rosters", league_id)).await
    }

    async fn league_members(&self, league_id: &LeagueId) -> Result<Vec<LeagueMember>> {
        self.get_list(&format!("/league/{}/users", league_id)).await
    }

    async fn players(&self) -> Result<PlayerPayload> {
        Ok(self
            .get_json::<Option<PlayerPayload>>("/players/nfl")
            .await?
            .unwrap_or_default())
    }

    async fn nfl_state(&self) -> Result<NflState> {
        self.get_json("/state/nfl").await
    }
}
