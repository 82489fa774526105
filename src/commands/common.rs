//! Shared setup for every command.

use std::sync::Arc;

use crate::{
    config::Settings,
    core::PlayerDirectoryCache,
    sleeper::{SleeperApi, SleeperClient},
    trades::Aggregator,
    Result,
};

/// Context containing the resources every command needs
pub struct CommandContext {
    pub settings: Settings,
    pub api: Arc<dyn SleeperApi>,
    pub players: Arc<PlayerDirectoryCache>,
    pub aggregator: Arc<Aggregator>,
}

impl CommandContext {
    /// Build the HTTP client, the player directory cache, and the aggregator.
    pub fn new(settings: Settings) -> Result<Self> {
        let api: Arc<dyn SleeperApi> = Arc::new(SleeperClient::new(&settings)?);
        Ok(Self::with_api(settings, api))
    }

    /// Same as `new`, with a caller-supplied API implementation.
    pub fn with_api(settings: Settings, api: Arc<dyn SleeperApi>) -> Self {
        let players = Arc::new(PlayerDirectoryCache::new(
            Arc::clone(&api),
            settings.players_snapshot_path(),
            settings.players_max_age,
        ));
        let aggregator = Arc::new(Aggregator::new(Arc::clone(&api), Arc::clone(&players)));

        Self {
            settings,
            api,
            players,
            aggregator,
        }
    }
}
