//! Sleeper Trades Library
//!
//! Collects every trade across all of a Sleeper fantasy-football user's
//! leagues and flattens them into display rows, newest first.
//!
//! ## Features
//!
//! - **Trade Aggregation**: username -> leagues -> transactions, fetched concurrently per league
//! - **Player Directory**: the large `/players/nfl` payload, loaded once per process
//! - **Degraded Results**: a failing league contributes no rows instead of failing the request
//! - **Web UI**: a search form and sortable trades table served with axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sleeper_trades::{
//!     config::Settings,
//!     core::PlayerDirectoryCache,
//!     sleeper::{SleeperApi, SleeperClient},
//!     trades::{Aggregator, TradeQuery},
//! };
//!
//! # async fn example() -> sleeper_trades::Result<()> {
//! let settings = Settings::from_env();
//! let api: Arc<dyn SleeperApi> = Arc::new(SleeperClient::new(&settings)?);
//! let players = Arc::new(PlayerDirectoryCache::new(
//!     Arc::clone(&api),
//!     settings.players_snapshot_path(),
//!     settings.players_max_age,
//! ));
//! let aggregator = Aggregator::new(api, players);
//!
//! for row in aggregator.get_trades("alice", &TradeQuery::default()).await? {
//!     println!("{} {} lost {:?} gained {:?}", row.date_label(), row.league_name, row.lost, row.gained);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export SLEEPER_CACHE_DIR=~/.cache/sleeper-trades
//! export SLEEPER_MAX_CONCURRENT=8
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod sleeper;
pub mod trades;
pub mod web;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, RosterId, RoundSet, Season, TransactionId, UserId};
pub use error::{Result, SleeperError};
pub use trades::{Aggregator, Asset, TradeQuery, TradeRow};
