//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{RoundSet, Season};

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Sleeper API base URL (or set `SLEEPER_BASE_URL`).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Directory for the player snapshot (or set `SLEEPER_CACHE_DIR`).
    #[clap(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Never read or write the on-disk player snapshot.
    #[clap(long, global = true)]
    pub no_disk_cache: bool,
}

#[derive(Debug, Parser)]
#[clap(
    name = "sleeper-trades",
    about = "View every trade across a Sleeper user's leagues"
)]
pub struct SleeperCli {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List a user's trades across all of their leagues, newest first.
    Trades {
        /// Sleeper username.
        username: String,

        /// Season year (e.g. 2025). Defaults to the current league season.
        #[clap(long, short)]
        season: Option<Season>,

        /// Round spec: e.g. `1`, `1,3,5`, `2-6`, `1-4,6,8-10`. Defaults to 1-18.
        #[clap(long, short)]
        rounds: Option<RoundSet>,

        /// Output results as JSON instead of a text table.
        #[clap(long)]
        json: bool,
    },

    /// Download the player directory and store the on-disk snapshot.
    Players {
        /// Download even if a fresh snapshot exists.
        #[clap(long)]
        refresh: bool,

        /// Print the snapshot path and API base URL when done.
        #[clap(long)]
        verbose: bool,
    },

    /// Run the web UI (search form and trades table).
    Serve {
        /// Port to listen on (or set `PORT`). Defaults to 8000.
        #[clap(long, short)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trades_command() {
        let cli = SleeperCli::try_parse_from([
            "sleeper-trades",
            "trades",
            "alice",
            "--season",
            "2024",
            "--rounds",
            "1-4,6",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Trades {
                username,
                season,
                rounds,
                json,
            } => {
                assert_eq!(username, "alice");
                assert_eq!(season, Some(Season::new(2024)));
                assert_eq!(rounds.unwrap().as_slice(), &[1, 2, 3, 4, 6]);
                assert!(json);
            }
            other => panic!("Expected Trades, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = SleeperCli::try_parse_from([
            "sleeper-trades",
            "serve",
            "-p",
            "9000",
            "--no-disk-cache",
            "--base-url",
            "http://localhost:1234/v1",
        ])
        .unwrap();

        assert!(cli.global.no_disk_cache);
        assert_eq!(
            cli.global.base_url.as_deref(),
            Some("http://localhost:1234/v1")
        );
        assert!(matches!(cli.command, Commands::Serve { port: Some(9000) }));
    }

    #[test]
    fn test_bad_rounds_rejected() {
        let result =
            SleeperCli::try_parse_from(["sleeper-trades", "trades", "alice", "-r", "0-99"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_players_defaults() {
        let cli = SleeperCli::try_parse_from(["sleeper-trades", "players"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Players {
                refresh: false,
                verbose: false
            }
        ));
        assert!(cli.global.cache_dir.is_none());
    }
}
