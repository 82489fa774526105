//! Entry point: parse CLI, set up logging, and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use sleeper_trades::{
    cli::{Commands, SleeperCli},
    commands::{
        players::handle_players,
        serve::handle_serve,
        trades::{handle_trades, TradesParams},
        CommandContext,
    },
    config::Settings,
};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    // Logs go to stderr so `trades --json` output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sleeper_trades=info,tower_http=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let app = SleeperCli::parse();

    let settings = Settings::from_env().with_overrides(
        app.global.base_url,
        app.global.cache_dir,
        app.global.no_disk_cache,
    );
    let ctx = CommandContext::new(settings).context("Failed to build Sleeper client")?;

    match app.command {
        Commands::Trades {
            username,
            season,
            rounds,
            json,
        } => handle_trades(
            &ctx,
            TradesParams {
                username,
                season,
                rounds,
                as_json: json,
            },
        )
        .await
        .context("Failed to fetch trades")?,

        Commands::Players { refresh, verbose } => handle_players(&ctx, refresh, verbose)
            .await
            .context("Failed to load player directory")?,

        Commands::Serve { port } => {
            let port = port.unwrap_or(ctx.settings.port);
            handle_serve(&ctx, port).await.context("Server stopped")?
        }
    }

    Ok(())
}
