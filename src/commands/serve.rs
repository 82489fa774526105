//! Serve command implementation

use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    web::{self, AppState},
    Result,
};

use super::common::CommandContext;

/// Handle the serve command: warm the player directory, then run the web UI.
pub async fn handle_serve(ctx: &CommandContext, port: u16) -> Result<()> {
    // Warm in the background; on failure the first request retries.
    let players = Arc::clone(&ctx.players);
    tokio::spawn(async move {
        match players.get().await {
            Ok(directory) => info!(players = directory.len(), "Player directory warmed"),
            Err(e) => warn!(error = %e, "Could not warm player directory"),
        }
    });

    web::serve(
        AppState {
            aggregator: Arc::clone(&ctx.aggregator),
        },
        port,
    )
    .await
}
