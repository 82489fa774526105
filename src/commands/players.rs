//! Players command implementation

use crate::Result;

use super::common::CommandContext;

/// Handle the players command: load (or re-download) the player directory
/// and report where the snapshot lives.
pub async fn handle_players(ctx: &CommandContext, refresh: bool, verbose: bool) -> Result<()> {
    let count = if refresh {
        println!("Downloading fresh player directory from Sleeper...");
        ctx.players.refresh_snapshot().await?
    } else {
        println!("Loading player directory (cached if available)...");
        ctx.players.get().await?.len()
    };

    println!("✓ Player directory ready: {} players", count);

    if verbose {
        match ctx.players.snapshot_path() {
            Some(path) => println!("Player snapshot cached at: {}", path.display()),
            None => println!("Disk snapshot disabled"),
        }
        println!("API base URL: {}", ctx.settings.base_url);
    }

    Ok(())
}
