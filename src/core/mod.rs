//! Core utilities shared by the aggregator and the commands
//!
//! - `cache`: file helpers and the username LRU memo
//! - `players`: the process-wide player directory

pub mod cache;
pub mod players;

// Re-export commonly used items for convenience
pub use cache::{read_if_fresh, try_read_to_string, write_string, UserCache};
pub use players::{write_snapshot, PlayerDirectory, PlayerDirectoryCache};
