//! Command implementations for the Sleeper trades CLI

pub mod common;
pub mod players;
pub mod serve;
pub mod trades;

pub use common::CommandContext;
