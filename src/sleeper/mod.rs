//! Sleeper API access: wire types and the HTTP client.

#[cfg(test)]
pub mod fake;
pub mod http;
pub mod types;

pub use http::{SleeperApi, SleeperClient};
