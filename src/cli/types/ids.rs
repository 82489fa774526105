//! ID types for the Sleeper API.
//!
//! Sleeper sends most identifiers as JSON strings, but a few payloads carry
//! the same IDs as numbers. The string-backed wrappers here accept both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw wire form of an identifier that may arrive as a string or a number.
#[doc(hidden)]
#[derive(Deserialize)]
#[serde(untagged)]
pub enum IdRepr {
    Str(String),
    Int(i64),
}

impl From<IdRepr> for String {
    fn from(repr: IdRepr) -> Self {
        match repr {
            IdRepr::Str(s) => s,
            IdRepr::Int(n) => n.to_string(),
        }
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(from = "IdRepr")]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<IdRepr> for $name {
            fn from(repr: IdRepr) -> Self {
                Self(repr.into())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id!(
    /// Type-safe wrapper for Sleeper user IDs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sleeper_trades::UserId;
    ///
    /// let user_id = UserId::new("725012345678901234");
    /// assert_eq!(user_id.as_str(), "725012345678901234");
    /// ```
    UserId
);

string_id!(
    /// Type-safe wrapper for Sleeper league IDs.
    LeagueId
);

string_id!(
    /// Type-safe wrapper for Sleeper player IDs (numeric strings, or team
    /// abbreviations such as `"KC"` for team defenses).
    PlayerId
);

string_id!(
    /// Type-safe wrapper for transaction IDs.
    TransactionId
);

/// Roster slot within a league (1-based, always numeric on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterId(pub u32);

impl RosterId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
