//! Time-related types for NFL seasons and transaction rounds.

use crate::error::{Result, SleeperError};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::IdRepr;

/// Highest round Sleeper reports transactions for (regular season plus playoffs).
pub const MAX_ROUND: u8 = 18;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IdRepr")]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// The current calendar year in UTC. Used when `/state/nfl` is unavailable.
    pub fn current() -> Self {
        Self(chrono::Utc::now().year() as u16)
    }
}

impl TryFrom<IdRepr> for Season {
    type Error = std::num::ParseIntError;

    fn try_from(repr: IdRepr) -> std::result::Result<Self, Self::Error> {
        String::from(repr).trim().parse().map(Self)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Set of transaction rounds (weeks) to query, sorted and deduplicated.
///
/// Parses specs such as `1`, `1,3,5`, `2-6`, or `1-4,6,8-10`.
///
/// # Examples
///
/// ```rust
/// use sleeper_trades::RoundSet;
///
/// let rounds: RoundSet = "1-3,5".parse().unwrap();
/// assert_eq!(rounds.as_slice(), &[1, 2, 3, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoundSet(Vec<u8>);

impl RoundSet {
    pub fn new(mut rounds: Vec<u8>) -> Self {
        rounds.sort_unstable();
        rounds.dedup();
        Self(rounds)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RoundSet {
    fn default() -> Self {
        Self((1..=MAX_ROUND).collect())
    }
}

impl fmt::Display for RoundSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl FromStr for RoundSet {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SleeperError::InvalidRounds {
            spec: s.to_string(),
        };
        let parse_round = |part: &str| -> Result<u8> {
            match part.trim().parse::<u8>() {
                Ok(r) if (1..=MAX_ROUND).contains(&r) => Ok(r),
                _ => Err(invalid()),
            }
        };

        let mut rounds = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('-') {
                Some((start, end)) => {
                    let (start, end) = (parse_round(start)?, parse_round(end)?);
                    if start > end {
                        return Err(invalid());
                    }
                    rounds.extend(start..=end);
                }
                None => rounds.push(parse_round(part)?),
            }
        }

        if rounds.is_empty() {
            return Err(invalid());
        }
        Ok(Self::new(rounds))
    }
}
