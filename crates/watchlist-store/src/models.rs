//! Watchlist Data Models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque watchlist identifier, assigned at creation and immutable thereafter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchlistId(pub(crate) u64);

impl fmt::Display for WatchlistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, user-curated ordered set of ticker symbols
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Watchlist {
    pub id: WatchlistId,
    pub name: String,
    /// Ordered, no duplicate symbol within one list
    pub stocks: Vec<String>,
}
