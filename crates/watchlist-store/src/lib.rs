//! Watchlist State Container
//!
//! Owns the user's named watchlists and the active selection, and exposes
//! the only mutation entry points for them. Rendering is a consumer concern;
//! the store hands out read-only state and never calls back into the UI.

pub mod models;
pub mod store;

pub use models::{Watchlist, WatchlistId};
pub use store::WatchlistStore;
