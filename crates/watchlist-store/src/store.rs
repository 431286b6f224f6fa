use crate::models::{Watchlist, WatchlistId};

/// Default lists shown before the user has created any of their own
const DEFAULT_WATCHLISTS: &[(&str, &[&str])] = &[
    ("Tech Stocks", &["AAPL", "MSFT", "GOOGL", "META", "AMZN"]),
    ("Energy Sector", &["XOM", "CVX", "COP", "BP", "SLB"]),
    ("Crypto", &["BTC", "ETH", "SOL", "ADA", "DOT"]),
];

/// Owns the set of watchlists and the active selection.
///
/// Every operation is a total function over the current state: malformed
/// input (unknown id, duplicate symbol, blank name) is a silent no-op rather
/// than an error. Invariants re-established before every return:
/// ids unique, no duplicate symbol within a list, and the active id always
/// references an existing list (unset only when the store is empty).
#[derive(Debug, Default)]
pub struct WatchlistStore {
    watchlists: Vec<Watchlist>,
    active: Option<WatchlistId>,
    next_id: u64,
}

impl WatchlistStore {
    /// Empty store with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with the stock default lists; the first one is active.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        for (name, symbols) in DEFAULT_WATCHLISTS {
            if let Some(id) = store.add_watchlist(name) {
                for symbol in *symbols {
                    store.add_stock(id, symbol);
                }
            }
        }
        store
    }

    /// Create a watchlist and append it after the existing entries.
    ///
    /// Blank names are rejected. Callers are expected to have trimmed and
    /// validated already; the store still refuses to create an unnamed entry.
    /// The new list becomes active only when the store was empty.
    pub fn add_watchlist(&mut self, name: &str) -> Option<WatchlistId> {
        if name.trim().is_empty() {
            tracing::debug!("watchlist with blank name ignored");
            return None;
        }

        self.next_id += 1;
        let id = WatchlistId(self.next_id);
        self.watchlists.push(Watchlist {
            id,
            name: name.to_string(),
            stocks: Vec::new(),
        });

        if self.active.is_none() {
            self.active = Some(id);
        }

        Some(id)
    }

    /// Remove a watchlist, keeping the rest in order. Unknown ids are
    /// ignored. If the removed list was active, selection falls back to the
    /// first remaining list, or to nothing when none remain.
    pub fn remove_watchlist(&mut self, id: WatchlistId) {
        let len_before = self.watchlists.len();
        self.watchlists.retain(|wl| wl.id != id);
        if self.watchlists.len() == len_before {
            tracing::debug!(%id, "remove of unknown watchlist ignored");
            return;
        }

        if self.active == Some(id) {
            self.active = self.watchlists.first().map(|wl| wl.id);
        }
    }

    /// Select the active watchlist. Unknown ids are ignored — selection is a
    /// UI action with no error channel.
    pub fn set_active_watchlist(&mut self, id: WatchlistId) {
        if self.watchlists.iter().any(|wl| wl.id == id) {
            self.active = Some(id);
        } else {
            tracing::debug!(%id, "select of unknown watchlist ignored");
        }
    }

    /// Append a symbol to a watchlist. Unknown ids, blank symbols, and
    /// symbols already present are ignored, so repeated adds are idempotent.
    /// Symbols are stored exactly as given; case folding is the form's job.
    pub fn add_stock(&mut self, id: WatchlistId, symbol: &str) {
        if symbol.trim().is_empty() {
            return;
        }

        let Some(wl) = self.watchlists.iter_mut().find(|wl| wl.id == id) else {
            tracing::debug!(%id, symbol, "add to unknown watchlist ignored");
            return;
        };

        if wl.stocks.iter().any(|s| s == symbol) {
            return;
        }
        wl.stocks.push(symbol.to_string());
    }

    /// Remove a symbol from a watchlist, keeping the remaining symbols in
    /// order. Unknown ids and absent symbols are ignored.
    pub fn remove_stock(&mut self, id: WatchlistId, symbol: &str) {
        let Some(wl) = self.watchlists.iter_mut().find(|wl| wl.id == id) else {
            tracing::debug!(%id, symbol, "remove from unknown watchlist ignored");
            return;
        };

        if let Some(pos) = wl.stocks.iter().position(|s| s == symbol) {
            wl.stocks.remove(pos);
        }
    }

    /// All watchlists in creation order.
    pub fn watchlists(&self) -> &[Watchlist] {
        &self.watchlists
    }

    /// Id of the active watchlist, unset only when the store is empty.
    pub fn active_watchlist_id(&self) -> Option<WatchlistId> {
        self.active
    }

    /// The active watchlist itself.
    pub fn active_watchlist(&self) -> Option<&Watchlist> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: WatchlistId) -> Option<&Watchlist> {
        self.watchlists.iter().find(|wl| wl.id == id)
    }

    pub fn len(&self) -> usize {
        self.watchlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watchlists.is_empty()
    }
}
