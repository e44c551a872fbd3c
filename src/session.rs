//! Process-wide search session state.
//!
//! [`SessionStore`] is the single shared mutable resource in the crate: it
//! owns the current results, the query history, the loading flag, and the
//! last submitted query. Every other component is stateless. All mutation
//! goes through the store's operations; no other component holds a writable
//! reference to the state.
//!
//! State is created empty at process start and lives for the lifetime of the
//! process. It is not persisted.

use std::sync::RwLock;

use crate::history::QueryHistory;
use crate::models::SearchResult;

/// A point-in-time copy of the session state.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// Current results, relevance order as returned by the service.
    pub results: Vec<SearchResult>,
    /// Query history, most recent first.
    pub history: Vec<String>,
    /// Whether a search is in flight.
    pub is_loading: bool,
    /// The most recently submitted (trimmed) query, regardless of outcome.
    pub last_query: String,
}

struct SessionState {
    results: Vec<SearchResult>,
    history: QueryHistory,
    is_loading: bool,
    last_query: String,
}

/// Single-writer holder of [`SessionState`] behind an `RwLock`.
///
/// All operations are synchronous and total; none can fail.
pub struct SessionStore {
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// Create a store with empty results/history, not loading, no last query.
    pub fn new(history_cap: usize) -> Self {
        Self {
            state: RwLock::new(SessionState {
                results: Vec::new(),
                history: QueryHistory::with_cap(history_cap),
                is_loading: false,
                last_query: String::new(),
            }),
        }
    }

    pub fn results(&self) -> Vec<SearchResult> {
        self.state.read().unwrap().results.clone()
    }

    pub fn history(&self) -> Vec<String> {
        self.state.read().unwrap().history.entries().to_vec()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().unwrap().is_loading
    }

    pub fn last_query(&self) -> String {
        self.state.read().unwrap().last_query.clone()
    }

    /// Copy the whole state at once.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().unwrap();
        SessionSnapshot {
            results: state.results.clone(),
            history: state.history.entries().to_vec(),
            is_loading: state.is_loading,
            last_query: state.last_query.clone(),
        }
    }

    /// Replace the current results.
    pub fn set_results(&self, results: Vec<SearchResult>) {
        self.state.write().unwrap().results = results;
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.write().unwrap().is_loading = loading;
    }

    pub fn set_last_query(&self, query: &str) {
        self.state.write().unwrap().last_query = query.to_string();
    }

    /// Record a trimmed, non-empty query in the history.
    pub fn record_history_entry(&self, query: &str) {
        self.state.write().unwrap().history.record(query);
    }

    pub fn remove_history_entry(&self, query: &str) {
        self.state.write().unwrap().history.remove(query);
    }

    pub fn clear_history(&self) {
        self.state.write().unwrap().history.clear();
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(crate::history::MAX_HISTORY)
    }
}
