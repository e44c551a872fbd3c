//! Bounded, deduplicated query history.
//!
//! Keeps the queries a session has submitted, most recent first. Entries are
//! trimmed, non-empty strings; no two entries are equal. Recording an
//! existing query moves it to the front instead of duplicating it, and the
//! list never grows beyond its cap no matter how many distinct queries a
//! session submits.

/// Default maximum number of entries a history retains.
pub const MAX_HISTORY: usize = 20;

/// Ordered list of past queries, most recent first.
#[derive(Debug, Clone)]
pub struct QueryHistory {
    entries: Vec<String>,
    cap: usize,
}

impl QueryHistory {
    /// Create an empty history with the default cap of [`MAX_HISTORY`].
    pub fn new() -> Self {
        Self::with_cap(MAX_HISTORY)
    }

    /// Create an empty history with an explicit cap.
    pub fn with_cap(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap,
        }
    }

    /// Record a query at the front.
    ///
    /// The caller passes the query already trimmed; an empty string is a
    /// no-op. An existing equal entry is moved to the front rather than
    /// duplicated, then the list is truncated to the cap.
    pub fn record(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }
        self.entries.retain(|q| q != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.cap);
    }

    /// Remove the entry exactly equal to `query`, if present.
    pub fn remove(&mut self, query: &str) {
        self.entries.retain(|q| q != query);
    }

    /// Forget all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QueryHistory {
    fn default() -> Self {
        Self::new()
    }
}
