//! Query lifecycle orchestration.
//!
//! One search runs `Idle → Submitting → {Succeeded, Failed} → Idle`. The
//! controller validates input, flags the session as loading, calls the
//! provider, routes every raw record through the normalizer, and publishes
//! results and history to the session store. Provider failures stop at this
//! boundary: they are logged and folded into the returned
//! [`SubmitOutcome`], never propagated as errors.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::normalize::normalize_record;
use crate::provider::SearchProvider;
use crate::session::SessionStore;

/// What a call to [`QueryController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The trimmed query was empty; no state transition, no request.
    Skipped,
    /// The search succeeded; carries the number of results published.
    Completed(usize),
    /// The provider failed; results were cleared, history left untouched.
    Failed,
    /// A newer submission was issued while this one was in flight; its
    /// response was discarded without touching the store.
    Superseded,
}

/// Orchestrates one end-to-end search against the remote service.
pub struct QueryController {
    provider: Arc<dyn SearchProvider>,
    store: Arc<SessionStore>,
    default_branch: String,
    // Monotonic submission counter; completions race against it.
    seq: AtomicU64,
}

impl QueryController {
    pub fn new(
        provider: Arc<dyn SearchProvider>,
        store: Arc<SessionStore>,
        default_branch: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            store,
            default_branch: default_branch.into(),
            seq: AtomicU64::new(0),
        }
    }

    /// The session store this controller publishes into.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Submit a query.
    ///
    /// The loading flag and `last_query` are set before the request goes
    /// out, so observers see intent even when the request later fails.
    /// History is only recorded for searches that produced a response:
    /// `last_query` reflects intent, history reflects queries that worked.
    ///
    /// A completion that is no longer the latest issued submission is
    /// discarded wholesale, so a slow response can never overwrite a newer
    /// one.
    pub async fn submit(&self, query: &str) -> SubmitOutcome {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Skipped;
        }

        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        self.store.set_last_query(trimmed);
        self.store.set_loading(true);

        let response = self.provider.search(trimmed).await;

        if self.seq.load(Ordering::SeqCst) != seq {
            debug!(query = trimmed, "discarding superseded search response");
            return SubmitOutcome::Superseded;
        }

        match response {
            Ok(resp) => {
                let results: Vec<_> = resp
                    .results
                    .iter()
                    .map(|raw| normalize_record(raw, &self.default_branch))
                    .collect();
                let count = results.len();
                self.store.set_results(results);
                self.store.set_loading(false);
                self.store.record_history_entry(trimmed);
                SubmitOutcome::Completed(count)
            }
            Err(e) => {
                warn!(query = trimmed, error = %e, "search request failed");
                self.store.set_results(Vec::new());
                self.store.set_loading(false);
                SubmitOutcome::Failed
            }
        }
    }
}
