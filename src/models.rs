//! Core data models on both sides of the normalization boundary.
//!
//! The wire shapes ([`RawResultRecord`], [`QueryResponse`], [`IndexStats`])
//! are untrusted: every field may be missing, and the same semantic field can
//! appear under different metadata keys. The canonical [`SearchResult`] is
//! what everything downstream consumes; only [`crate::normalize`] looks at
//! raw metadata keys.

use serde::{Deserialize, Serialize};

/// Raw result record as received from the remote search service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResultRecord {
    /// Relevance score. The service contract fixes the scale to `[0, 1]`.
    #[serde(default)]
    pub score: Option<f64>,
    /// Short snippet text.
    #[serde(default)]
    pub text: Option<String>,
    /// Opaque attribute mapping; keys are not guaranteed present.
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Success payload of the search endpoint.
///
/// Unknown fields (timings, pagination hints) are ignored; a missing
/// `results` field decodes as an empty collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    /// Ranked matches, best first, in the order the service returned them.
    #[serde(default)]
    pub results: Vec<RawResultRecord>,
}

/// Index statistics payload from the statistics endpoint.
///
/// Every field degrades to its zeroed default when missing on the wire or
/// when the request fails entirely.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexStats {
    #[serde(rename = "vectorCount")]
    pub vector_count: u64,
    pub dimension: u64,
    pub metric: String,
    #[serde(rename = "vectorType")]
    pub vector_type: String,
}

/// A canonical search result, safe for display.
///
/// Produced exclusively by [`crate::normalize::normalize_record`].
/// `repo_url` and `file_url` are derived from `repo_id` and `path` at
/// normalization time and are never patched independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Repository-relative file path; empty when the service omitted it.
    pub path: String,
    /// Relevance score in `[0, 1]`.
    pub similarity: f64,
    /// Short snippet text for list views.
    pub preview: String,
    /// Full snippet text, when the service carried one separately from
    /// the preview.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Source language label of the matched file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_count: Option<u64>,
    /// Display name of the owning repository; empty when unresolved.
    pub repo: String,
    /// Canonical `owner/name` identifier, when resolvable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<String>,
    /// Link to the repository; present iff `repo_id` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    /// Link to the file on its branch; present iff `repo_id` and `path` are.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}
