//! Result normalization.
//!
//! The one place where the untrusted wire shape is inspected. Alternative
//! metadata keys are resolved here, derived links are computed here, and
//! everything downstream consumes the canonical
//! [`SearchResult`](crate::models::SearchResult) without ever looking at raw
//! keys.

use serde_json::Value;

use crate::links;
use crate::models::{RawResultRecord, SearchResult};

/// Normalize one raw record into a canonical, display-safe result.
///
/// Total: a missing or malformed field degrades to an empty string, `None`,
/// or a zero score. A record is never dropped and this function never fails.
///
/// The repository identity is resolved once — `repo_id` when present and
/// non-empty, else `repo` — and both the `repo` display field and the
/// `repo_id` link key are views over that single resolved value. The
/// service's score contract is `[0, 1]`, so the score is carried as-is.
pub fn normalize_record(raw: &RawResultRecord, default_branch: &str) -> SearchResult {
    let meta = &raw.metadata;

    let path = str_field(meta, "path").unwrap_or_default();

    let identity = str_field(meta, "repo_id")
        .filter(|s| !s.is_empty())
        .or_else(|| str_field(meta, "repo").filter(|s| !s.is_empty()));

    let repo_url = identity.as_deref().map(links::repo_url);
    let file_url = match (identity.as_deref(), path.is_empty()) {
        (Some(id), false) => Some(links::file_url(id, &path, Some(default_branch))),
        _ => None,
    };

    SearchResult {
        similarity: raw.score.unwrap_or(0.0),
        preview: raw.text.clone().unwrap_or_default(),
        content: str_field(meta, "text"),
        language: str_field(meta, "language"),
        line_count: meta.get("lines").and_then(line_count_field),
        repo: identity.clone().unwrap_or_default(),
        repo_id: identity,
        repo_url,
        file_url,
        path,
    }
}

fn str_field(meta: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    meta.get(key).and_then(Value::as_str).map(str::to_string)
}

// Vector-store metadata numbers frequently arrive as floats even for
// integral values.
fn line_count_field(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: serde_json::Value) -> RawResultRecord {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_empty_record_degrades_to_defaults() {
        let raw = record(serde_json::json!({ "score": 0.73 }));
        let result = normalize_record(&raw, "main");
        assert_eq!(result.path, "");
        assert_eq!(result.similarity, 0.73);
        assert_eq!(result.preview, "");
        assert_eq!(result.repo, "");
        assert!(result.content.is_none());
        assert!(result.language.is_none());
        assert!(result.line_count.is_none());
        assert!(result.repo_id.is_none());
        assert!(result.repo_url.is_none());
        assert!(result.file_url.is_none());
    }

    #[test]
    fn test_missing_score_is_zero() {
        let raw = record(serde_json::json!({ "metadata": { "path": "a.rs" } }));
        assert_eq!(normalize_record(&raw, "main").similarity, 0.0);
    }

    #[test]
    fn test_full_record_resolves_all_fields() {
        let raw = record(serde_json::json!({
            "score": 0.94,
            "text": "short preview",
            "metadata": {
                "path": "src/a.ts",
                "repo_id": "acme/widgets",
                "text": "full snippet body",
                "language": "TypeScript",
                "lines": 156.0
            }
        }));
        let result = normalize_record(&raw, "main");
        assert_eq!(result.path, "src/a.ts");
        assert_eq!(result.similarity, 0.94);
        assert_eq!(result.preview, "short preview");
        assert_eq!(result.content.as_deref(), Some("full snippet body"));
        assert_eq!(result.language.as_deref(), Some("TypeScript"));
        assert_eq!(result.line_count, Some(156));
        assert_eq!(result.repo, "acme/widgets");
        assert_eq!(result.repo_id.as_deref(), Some("acme/widgets"));
        assert_eq!(
            result.repo_url.as_deref(),
            Some("https://github.com/acme/widgets")
        );
        assert_eq!(
            result.file_url.as_deref(),
            Some("https://github.com/acme/widgets/blob/main/src/a.ts")
        );
    }

    #[test]
    fn test_repo_id_preferred_over_repo() {
        let raw = record(serde_json::json!({
            "metadata": { "repo_id": "acme/widgets", "repo": "widgets-display" }
        }));
        let result = normalize_record(&raw, "main");
        assert_eq!(result.repo_id.as_deref(), Some("acme/widgets"));
        assert_eq!(result.repo, "acme/widgets");
    }

    #[test]
    fn test_empty_repo_id_falls_back_to_repo() {
        let raw = record(serde_json::json!({
            "metadata": { "repo_id": "", "repo": "acme/widgets" }
        }));
        let result = normalize_record(&raw, "main");
        assert_eq!(result.repo_id.as_deref(), Some("acme/widgets"));
        assert_eq!(result.repo, "acme/widgets");
        assert_eq!(
            result.repo_url.as_deref(),
            Some("https://github.com/acme/widgets")
        );
    }

    #[test]
    fn test_no_file_url_without_path() {
        let raw = record(serde_json::json!({
            "metadata": { "repo_id": "acme/widgets" }
        }));
        let result = normalize_record(&raw, "main");
        assert!(result.repo_url.is_some());
        assert!(result.file_url.is_none());
    }

    #[test]
    fn test_no_links_without_repo_identity() {
        let raw = record(serde_json::json!({
            "metadata": { "path": "src/a.ts" }
        }));
        let result = normalize_record(&raw, "main");
        assert!(result.repo_url.is_none());
        assert!(result.file_url.is_none());
    }

    #[test]
    fn test_preview_and_content_are_distinct_sources() {
        let raw = record(serde_json::json!({
            "text": "from the match",
            "metadata": { "text": "from the metadata" }
        }));
        let result = normalize_record(&raw, "main");
        assert_eq!(result.preview, "from the match");
        assert_eq!(result.content.as_deref(), Some("from the metadata"));
    }

    #[test]
    fn test_branch_override_flows_into_file_url() {
        let raw = record(serde_json::json!({
            "metadata": { "repo_id": "acme/widgets", "path": "a.rs" }
        }));
        let result = normalize_record(&raw, "develop");
        assert_eq!(
            result.file_url.as_deref(),
            Some("https://github.com/acme/widgets/blob/develop/a.rs")
        );
    }

    #[test]
    fn test_malformed_metadata_types_degrade() {
        let raw = record(serde_json::json!({
            "metadata": { "path": 42, "language": false, "lines": "many" }
        }));
        let result = normalize_record(&raw, "main");
        assert_eq!(result.path, "");
        assert!(result.language.is_none());
        assert!(result.line_count.is_none());
    }
}
