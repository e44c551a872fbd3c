//! Source link derivation.
//!
//! Pure string formatting from a canonical `owner/name` repository
//! identifier (and optionally a file path) to browsable URLs. No network
//! access, no check that the target exists.

/// Host all derived links point at.
pub const LINK_BASE: &str = "https://github.com";

/// Branch assumed when a file link is built without explicit branch info.
pub const DEFAULT_BRANCH: &str = "main";

/// Build the canonical repository URL for an `owner/name` identifier.
pub fn repo_url(repo_id: &str) -> String {
    format!("{}/{}", LINK_BASE, repo_id)
}

/// Build the canonical file URL for a path inside a repository.
///
/// `branch` falls back to [`DEFAULT_BRANCH`] when `None`.
pub fn file_url(repo_id: &str, path: &str, branch: Option<&str>) -> String {
    format!(
        "{}/blob/{}/{}",
        repo_url(repo_id),
        branch.unwrap_or(DEFAULT_BRANCH),
        path
    )
}
