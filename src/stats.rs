//! Remote index statistics overview.
//!
//! Fetches the index's statistics and prints a short summary. Used by
//! `lens stats` and the console's `/stats` command to give confidence that
//! the remote index is populated and reachable. Any failure or missing
//! field degrades to zeroed/empty values; the command itself never fails.

use tracing::warn;

use crate::models::IndexStats;
use crate::provider::SearchProvider;

/// Fetch index statistics, degrading to zeroed defaults on any failure.
pub async fn fetch_stats(provider: &dyn SearchProvider) -> IndexStats {
    match provider.stats().await {
        Ok(stats) => stats,
        Err(e) => {
            warn!(error = %e, "failed to fetch index stats");
            IndexStats::default()
        }
    }
}

/// Run the stats command: fetch and print a summary.
pub async fn run_stats(provider: &dyn SearchProvider) {
    let stats = fetch_stats(provider).await;

    println!("Repolens — Index Stats");
    println!("======================");
    println!();
    println!("  Vectors:     {}", format_count(stats.vector_count));
    println!("  Dimension:   {}", stats.dimension);
    println!("  Metric:      {}", display_or_dash(&stats.metric));
    println!("  Vector type: {}", display_or_dash(&stats.vector_type));
    println!();
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Format a count with thousands separators (e.g. `18163` → `18,163`).
fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
