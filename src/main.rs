//! # Repolens CLI (`lens`)
//!
//! The `lens` binary is the console over a remote semantic code-search
//! service: one-shot queries, an interactive session with in-process query
//! history, and an index statistics overview.
//!
//! ## Usage
//!
//! ```bash
//! lens --config ./config/lens.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lens search "<query>"` | Run a single search and print ranked results |
//! | `lens console` | Interactive session with `/history` and `/stats` |
//! | `lens stats` | Show remote index statistics |
//!
//! ## Examples
//!
//! ```bash
//! # One-shot search
//! lens search "jwt authentication middleware"
//!
//! # Same, as JSON for scripting
//! lens search "jwt authentication middleware" --json
//!
//! # Interactive session
//! lens console
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use repolens::config::load_config;
use repolens::controller::{QueryController, SubmitOutcome};
use repolens::models::SearchResult;
use repolens::provider::{HttpProvider, SearchProvider};
use repolens::session::SessionStore;
use repolens::stats::run_stats;

/// Repolens CLI — console for a remote semantic code-search service.
#[derive(Parser)]
#[command(
    name = "lens",
    about = "Repolens — console for a remote semantic code-search service",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Every setting has a default, so a missing file is fine.
    #[arg(long, global = true, default_value = "./config/lens.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Run a single search against the remote index.
    ///
    /// Prints ranked results with scores, source links, and excerpts.
    Search {
        /// Free-text query.
        query: String,

        /// Print results as JSON instead of the human-readable list.
        #[arg(long)]
        json: bool,
    },

    /// Interactive search session.
    ///
    /// Reads queries from stdin; past queries of the session are available
    /// through `/history` and can be re-run by number.
    Console,

    /// Show remote index statistics.
    ///
    /// Vector count, dimensionality, similarity metric, and vector
    /// encoding. Fields degrade to zero/empty when the service is down.
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    let provider: Arc<dyn SearchProvider> = Arc::new(HttpProvider::new(&config.provider)?);
    let store = Arc::new(SessionStore::new(config.history.max_entries));
    let controller = QueryController::new(
        provider.clone(),
        store,
        config.links.default_branch.clone(),
    );

    match cli.command {
        Commands::Search { query, json } => {
            controller.submit(&query).await;
            let results = controller.store().results();
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_results(&results);
            }
        }
        Commands::Console => {
            run_console(&controller, provider.as_ref()).await?;
        }
        Commands::Stats => {
            run_stats(provider.as_ref()).await;
        }
    }

    Ok(())
}

/// Print ranked results in the list format.
fn print_results(results: &[SearchResult]) {
    if results.is_empty() {
        println!("No results.");
        return;
    }

    for (i, result) in results.iter().enumerate() {
        let repo_display = if result.repo.is_empty() {
            "(unknown repo)"
        } else {
            &result.repo
        };
        let path_display = if result.path.is_empty() {
            "(no path)"
        } else {
            &result.path
        };

        println!(
            "{}. [{:.2}] {} / {}",
            i + 1,
            result.similarity,
            repo_display,
            path_display
        );
        if let Some(ref lang) = result.language {
            match result.line_count {
                Some(lines) => println!("    lang: {} ({} lines)", lang, lines),
                None => println!("    lang: {}", lang),
            }
        }
        if let Some(ref url) = result.file_url {
            println!("    url: {}", url);
        } else if let Some(ref url) = result.repo_url {
            println!("    url: {}", url);
        }
        println!(
            "    excerpt: \"{}\"",
            result.preview.replace('\n', " ").trim()
        );
        println!();
    }
}

/// Interactive session loop.
async fn run_console(controller: &QueryController, provider: &dyn SearchProvider) -> Result<()> {
    println!("Repolens interactive console");
    println!("  /history           list this session's past queries");
    println!("  /history <n>       re-run the n-th history entry");
    println!("  /history rm <n>    forget the n-th history entry");
    println!("  /history clear     forget all past queries");
    println!("  /stats             show index statistics");
    println!("  /quit              exit");
    println!("  <query>            search");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("lens> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };
        let input = line.trim();

        if input == "/quit" || input == "/exit" {
            break;
        } else if let Some(rest) = input.strip_prefix("/history") {
            handle_history_command(controller, rest.trim()).await;
        } else if input == "/stats" {
            run_stats(provider).await;
        } else if controller.submit(input).await != SubmitOutcome::Skipped {
            print_results(&controller.store().results());
        }
    }

    Ok(())
}

/// Dispatch `/history` and its subcommands.
async fn handle_history_command(controller: &QueryController, args: &str) {
    let store = controller.store();

    if args.is_empty() {
        let history = store.history();
        if history.is_empty() {
            println!("(no history)");
            return;
        }
        for (i, query) in history.iter().enumerate() {
            println!("{:>3}. {}", i + 1, query);
        }
    } else if args == "clear" {
        store.clear_history();
        println!("History cleared.");
    } else if let Some(n) = args.strip_prefix("rm ").and_then(|s| s.trim().parse::<usize>().ok()) {
        match store.history().get(n.wrapping_sub(1)).cloned() {
            Some(query) => {
                store.remove_history_entry(&query);
                println!("Forgot: {}", query);
            }
            None => println!("No history entry {}.", n),
        }
    } else if let Ok(n) = args.parse::<usize>() {
        match store.history().get(n.wrapping_sub(1)).cloned() {
            Some(query) => {
                println!("Re-running: {}", query);
                controller.submit(&query).await;
                print_results(&store.results());
            }
            None => println!("No history entry {}.", n),
        }
    } else {
        println!("Usage: /history [clear | rm <n> | <n>]");
    }
}
