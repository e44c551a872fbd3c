//! # Repolens
//!
//! Console core for a remote semantic code-search service.
//!
//! Repolens talks to a service that indexes source repositories, turns its
//! untrusted result payloads into one canonical display-safe shape (with
//! derived repository/file links), and keeps per-session search state:
//! current results, a bounded deduplicated query history, the loading flag,
//! and the last submitted query.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌─────────────────┐   ┌────────────────┐
//! │   CLI    │──▶│ QueryController │──▶│ SearchProvider │──▶ remote index
//! │  (lens)  │   │  submit(query)  │   │ (HTTP/reqwest) │
//! └──────────┘   └────────┬────────┘   └────────────────┘
//!                         │ normalize per record
//!                         ▼
//!                 ┌──────────────┐
//!                 │ SessionStore │  results · history · loading · last query
//!                 └──────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Wire and canonical data types |
//! | [`normalize`] | Raw record → canonical result |
//! | [`links`] | Repository/file link derivation |
//! | [`history`] | Bounded, deduplicated query history |
//! | [`session`] | Process-wide search session state |
//! | [`provider`] | Remote search service client |
//! | [`controller`] | Query lifecycle orchestration |
//! | [`stats`] | Remote index statistics overview |

pub mod config;
pub mod controller;
pub mod history;
pub mod links;
pub mod models;
pub mod normalize;
pub mod provider;
pub mod session;
pub mod stats;
