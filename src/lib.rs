//! String Analyzer - analyze, store and query text strings over HTTP
//!
//! Each submitted string is analyzed once (length, palindrome check,
//! distinct characters, word count, character histogram, SHA-256) and stored
//! under its content hash. Stored strings can be fetched, deleted, listed
//! with typed filters, or searched with a small natural-language grammar.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         HTTP API (axum)                      │
//! │   POST/GET/DELETE /strings      GET /strings/filter-by-...   │
//! └───────┬──────────────────┬───────────────────┬───────────────┘
//!         │                  │                   │
//! ┌───────▼───────┐  ┌───────▼────────┐  ┌───────▼───────────────┐
//! │   Analyzer    │  │  Record Store  │  │   Query Interpreter   │
//! │ pure property │  │  hash → record │  │  ordered rule table   │
//! │  functions    │  │  (RwLock)      │  │  text → FilterSet     │
//! └───────────────┘  └───────┬────────┘  └───────┬───────────────┘
//!                            │                   │
//!                    ┌───────▼───────────────────▼───┐
//!                    │         Filter Engine         │
//!                    │  FilterSet → predicates (AND) │
//!                    └───────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`analysis`]: per-string property computation and content hashing
//! - [`strings`]: record store, wire types and HTTP handlers
//! - [`filter`]: filter set, predicates and the filter engine
//! - [`query`]: natural-language query interpreter
//! - [`api`]: unified router with CORS and tracing
//! - [`server`]: listener and graceful shutdown
//! - [`config`]: configuration management

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod query;
pub mod server;
pub mod strings;

pub use config::AnalyzerConfig;
pub use error::{Error, Result};
