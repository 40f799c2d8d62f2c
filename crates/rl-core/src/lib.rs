//! Target-independent core of the RepoLens client.
//!
//! Everything here is plain Rust with no browser bindings so it can be
//! exercised by native tests; the Leptos app wires it to the DOM and network.

pub mod board;
pub mod config;
pub mod error;
pub mod report;
pub mod sort;

pub use board::{BoardView, ResultsBoard};
pub use error::{AnalysisError, ConfigError};
pub use report::{Activity, ReportRecord};
pub use sort::SortKey;
