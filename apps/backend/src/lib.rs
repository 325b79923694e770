#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod repos;
pub mod routes;
pub mod state;


// Re-exports for public API
pub use config::db::{db_url, DbOwner, DbProfile};
pub use db::txn::{with_txn, SharedTxn};
pub use domain::{apply_goal, Goal, Ruleset, Score, ScoringError};
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::ValidatedJson;
pub use infra::db::connect_db;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
