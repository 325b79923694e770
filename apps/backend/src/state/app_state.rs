use sea_orm::DatabaseConnection;

use crate::domain::Ruleset;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Scoring rule data, built once at startup
    pub rules: Ruleset,
}

impl AppState {
    /// Create a new AppState with the given database connection and rules
    pub fn new(db: DatabaseConnection, rules: Ruleset) -> Self {
        Self {
            db: Some(db),
            rules,
        }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn without_db(rules: Ruleset) -> Self {
        Self { db: None, rules }
    }
}
