//! Error codes for the foosball backend API.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses. Add new codes here; never pass ad-hoc
//! strings as error codes.

use core::fmt;

/// Centralized error codes for the API surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Goal's scorer/opponent pair does not match the stored score
    MismatchedPlayers,
    /// Goal scored by a player outside the authorized set
    UnauthorizedPlayer,
    /// General validation error
    ValidationError,
    /// General bad request error (malformed body, missing parameter)
    BadRequest,
    /// Resource not found
    NotFound,
    /// Database operation failed
    DbError,
    /// Database connection not configured or unreachable
    DbUnavailable,
    /// Configuration error (missing or invalid environment)
    ConfigError,
    /// Uncategorized internal error
    Internal,
}

impl ErrorCode {
    /// Canonical string that appears in HTTP responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MismatchedPlayers => "MISMATCHED_PLAYERS",
            ErrorCode::UnauthorizedPlayer => "UNAUTHORIZED_PLAYER",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
