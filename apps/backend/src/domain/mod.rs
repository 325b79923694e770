//! Domain layer: pure scoring logic and rule data, no I/O.

pub mod goal;
pub mod rules;
pub mod score;
pub mod scoring;

#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use goal::Goal;
pub use rules::{Ruleset, DEMI_BONUS_POINTS, POINTS_TO_WIN_SET};
pub use score::Score;
pub use scoring::{apply_goal, ScoringError};
