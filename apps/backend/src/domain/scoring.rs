//! The scoring engine: applies one goal to a score.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::goal::Goal;
use crate::domain::rules::Ruleset;
use crate::domain::score::Score;

/// Rejections for malformed goal submissions. Non-retryable; the score is
/// left untouched in every error case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringError {
    /// Goal's scorer/opponent pair does not match the score's two users.
    MismatchedPlayers,
    /// Goal's player is outside the authorized set.
    UnauthorizedPlayer,
}

impl Display for ScoringError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ScoringError::MismatchedPlayers => {
                write!(f, "goal and score do not correspond to same users")
            }
            ScoringError::UnauthorizedPlayer => {
                write!(f, "goal scored by a player not on the table")
            }
        }
    }
}

impl Error for ScoringError {}

/// How a validated goal scores, in precedence order. Exactly one kind
/// matches any `(goal, balance)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GoalKind {
    /// Exempt player: never affects the score, gamelle or not.
    Exempt,
    /// Gamelle by a demi player: demi players are immune to the deduction.
    GamelleByDemi,
    /// Gamelle: opponent loses a point, scorer gains nothing.
    Gamelle,
    /// Demi goal: banks bonus points instead of scoring.
    Demi,
    /// Ordinary goal with a pending balance: pays the whole bank out.
    BalancePayout,
    /// Ordinary goal: one point to the scorer.
    Ordinary,
}

/// Decision table for the rule cascade. Kept separate from the mutation so
/// precedence is testable on its own.
fn classify(goal: &Goal, rules: &Ruleset, points_in_balance: i32) -> GoalKind {
    let is_demi = rules.is_demi(&goal.player);
    match (rules.is_exempt(&goal.player), goal.gamelle, is_demi) {
        (true, _, _) => GoalKind::Exempt,
        (false, true, true) => GoalKind::GamelleByDemi,
        (false, true, false) => GoalKind::Gamelle,
        (false, false, true) => GoalKind::Demi,
        (false, false, false) if points_in_balance > 0 => GoalKind::BalancePayout,
        (false, false, false) => GoalKind::Ordinary,
    }
}

/// Apply one goal to `score`.
///
/// Validation runs first and leaves the score unmodified on failure:
/// the goal's user pair must equal the score's pair (either orientation)
/// and the player must be authorized. A set completes the instant a tally
/// reaches the ruleset threshold; both tallies and the pending balance
/// then reset to zero.
pub fn apply_goal(score: &mut Score, goal: &Goal, rules: &Ruleset) -> Result<(), ScoringError> {
    let straight =
        goal.scorer_id == score.user1_id && goal.opponent_id == score.user2_id;
    let flipped =
        goal.scorer_id == score.user2_id && goal.opponent_id == score.user1_id;
    if !straight && !flipped {
        return Err(ScoringError::MismatchedPlayers);
    }

    if !rules.is_authorized(&goal.player) {
        return Err(ScoringError::UnauthorizedPlayer);
    }

    match classify(goal, rules, score.points_in_balance) {
        GoalKind::Exempt | GoalKind::GamelleByDemi => return Ok(()),
        GoalKind::Gamelle => score.score_points(&goal.opponent_id, -1),
        GoalKind::Demi => {
            score.points_in_balance += rules.demi_bonus();
            return Ok(());
        }
        GoalKind::BalancePayout => {
            let banked = score.points_in_balance;
            score.points_in_balance = 0;
            score.score_points(&goal.scorer_id, banked);
        }
        GoalKind::Ordinary => score.score_points(&goal.scorer_id, 1),
    }

    if let Some(winner_id) = score.set_winner(rules.points_to_win_set()) {
        let winner_id = winner_id.to_string();
        score.change_set(&winner_id);
    }

    Ok(())
}
