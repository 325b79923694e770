//! A single goal submission, the engine's transient input.

/// One goal event. Not persisted; consumed by `scoring::apply_goal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    /// User credited with the goal.
    pub scorer_id: String,
    /// The other user of the pair.
    pub opponent_id: String,
    /// Table position that scored, one of the ruleset's authorized players.
    pub player: String,
    /// Gamelle: the ball bounced out, which ordinarily costs the opponent
    /// a point instead of rewarding the scorer.
    pub gamelle: bool,
}

impl Goal {
    pub fn new(
        scorer_id: impl Into<String>,
        opponent_id: impl Into<String>,
        player: impl Into<String>,
        gamelle: bool,
    ) -> Self {
        Self {
            scorer_id: scorer_id.into(),
            opponent_id: opponent_id.into(),
            player: player.into(),
            gamelle,
        }
    }
}
