//! Rule-set data for the scoring engine.
//!
//! The authorized players, the demi (midfield) subset and the exempt player
//! are configuration, not code: the engine takes a `Ruleset` so variant
//! tables (different player counts, thresholds) need no engine change.

use std::collections::HashSet;

/// First tally to reach this wins the current set.
pub const POINTS_TO_WIN_SET: i32 = 10;

/// Points a demi goal adds to the pending balance.
pub const DEMI_BONUS_POINTS: i32 = 2;

/// Immutable rule data: which players exist on the table and how they score.
#[derive(Debug, Clone)]
pub struct Ruleset {
    authorized_players: HashSet<String>,
    demi_players: HashSet<String>,
    exempt_player: String,
    points_to_win_set: i32,
    demi_bonus: i32,
}

impl Ruleset {
    /// Build a rule set for a non-standard table. `demi_players` should be a
    /// subset of `authorized_players` and `exempt_player` a member of it;
    /// players outside the authorized set are rejected before these sets
    /// are ever consulted.
    pub fn new(
        authorized_players: impl IntoIterator<Item = impl Into<String>>,
        demi_players: impl IntoIterator<Item = impl Into<String>>,
        exempt_player: impl Into<String>,
        points_to_win_set: i32,
        demi_bonus: i32,
    ) -> Self {
        Self {
            authorized_players: authorized_players.into_iter().map(Into::into).collect(),
            demi_players: demi_players.into_iter().map(Into::into).collect(),
            exempt_player: exempt_player.into(),
            points_to_win_set,
            demi_bonus,
        }
    }

    /// The reference 11-player table: `p1`..`p11` authorized, the five-man
    /// midfield bar `p4`..`p8` as demi players, `p9` as the pissette
    /// (bonus-exempt), sets to 10 points.
    pub fn standard_table() -> Self {
        Self::new(
            (1..=11).map(|n| format!("p{n}")),
            (4..=8).map(|n| format!("p{n}")),
            "p9",
            POINTS_TO_WIN_SET,
            DEMI_BONUS_POINTS,
        )
    }

    pub fn is_authorized(&self, player: &str) -> bool {
        self.authorized_players.contains(player)
    }

    pub fn is_demi(&self, player: &str) -> bool {
        self.demi_players.contains(player)
    }

    pub fn is_exempt(&self, player: &str) -> bool {
        self.exempt_player == player
    }

    pub fn points_to_win_set(&self) -> i32 {
        self.points_to_win_set
    }

    pub fn demi_bonus(&self) -> i32 {
        self.demi_bonus
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::standard_table()
    }
}
