//! Current standing of a foosball match between two users.

/// Match state for one unordered pair of users.
///
/// `user1`/`user2` order is arbitrary but fixed at creation. Points are the
/// running tally of the current set and may go negative (gamelle goals);
/// sets are completed-set counts and only ever grow. `points_in_balance`
/// holds points banked by demi goals, paid out on the next ordinary goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub user1_id: String,
    pub user2_id: String,
    pub user1_points: i32,
    pub user2_points: i32,
    pub user1_sets: i32,
    pub user2_sets: i32,
    pub points_in_balance: i32,
}

impl Score {
    /// Zero-valued score for a pair that has no match yet.
    pub fn new_pair(user1_id: impl Into<String>, user2_id: impl Into<String>) -> Self {
        Self {
            user1_id: user1_id.into(),
            user2_id: user2_id.into(),
            user1_points: 0,
            user2_points: 0,
            user1_sets: 0,
            user2_sets: 0,
            points_in_balance: 0,
        }
    }

    /// True if `user_id` is one of the two users on this score.
    pub fn has_user(&self, user_id: &str) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }

    /// Add points to the submitted user's current-set tally.
    /// Unknown ids are ignored; callers validate the pair first.
    pub fn score_points(&mut self, user_id: &str, points: i32) {
        if self.user1_id == user_id {
            self.user1_points += points;
        } else if self.user2_id == user_id {
            self.user2_points += points;
        }
    }

    /// The user whose tally reached `points_to_win`, if any.
    pub fn set_winner(&self, points_to_win: i32) -> Option<&str> {
        if self.user1_points >= points_to_win {
            Some(&self.user1_id)
        } else if self.user2_points >= points_to_win {
            Some(&self.user2_id)
        } else {
            None
        }
    }

    /// Close the current set: credit the winner and reset points and balance.
    pub fn change_set(&mut self, winner_id: &str) {
        if self.user1_id == winner_id {
            self.user1_sets += 1;
        } else if self.user2_id == winner_id {
            self.user2_sets += 1;
        }
        self.user1_points = 0;
        self.user2_points = 0;
        self.points_in_balance = 0;
    }

    /// Sets won by `user_id` on this score.
    pub fn sets_for(&self, user_id: &str) -> i32 {
        if self.user1_id == user_id {
            self.user1_sets
        } else if self.user2_id == user_id {
            self.user2_sets
        } else {
            0
        }
    }

    /// Sets won by the other user of the pair.
    pub fn sets_against(&self, user_id: &str) -> i32 {
        if self.user1_id == user_id {
            self.user2_sets
        } else if self.user2_id == user_id {
            self.user1_sets
        } else {
            0
        }
    }
}
