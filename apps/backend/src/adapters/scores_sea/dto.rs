//! DTOs for the scores_sea adapter.

use uuid::Uuid;

/// DTO for creating a score record.
#[derive(Debug, Clone)]
pub struct ScoreCreate {
    pub user1_id: String,
    pub user2_id: String,
    pub user1_points: i32,
    pub user2_points: i32,
    pub user1_sets: i32,
    pub user2_sets: i32,
    pub points_in_balance: i32,
}

/// DTO for updating a score record. User ids are immutable once created.
#[derive(Debug, Clone)]
pub struct ScoreUpdate {
    pub id: Uuid,
    pub user1_points: i32,
    pub user2_points: i32,
    pub user1_sets: i32,
    pub user2_sets: i32,
    pub points_in_balance: i32,
}
