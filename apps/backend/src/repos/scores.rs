//! Scores repository: domain-facing persistence functions.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::adapters::scores_sea as scores_adapter;
use crate::domain::Score;
use crate::entities::scores;
use crate::error::AppError;

/// A persisted score: the domain state plus its storage identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub id: Uuid,
    pub score: Score,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Find the score record for a pair of users, in either orientation.
pub async fn find_by_pair<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_a: &str,
    user_b: &str,
) -> Result<Option<ScoreRecord>, AppError> {
    let model = scores_adapter::find_by_pair(conn, user_a, user_b).await?;
    Ok(model.map(ScoreRecord::from))
}

/// Every score record one user appears on.
pub async fn list_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<ScoreRecord>, AppError> {
    let models = scores_adapter::find_all_for_user(conn, user_id).await?;
    Ok(models.into_iter().map(ScoreRecord::from).collect())
}

/// Persist a brand-new score (lazily created on the pair's first goal).
pub async fn create(txn: &DatabaseTransaction, score: &Score) -> Result<ScoreRecord, AppError> {
    let dto = scores_adapter::ScoreCreate {
        user1_id: score.user1_id.clone(),
        user2_id: score.user2_id.clone(),
        user1_points: score.user1_points,
        user2_points: score.user2_points,
        user1_sets: score.user1_sets,
        user2_sets: score.user2_sets,
        points_in_balance: score.points_in_balance,
    };
    let model = scores_adapter::create_score(txn, dto).await?;
    Ok(ScoreRecord::from(model))
}

/// Persist the mutable state of an existing score.
pub async fn update(
    txn: &DatabaseTransaction,
    id: Uuid,
    score: &Score,
) -> Result<ScoreRecord, AppError> {
    let dto = scores_adapter::ScoreUpdate {
        id,
        user1_points: score.user1_points,
        user2_points: score.user2_points,
        user1_sets: score.user1_sets,
        user2_sets: score.user2_sets,
        points_in_balance: score.points_in_balance,
    };
    let model = scores_adapter::update_score(txn, dto).await?;
    Ok(ScoreRecord::from(model))
}

// Conversion between the SeaORM model and the domain model

impl From<scores::Model> for ScoreRecord {
    fn from(model: scores::Model) -> Self {
        Self {
            id: model.id,
            score: Score {
                user1_id: model.user1_id,
                user2_id: model.user2_id,
                user1_points: model.user1_points,
                user2_points: model.user2_points,
                user1_sets: model.user1_sets,
                user2_sets: model.user2_sets,
                points_in_balance: model.points_in_balance,
            },
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
