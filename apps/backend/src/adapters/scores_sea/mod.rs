//! SeaORM adapter for the scores repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseTransaction, EntityTrait,
    QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::scores;

pub mod dto;

pub use dto::{ScoreCreate, ScoreUpdate};

/// Find the score for a pair of users, in either stored orientation.
pub async fn find_by_pair<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_a: &str,
    user_b: &str,
) -> Result<Option<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .filter(
            Condition::any()
                .add(
                    Condition::all()
                        .add(scores::Column::User1Id.eq(user_a))
                        .add(scores::Column::User2Id.eq(user_b)),
                )
                .add(
                    Condition::all()
                        .add(scores::Column::User1Id.eq(user_b))
                        .add(scores::Column::User2Id.eq(user_a)),
                ),
        )
        .one(conn)
        .await
}

/// Find every score one user appears on, on either side.
pub async fn find_all_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<scores::Model>, sea_orm::DbErr> {
    scores::Entity::find()
        .filter(
            Condition::any()
                .add(scores::Column::User1Id.eq(user_id))
                .add(scores::Column::User2Id.eq(user_id)),
        )
        .all(conn)
        .await
}

/// Create a score record
pub async fn create_score(
    txn: &DatabaseTransaction,
    dto: ScoreCreate,
) -> Result<scores::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let score = scores::ActiveModel {
        id: Set(Uuid::new_v4()),
        user1_id: Set(dto.user1_id),
        user2_id: Set(dto.user2_id),
        user1_points: Set(dto.user1_points),
        user2_points: Set(dto.user2_points),
        user1_sets: Set(dto.user1_sets),
        user2_sets: Set(dto.user2_sets),
        points_in_balance: Set(dto.points_in_balance),
        created_at: Set(now),
        updated_at: Set(now),
    };

    score.insert(txn).await
}

/// Update the mutable columns of an existing score record
pub async fn update_score(
    txn: &DatabaseTransaction,
    dto: ScoreUpdate,
) -> Result<scores::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let score = scores::ActiveModel {
        id: sea_orm::Unchanged(dto.id),
        user1_points: Set(dto.user1_points),
        user2_points: Set(dto.user2_points),
        user1_sets: Set(dto.user1_sets),
        user2_sets: Set(dto.user2_sets),
        points_in_balance: Set(dto.points_in_balance),
        updated_at: Set(now),
        ..Default::default()
    };

    score.update(txn).await
}
