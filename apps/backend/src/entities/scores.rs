use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "user1_id")]
    pub user1_id: String,
    #[sea_orm(column_name = "user2_id")]
    pub user2_id: String,
    #[sea_orm(column_name = "user1_points")]
    pub user1_points: i32,
    #[sea_orm(column_name = "user2_points")]
    pub user2_points: i32,
    #[sea_orm(column_name = "user1_sets")]
    pub user1_sets: i32,
    #[sea_orm(column_name = "user2_sets")]
    pub user2_sets: i32,
    #[sea_orm(column_name = "points_in_balance")]
    pub points_in_balance: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
