use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::scores;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    #[serde(default)]
    pub user_id: String,
}

/// Sum of sets won and lost by one user across all their matches.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub user_id: String,
    pub won: i32,
    pub lost: i32,
}

/// GET /balances?user_id=<id>: aggregate set balance for one user.
/// Users with no recorded match get a zero balance, mirroring the lazily
/// created scores: absence means "no match yet", not an error.
async fn user_balance(
    app_state: web::Data<AppState>,
    query: web::Query<BalanceQuery>,
) -> Result<HttpResponse, AppError> {
    let user_id = query.into_inner().user_id;
    if user_id.is_empty() {
        return Err(AppError::bad_request(
            ErrorCode::BadRequest,
            "you must provide a value for 'user_id' parameter",
        ));
    }

    let db = require_db(&app_state)?;
    let records = scores::list_for_user(db, &user_id).await?;

    let mut balance = BalanceResponse {
        user_id,
        won: 0,
        lost: 0,
    };
    for record in &records {
        balance.won += record.score.sets_for(&balance.user_id);
        balance.lost += record.score.sets_against(&balance.user_id);
    }

    Ok(HttpResponse::Ok().json(balance))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/balances", web::get().to(user_balance));
}
