use actix_web::http::StatusCode;
use actix_web::ResponseError;

use crate::domain::ScoringError;
use crate::error::AppError;
use crate::errors::ErrorCode;

#[test]
fn mismatched_players_maps_to_422_with_stable_code() {
    let err = AppError::from(ScoringError::MismatchedPlayers);
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err.code(), ErrorCode::MismatchedPlayers);
}

#[test]
fn unauthorized_player_maps_to_422_with_stable_code() {
    let err = AppError::from(ScoringError::UnauthorizedPlayer);
    assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err.code(), ErrorCode::UnauthorizedPlayer);
}

#[test]
fn db_err_maps_to_500() {
    let err = AppError::from(sea_orm::DbErr::Custom("boom".to_string()));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.code(), ErrorCode::DbError);
}

#[test]
fn problem_details_body_carries_the_code() {
    let err = AppError::from(ScoringError::MismatchedPlayers);
    let resp = err.error_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/problem+json")
    );
}

#[test]
fn db_unavailable_has_500_and_distinct_code() {
    let err = AppError::db_unavailable();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.code(), ErrorCode::DbUnavailable);
}
