use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::db::txn::with_txn;
use crate::domain::{apply_goal, Goal, Score};
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::scores;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub scorer: String,
    pub opponent: String,
    pub player: String,
    #[serde(default)]
    pub gamelle: bool,
}

#[derive(Debug, Serialize)]
struct UserScore {
    points: i32,
    sets: i32,
}

/// Response body keyed by user id, plus the pending balance:
/// `{"<user1>": {"points": .., "sets": ..}, "<user2>": {..}, "points_in_balance": ..}`
fn score_response(score: &Score) -> Value {
    let mut body = Map::new();
    body.insert(
        score.user1_id.clone(),
        json!(UserScore {
            points: score.user1_points,
            sets: score.user1_sets,
        }),
    );
    body.insert(
        score.user2_id.clone(),
        json!(UserScore {
            points: score.user2_points,
            sets: score.user2_sets,
        }),
    );
    body.insert("points_in_balance".to_string(), json!(score.points_in_balance));
    Value::Object(body)
}

/// POST /goals: apply one goal to the pair's score, creating the score
/// lazily on the pair's first goal. Load, apply and save run inside one
/// transaction, which serializes concurrent goals for the same pair.
async fn store_goal(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<GoalRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let goal = Goal::new(payload.scorer, payload.opponent, payload.player, payload.gamelle);
    let rules = app_state.rules.clone();

    let saved = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            let existing = scores::find_by_pair(txn, &goal.scorer_id, &goal.opponent_id).await?;
            let (id, mut score) = match existing {
                Some(record) => (Some(record.id), record.score),
                None => (
                    None,
                    Score::new_pair(goal.scorer_id.clone(), goal.opponent_id.clone()),
                ),
            };

            apply_goal(&mut score, &goal, &rules)?;

            tracing::info!(
                scorer = %goal.scorer_id,
                opponent = %goal.opponent_id,
                player = %goal.player,
                gamelle = goal.gamelle,
                "goal.applied"
            );

            match id {
                Some(id) => scores::update(txn, id, &score).await,
                None => scores::create(txn, &score).await,
            }
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(score_response(&saved.score)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/goals", web::post().to(store_goal));
}
