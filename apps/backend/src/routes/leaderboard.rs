//! Leaderboard HTTP routes.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::domain::leaderboard::LeaderboardEntry;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::leaderboard::ScoreSubmission;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct SubmitResponse {
    success: bool,
    entry: LeaderboardEntry,
}

#[derive(Debug, Serialize)]
struct TopResponse {
    scores: Vec<LeaderboardEntry>,
    total: usize,
}

#[derive(Debug, Serialize)]
struct RankResponse {
    rank: usize,
    entry: LeaderboardEntry,
}

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    /// Kept as text so a malformed limit falls back to the default.
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankQuery {
    pub player_id: Option<String>,
}

/// POST /leaderboard/submit
async fn submit(
    app_state: web::Data<AppState>,
    body: ValidatedJson<ScoreSubmission>,
) -> Result<HttpResponse, AppError> {
    let entry = app_state.leaderboard.submit(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(SubmitResponse {
        success: true,
        entry,
    }))
}

/// GET /leaderboard/top?limit=
async fn top(
    app_state: web::Data<AppState>,
    query: web::Query<TopQuery>,
) -> Result<HttpResponse, AppError> {
    let limit = query
        .into_inner()
        .limit
        .and_then(|raw| raw.trim().parse::<i64>().ok());
    let scores = app_state.leaderboard.top(limit);
    Ok(HttpResponse::Ok().json(TopResponse {
        total: scores.len(),
        scores,
    }))
}

/// GET /leaderboard/rank?playerId=
async fn rank(
    app_state: web::Data<AppState>,
    query: web::Query<RankQuery>,
) -> Result<HttpResponse, AppError> {
    let player_id = query.into_inner().player_id.unwrap_or_default();
    let (rank, entry) = app_state.leaderboard.rank(&player_id)?;
    Ok(HttpResponse::Ok().json(RankResponse { rank, entry }))
}

/// GET /leaderboard/stats
async fn stats(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(app_state.leaderboard.stats()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/submit").route(web::post().to(submit)))
        .service(web::resource("/top").route(web::get().to(top)))
        .service(web::resource("/rank").route(web::get().to(rank)))
        .service(web::resource("/stats").route(web::get().to(stats)));
}
