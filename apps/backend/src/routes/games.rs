//! Game HTTP routes.

use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::domain::direction::Direction;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub direction: String,
}

#[derive(Debug, Deserialize)]
pub struct StateQuery {
    pub id: Option<String>,
}

/// POST /game/new
async fn new_game(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let state = app_state.games.new_game().await?;
    Ok(HttpResponse::Ok().json(state))
}

/// POST /game/move
///
/// The direction is validated before the game is looked up.
async fn make_move(
    app_state: web::Data<AppState>,
    body: ValidatedJson<MoveRequest>,
) -> Result<HttpResponse, AppError> {
    let MoveRequest { id, direction } = body.into_inner();
    let direction: Direction = direction.parse()?;

    let state = app_state.games.apply_move(&id, direction).await?;
    Ok(HttpResponse::Ok().json(state))
}

/// GET /game/state?id=
async fn get_state(
    app_state: web::Data<AppState>,
    query: web::Query<StateQuery>,
) -> Result<HttpResponse, AppError> {
    let id = query.into_inner().id.unwrap_or_default();
    let state = app_state.games.get_state(&id).await?;
    Ok(HttpResponse::Ok().json(state))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/new").route(web::post().to(new_game)))
        .service(web::resource("/move").route(web::post().to(make_move)))
        .service(web::resource("/state").route(web::get().to(get_state)));
}
