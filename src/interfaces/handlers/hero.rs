use actix_web::{web, HttpRequest, HttpResponse};
use tracing::instrument;

use crate::{
    entities::hero::HeroPatch,
    errors::{ActionError, AppError},
    AppState,
};

#[instrument(skip(state, req))]
pub async fn get_hero_data(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let links = state.media.links_for(&req);
    let hero = state.hero_handler.get_hero_data(&links).await?;

    Ok(HttpResponse::Ok().json(hero))
}

/// Partial update. The body is parsed here so that malformed JSON is reported
/// in the `{success: false}` envelope instead of actix's default payload error.
#[instrument(skip(state, body))]
pub async fn update_hero_data(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ActionError> {
    let patch = HeroPatch::from_slice(&body)?;

    let response = state.hero_handler.update_hero(patch).await?;

    Ok(HttpResponse::Ok().json(response))
}
