use actix_web::{web, HttpRequest, HttpResponse};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state, req))]
pub async fn get_about(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let links = state.media.links_for(&req);
    let about = state.about_handler.get_about(&links).await?;

    Ok(HttpResponse::Ok().json(about))
}
