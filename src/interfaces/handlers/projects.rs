use actix_web::{web, HttpRequest, HttpResponse};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state, req))]
pub async fn list_projects(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let links = state.media.links_for(&req);
    let projects = state.project_handler.list_projects(&links).await?;

    Ok(HttpResponse::Ok().json(projects))
}
