use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn list_experiences(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let experiences = state.experience_handler.list_experiences().await?;
    Ok(HttpResponse::Ok().json(experiences))
}
