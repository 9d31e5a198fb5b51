use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn list_faqs(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let faqs = state.faq_handler.list_faqs().await?;
    Ok(HttpResponse::Ok().json(faqs))
}
