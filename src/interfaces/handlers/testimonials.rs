use actix_web::{web, HttpRequest, HttpResponse};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state, req))]
pub async fn list_testimonials(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let links = state.media.links_for(&req);
    let testimonials = state.testimonial_handler.list_testimonials(&links).await?;

    Ok(HttpResponse::Ok().json(testimonials))
}
