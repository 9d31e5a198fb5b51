use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};
use tracing::instrument;

use crate::{
    errors::AppError,
    utils::html::{render_index_page, render_testimonials_page},
    AppState,
};

#[instrument(skip(state, req))]
pub async fn index(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let links = state.media.links_for(&req);
    let hero = state.hero_handler.get_hero_summary(&links).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_index_page(&hero)))
}

#[instrument(skip(state, req))]
pub async fn testimonials_page(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let links = state.media.links_for(&req);
    let testimonials = state.testimonial_handler.testimonials_for_page(&links).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_testimonials_page(&testimonials)))
}
