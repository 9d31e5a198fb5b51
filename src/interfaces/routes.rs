use actix_web::web;

use crate::handlers::{pages, system};

mod content;
mod forms;

/// Paths are registered without trailing slashes; `NormalizePath::trim`
/// maps `/about/` onto `/about`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(pages::index))
    );
    cfg.service(
        web::resource("/health")
            .route(web::get().to(system::health_check))
    );

    cfg.configure(content::config_routes);
    cfg.configure(forms::config_routes);
}
