use actix_web::web;

use crate::handlers::{contact, fallback, hero};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/hero-data")
            .route(web::get().to(hero::get_hero_data))
            .route(web::post().to(hero::update_hero_data))
            .default_service(web::to(fallback::invalid_method))
    );
    cfg.service(
        web::resource("/contact")
            .route(web::post().to(contact::submit_contact))
            .default_service(web::to(fallback::invalid_method))
    );
}
