use actix_web::web;

use crate::handlers::{about, experiences, faq, pages, projects, testimonials};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/about")
            .route(web::get().to(about::get_about))
    );

    for path in ["/projects", "/projects-data"] {
        cfg.service(
            web::resource(path)
                .route(web::get().to(projects::list_projects))
        );
    }

    cfg.service(
        web::resource("/experiences")
            .route(web::get().to(experiences::list_experiences))
    );
    cfg.service(
        web::resource("/testimonials")
            .route(web::get().to(pages::testimonials_page))
    );
    cfg.service(
        web::resource("/testimonials-list")
            .route(web::get().to(testimonials::list_testimonials))
    );
    cfg.service(
        web::resource("/faq-list")
            .route(web::get().to(faq::list_faqs))
    );
}
