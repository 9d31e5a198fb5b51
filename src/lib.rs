mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, utils, web};

use std::sync::Arc;

use repositories::health::HealthRepository;
use shared_repos::SharedRepositories;
use use_cases::{
    about::AboutHandler,
    contact::ContactHandler,
    experience::ExperienceHandler,
    faq::FaqHandler,
    hero::HeroHandler,
    project::ProjectHandler,
    testimonial::TestimonialHandler,
};
use utils::media::MediaConfig;

pub struct AppState {
    pub hero_handler: HeroHandler,
    pub about_handler: AboutHandler,
    pub project_handler: ProjectHandler,
    pub experience_handler: ExperienceHandler,
    pub testimonial_handler: TestimonialHandler,
    pub faq_handler: FaqHandler,
    pub contact_handler: ContactHandler,
    pub health_repo: Arc<dyn HealthRepository>,
    pub media: MediaConfig,
}

impl AppState {
    pub fn new(repos: SharedRepositories, media: MediaConfig) -> Self {
        AppState {
            hero_handler: HeroHandler::new(repos.hero_repo),
            about_handler: AboutHandler::new(repos.about_repo),
            project_handler: ProjectHandler::new(repos.project_repo),
            experience_handler: ExperienceHandler::new(repos.experience_repo),
            testimonial_handler: TestimonialHandler::new(repos.testimonial_repo),
            faq_handler: FaqHandler::new(repos.faq_repo),
            contact_handler: ContactHandler::new(repos.contact_repo),
            health_repo: repos.health_repo,
            media,
        }
    }
}
