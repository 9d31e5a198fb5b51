use std::sync::Arc;

use sqlx::PgPool;

use crate::repositories::{
    about::AboutRepository,
    contact_message::ContactMessageRepository,
    experience::ExperienceRepository,
    faq::FaqRepository,
    health::HealthRepository,
    hero::HeroRepository,
    project::ProjectRepository,
    sqlx_repo::{
        SqlxAboutRepo, SqlxContactMessageRepo, SqlxExperienceRepo, SqlxFaqRepo,
        SqlxHealthRepo, SqlxHeroRepo, SqlxProjectRepo, SqlxTestimonialRepo,
    },
    testimonial::TestimonialRepository,
};

/// One handle per repository trait. Tests swap in their own implementations.
#[derive(Clone)]
pub struct SharedRepositories {
    pub hero_repo: Arc<dyn HeroRepository>,
    pub about_repo: Arc<dyn AboutRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub experience_repo: Arc<dyn ExperienceRepository>,
    pub testimonial_repo: Arc<dyn TestimonialRepository>,
    pub faq_repo: Arc<dyn FaqRepository>,
    pub contact_repo: Arc<dyn ContactMessageRepository>,
    pub health_repo: Arc<dyn HealthRepository>,
}

impl SharedRepositories {
    pub fn postgres(pool: PgPool) -> Self {
        SharedRepositories {
            hero_repo: Arc::new(SqlxHeroRepo::new(pool.clone())),
            about_repo: Arc::new(SqlxAboutRepo::new(pool.clone())),
            project_repo: Arc::new(SqlxProjectRepo::new(pool.clone())),
            experience_repo: Arc::new(SqlxExperienceRepo::new(pool.clone())),
            testimonial_repo: Arc::new(SqlxTestimonialRepo::new(pool.clone())),
            faq_repo: Arc::new(SqlxFaqRepo::new(pool.clone())),
            contact_repo: Arc::new(SqlxContactMessageRepo::new(pool.clone())),
            health_repo: Arc::new(SqlxHealthRepo::new(pool)),
        }
    }
}
