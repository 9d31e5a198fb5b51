use std::sync::Arc;

use crate::{
    entities::experience::ExperienceResponse,
    errors::AppError,
    repositories::experience::ExperienceRepository,
};

pub struct ExperienceHandler {
    pub experience_repo: Arc<dyn ExperienceRepository>,
}

impl ExperienceHandler {
    pub fn new(experience_repo: Arc<dyn ExperienceRepository>) -> Self {
        ExperienceHandler { experience_repo }
    }

    /// Lists experiences, most recently created first
    pub async fn list_experiences(&self) -> Result<Vec<ExperienceResponse>, AppError> {
        let experiences = self.experience_repo.list_experiences().await?;
        Ok(experiences.into_iter().map(ExperienceResponse::from).collect())
    }
}
