use std::sync::Arc;

use crate::{
    constants::ABOUT_NOT_FOUND_MESSAGE,
    entities::about::AboutResponse,
    errors::AppError,
    repositories::about::AboutRepository,
    utils::media::MediaLinks,
};

pub struct AboutHandler {
    pub about_repo: Arc<dyn AboutRepository>,
}

impl AboutHandler {
    pub fn new(about_repo: Arc<dyn AboutRepository>) -> Self {
        AboutHandler { about_repo }
    }

    /// Retrieves the "About" section together with its skills
    pub async fn get_about(&self, links: &MediaLinks) -> Result<AboutResponse, AppError> {
        let about = self.about_repo
            .find_first_about()
            .await?
            .ok_or_else(|| AppError::NotFound(ABOUT_NOT_FOUND_MESSAGE.to_string()))?;

        let skills = self.about_repo.list_skills(about.id).await?;

        Ok(AboutResponse::build(about, skills, links))
    }
}
