use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::{
    constants::HERO_UPDATED_MESSAGE,
    entities::{
        action::ActionResponse,
        hero::{HeroDataResponse, HeroPatch, HeroSummary},
    },
    errors::AppError,
    repositories::hero::HeroRepository,
    utils::media::MediaLinks,
};

pub struct HeroHandler {
    pub hero_repo: Arc<dyn HeroRepository>,
}

impl HeroHandler {
    pub fn new(hero_repo: Arc<dyn HeroRepository>) -> Self {
        HeroHandler { hero_repo }
    }

    /// Creates the hero singleton if it does not exist yet. Run once at startup.
    pub async fn initialize(&self) -> Result<(), AppError> {
        let (_, created) = self.hero_repo.ensure_hero().await?;
        if created {
            info!("Created hero section singleton");
        }
        Ok(())
    }

    /// Retrieves the hero data served to the front-end
    pub async fn get_hero_data(&self, links: &MediaLinks) -> Result<HeroDataResponse, AppError> {
        let hero = match self.hero_repo.find_hero().await? {
            Some(hero) => hero,
            None => {
                warn!("Hero section missing at read time, recreating singleton");
                self.hero_repo.ensure_hero().await?.0
            }
        };

        Ok(HeroDataResponse::from_hero(&hero, links))
    }

    /// Retrieves the landing-page summary without creating anything
    pub async fn get_hero_summary(&self, links: &MediaLinks) -> Result<HeroSummary, AppError> {
        let hero = self.hero_repo.find_hero().await?;
        Ok(HeroSummary::from_hero(hero.as_ref(), links))
    }

    /// Applies a partial update to the hero singleton
    pub async fn update_hero(&self, patch: HeroPatch) -> Result<ActionResponse, AppError> {
        patch.validate()?;

        let (mut hero, _) = self.hero_repo.ensure_hero().await?;
        patch.apply_to(&mut hero);

        let saved = self.hero_repo.save_hero(&hero).await?;
        info!(updated_at = %saved.updated_at, "Hero section updated");

        Ok(ActionResponse::success(HERO_UPDATED_MESSAGE))
    }
}
