use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    constants::HERO_SINGLETON_ID,
    entities::hero::HeroSection,
    errors::AppError,
    repositories::sqlx_repo::SqlxHeroRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Retrieves the singleton hero row, if it exists
    async fn find_hero(&self) -> Result<Option<HeroSection>, AppError>;

    /// Inserts the singleton with column defaults unless it already exists.
    /// The flag reports whether this call created it.
    async fn ensure_hero(&self) -> Result<(HeroSection, bool), AppError>;

    /// Persists the mutable (non-file) hero fields
    async fn save_hero(&self, hero: &HeroSection) -> Result<HeroSection, AppError>;
}

impl SqlxHeroRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxHeroRepo { pool }
    }
}

#[async_trait]
impl HeroRepository for SqlxHeroRepo {
    async fn find_hero(&self) -> Result<Option<HeroSection>, AppError> {
        let hero = sqlx::query_as::<_, HeroSection>(
            r#"SELECT * FROM hero_section WHERE id = $1"#
        )
        .bind(HERO_SINGLETON_ID)
        .fetch_optional(&self.pool)
        .await?;

        Ok(hero)
    }

    async fn ensure_hero(&self) -> Result<(HeroSection, bool), AppError> {
        let created = sqlx::query_as::<_, HeroSection>(
            r#"
            INSERT INTO hero_section (id)
            VALUES ($1)
            ON CONFLICT (id) DO NOTHING
            RETURNING *
            "#
        )
        .bind(HERO_SINGLETON_ID)
        .fetch_optional(&self.pool)
        .await?;

        match created {
            Some(hero) => Ok((hero, true)),
            None => {
                let existing = sqlx::query_as::<_, HeroSection>(
                    r#"SELECT * FROM hero_section WHERE id = $1"#
                )
                .bind(HERO_SINGLETON_ID)
                .fetch_one(&self.pool)
                .await?;

                Ok((existing, false))
            }
        }
    }

    async fn save_hero(&self, hero: &HeroSection) -> Result<HeroSection, AppError> {
        sqlx::query_as::<_, HeroSection>(
            r#"
            UPDATE hero_section SET
                name = $1,
                name_color = $2,
                role = $3,
                tagline = $4,
                location = $5,
                available_for_work = $6,
                linkedin_url = $7,
                github_url = $8,
                instagram_url = $9,
                updated_at = NOW()
            WHERE id = $10
            RETURNING *
            "#
        )
        .bind(&hero.name)
        .bind(&hero.name_color)
        .bind(&hero.role)
        .bind(&hero.tagline)
        .bind(&hero.location)
        .bind(hero.available_for_work)
        .bind(&hero.linkedin_url)
        .bind(&hero.github_url)
        .bind(&hero.instagram_url)
        .bind(hero.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Hero section not found".into()))
    }
}
