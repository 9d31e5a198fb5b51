use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::about::{About, Skill},
    errors::AppError,
    repositories::sqlx_repo::SqlxAboutRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AboutRepository: Send + Sync {
    /// Retrieves the first "About" row by id
    async fn find_first_about(&self) -> Result<Option<About>, AppError>;

    /// Lists the skills owned by an "About" row, oldest first
    async fn list_skills(&self, about_id: i64) -> Result<Vec<Skill>, AppError>;
}

impl SqlxAboutRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxAboutRepo { pool }
    }
}

#[async_trait]
impl AboutRepository for SqlxAboutRepo {
    async fn find_first_about(&self) -> Result<Option<About>, AppError> {
        let about = sqlx::query_as::<_, About>(
            r#"
            SELECT id, name, profile_image, education, about_text
            FROM about
            ORDER BY id ASC
            LIMIT 1
            "#
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(about)
    }

    async fn list_skills(&self, about_id: i64) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, about_id, name, icon
            FROM skills
            WHERE about_id = $1
            ORDER BY id ASC
            "#
        )
        .bind(about_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }
}
