use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::experience::Experience, errors::AppError, repositories::sqlx_repo::SqlxExperienceRepo};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Lists all experiences, most recently created first
    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError>;
}

impl SqlxExperienceRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxExperienceRepo { pool }
    }
}

#[async_trait]
impl ExperienceRepository for SqlxExperienceRepo {
    async fn list_experiences(&self) -> Result<Vec<Experience>, AppError> {
        let experiences = sqlx::query_as::<_, Experience>(
            r#"
            SELECT id, company_name, position, year, languages, duration, description
            FROM experiences
            ORDER BY id DESC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(experiences)
    }
}
