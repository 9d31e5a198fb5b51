use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::project::Project, errors::AppError, repositories::sqlx_repo::SqlxProjectRepo};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Lists all projects in insertion order
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, image, github, demo, badges
            FROM projects
            ORDER BY id ASC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }
}
