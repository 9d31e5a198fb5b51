use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::contact_message::{ContactMessage, NewContactMessage},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactMessageRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    /// Stores a message; `created_at` is assigned by the database
    async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<ContactMessage, AppError>;
}

impl SqlxContactMessageRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxContactMessageRepo { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for SqlxContactMessageRepo {
    async fn create_contact_message(&self, msg: &NewContactMessage) -> Result<ContactMessage, AppError> {
        let stored = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            "#
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }
}
