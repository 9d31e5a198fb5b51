use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::faq::Faq, errors::AppError, repositories::sqlx_repo::SqlxFaqRepo};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// Lists all FAQs by ascending id. `display_order` is not consulted.
    async fn list_faqs(&self) -> Result<Vec<Faq>, AppError>;
}

impl SqlxFaqRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxFaqRepo { pool }
    }
}

#[async_trait]
impl FaqRepository for SqlxFaqRepo {
    async fn list_faqs(&self) -> Result<Vec<Faq>, AppError> {
        let faqs = sqlx::query_as::<_, Faq>(
            r#"
            SELECT id, question, answer, is_active, display_order
            FROM faqs
            ORDER BY id ASC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(faqs)
    }
}
