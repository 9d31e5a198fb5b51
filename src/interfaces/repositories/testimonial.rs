use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::testimonial::Testimonial, errors::AppError, repositories::sqlx_repo::SqlxTestimonialRepo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestimonialOrder {
    /// Insertion order, used by the rendered page
    OldestFirst,
    NewestFirst,
}

impl TestimonialOrder {
    fn as_sql(&self) -> &'static str {
        match self {
            TestimonialOrder::OldestFirst => "ASC",
            TestimonialOrder::NewestFirst => "DESC",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn list_testimonials(&self, order: TestimonialOrder) -> Result<Vec<Testimonial>, AppError>;
}

impl SqlxTestimonialRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxTestimonialRepo { pool }
    }
}

#[async_trait]
impl TestimonialRepository for SqlxTestimonialRepo {
    async fn list_testimonials(&self, order: TestimonialOrder) -> Result<Vec<Testimonial>, AppError> {
        let sql = format!(
            r#"
            SELECT id, name, title, company, location, rating, feedback, image
            FROM testimonials
            ORDER BY id {}
            "#,
            order.as_sql()
        );

        let testimonials = sqlx::query_as::<_, Testimonial>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(testimonials)
    }
}
