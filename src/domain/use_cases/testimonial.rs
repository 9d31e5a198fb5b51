use std::sync::Arc;

use crate::{
    entities::testimonial::TestimonialResponse,
    errors::AppError,
    repositories::testimonial::{TestimonialOrder, TestimonialRepository},
    utils::media::MediaLinks,
};

pub struct TestimonialHandler {
    pub testimonial_repo: Arc<dyn TestimonialRepository>,
}

impl TestimonialHandler {
    pub fn new(testimonial_repo: Arc<dyn TestimonialRepository>) -> Self {
        TestimonialHandler { testimonial_repo }
    }

    /// Testimonials for the JSON API, newest first
    pub async fn list_testimonials(&self, links: &MediaLinks) -> Result<Vec<TestimonialResponse>, AppError> {
        self.list(TestimonialOrder::NewestFirst, links).await
    }

    /// Testimonials for the rendered page, in insertion order
    pub async fn testimonials_for_page(&self, links: &MediaLinks) -> Result<Vec<TestimonialResponse>, AppError> {
        self.list(TestimonialOrder::OldestFirst, links).await
    }

    async fn list(&self, order: TestimonialOrder, links: &MediaLinks) -> Result<Vec<TestimonialResponse>, AppError> {
        let testimonials = self.testimonial_repo.list_testimonials(order).await?;

        Ok(testimonials
            .into_iter()
            .map(|testimonial| TestimonialResponse::from_testimonial(testimonial, links))
            .collect())
    }
}
