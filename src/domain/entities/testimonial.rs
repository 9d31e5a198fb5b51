use serde::{Deserialize, Serialize};

use crate::utils::media::MediaLinks;

/// Ratings are stored as 1..=5, enforced by a CHECK constraint.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub rating: i16,
    pub feedback: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialResponse {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub rating: i16,
    pub feedback: String,
    pub image: String,
}

impl TestimonialResponse {
    pub fn from_testimonial(testimonial: Testimonial, links: &MediaLinks) -> Self {
        TestimonialResponse {
            image: links.absolute_opt(testimonial.image.as_deref()),
            id: testimonial.id,
            name: testimonial.name,
            title: testimonial.title,
            company: testimonial.company,
            location: testimonial.location,
            rating: testimonial.rating,
            feedback: testimonial.feedback,
        }
    }

    /// Rating rendered as filled and empty stars, e.g. `★★★★☆`.
    pub fn stars(&self) -> String {
        let filled = self.rating.clamp(0, 5) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}
