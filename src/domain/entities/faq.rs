use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub is_active: bool,
    pub display_order: i32,
}

/// Only the public fields; `is_active` and `display_order` stay internal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

impl From<Faq> for FaqResponse {
    fn from(faq: Faq) -> Self {
        FaqResponse {
            id: faq.id,
            question: faq.question,
            answer: faq.answer,
        }
    }
}
