use std::sync::Arc;

use crate::{entities::faq::FaqResponse, errors::AppError, repositories::faq::FaqRepository};

pub struct FaqHandler {
    pub faq_repo: Arc<dyn FaqRepository>,
}

impl FaqHandler {
    pub fn new(faq_repo: Arc<dyn FaqRepository>) -> Self {
        FaqHandler { faq_repo }
    }

    pub async fn list_faqs(&self) -> Result<Vec<FaqResponse>, AppError> {
        let faqs = self.faq_repo.list_faqs().await?;
        Ok(faqs.into_iter().map(FaqResponse::from).collect())
    }
}
