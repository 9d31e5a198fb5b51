use std::sync::Arc;

use tracing::{error, info};

use crate::{
    constants::CONTACT_SENT_MESSAGE,
    entities::{
        action::ActionResponse,
        contact_message::{ContactMessageForm, NewContactMessage},
    },
    errors::AppError,
    repositories::contact_message::ContactMessageRepository,
};

pub struct ContactHandler {
    pub contact_repo: Arc<dyn ContactMessageRepository>,
}

impl ContactHandler {
    pub fn new(contact_repo: Arc<dyn ContactMessageRepository>) -> Self {
        ContactHandler { contact_repo }
    }

    /// Validates and stores a contact-form submission
    pub async fn submit_message(&self, form: ContactMessageForm) -> Result<ActionResponse, AppError> {
        let new_message = NewContactMessage::try_from(form)?;

        // Storage failures of any kind surface as the generic message.
        let stored = self.contact_repo
            .create_contact_message(&new_message)
            .await
            .map_err(|e| {
                error!("Failed to store contact message: {}", e);
                AppError::InternalError(e.to_string())
            })?;

        info!(message_id = stored.id, "Contact message received");

        Ok(ActionResponse::success(CONTACT_SENT_MESSAGE))
    }
}
