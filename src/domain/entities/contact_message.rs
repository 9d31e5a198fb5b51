use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail};

use crate::{
    constants::{INVALID_DATA_FORMAT_MESSAGE, INVALID_EMAIL_MESSAGE, REQUIRED_FIELDS_MESSAGE},
    errors::AppError,
    utils::json_body::from_json_object,
};

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Raw contact-form body. Missing keys default to empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactMessageForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessageForm {
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        from_json_object(body)
            .map_err(|_| AppError::BadRequest(INVALID_DATA_FORMAT_MESSAGE.to_string()))
    }
}

/// A trimmed, validated contact message ready for insert.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewContactMessage {
    #[validate(length(min = 1, max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    #[validate(length(min = 1))]
    pub message: String,
}

impl TryFrom<ContactMessageForm> for NewContactMessage {
    type Error = AppError;

    fn try_from(form: ContactMessageForm) -> Result<Self, Self::Error> {
        let new_message = NewContactMessage {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            message: form.message.trim().to_string(),
        };

        if new_message.name.is_empty() || new_message.email.is_empty() || new_message.message.is_empty() {
            return Err(AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        if !new_message.email.validate_email() {
            return Err(AppError::BadRequest(INVALID_EMAIL_MESSAGE.to_string()));
        }

        new_message.validate()?;
        Ok(new_message)
    }
}
