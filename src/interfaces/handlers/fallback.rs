use actix_web::{HttpResponse, ResponseError};

use crate::errors::{ActionError, AppError};

/// 405 in the `{success: false}` envelope, for resources that only accept
/// specific methods.
pub async fn invalid_method() -> HttpResponse {
    ActionError::from(AppError::MethodNotAllowed).error_response()
}
