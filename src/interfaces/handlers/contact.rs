use actix_web::{web, HttpResponse};
use tracing::instrument;

use crate::{entities::contact_message::ContactMessageForm, errors::ActionError, AppState};

#[instrument(skip(state, body))]
pub async fn submit_contact(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ActionError> {
    let form = ContactMessageForm::from_slice(&body)?;
    let response = state.contact_handler.submit_message(form).await?;

    Ok(HttpResponse::Ok().json(response))
}
