use axum::{Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::modules::tutor::core::script::reply;
use crate::shared::infrastructure::http_error::ApiError;

#[derive(Deserialize)]
pub struct ChatBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: &'static str,
}

pub async fn handle(body: Result<Json<ChatBody>, JsonRejection>) -> Result<Json<ChatReply>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::invalid_data())?;
    if body.message.trim().is_empty() {
        return Err(ApiError::Validation("Mensagem é obrigatória".into()));
    }
    let response = reply(&body.message);
    tracing::debug!(chars = body.message.len(), "tutor replied");
    Ok(Json(ChatReply { response }))
}
