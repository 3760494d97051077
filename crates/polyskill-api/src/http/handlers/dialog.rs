//! Dialog webhook handler.

use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use crate::http::error::AppError;
use crate::http::wire::{WebhookRequest, WebhookResponse};
use crate::state::AppState;

/// POST /webhook - Run one dialog turn.
///
/// The engine never fails a turn; collaborator errors become fallback
/// replies inside it. The only error path here is an unusable envelope.
pub async fn webhook(
    State(state): State<AppState>,
    Json(envelope): Json<WebhookRequest>,
) -> Result<Json<WebhookResponse>, AppError> {
    if envelope.session.session_id.is_empty() {
        return Err(AppError::Validation("empty session_id".to_string()));
    }

    let request_id = Uuid::now_v7();
    let session = envelope.session.clone();
    let version = envelope.version.clone();
    let utterance = envelope.into_utterance();

    tracing::debug!(
        %request_id,
        session = %utterance.session_id,
        new_session = utterance.is_new_session,
        tokens = utterance.tokens.len(),
        "dialog turn received"
    );

    let reply = state.engine.handle_turn(&utterance).await;
    Ok(Json(WebhookResponse::from_reply(reply, session, version)))
}
