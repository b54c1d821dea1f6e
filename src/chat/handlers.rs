use axum::{extract::State, routing::post, Json, Router};
use tracing::instrument;

use crate::ai::{ChatMessage, CompletionRequest};
use crate::analytics;
use crate::auth::AuthUser;
use crate::error::{success, ApiError, ApiSuccess};
use crate::profiles;
use crate::state::AppState;
use crate::tasks;

use super::dto::{ChatRequest, ChatResponse};
use super::{repo, services};

pub fn router() -> Router<AppState> {
    Router::new().route("/ai/chat", post(chat))
}

#[instrument(skip(state, body))]
pub async fn chat(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ApiSuccess<ChatResponse>>, ApiError> {
    let Some(message) = body.message.as_deref().filter(|m| !m.is_empty()) else {
        return Err(ApiError::InvalidArgument("message is required".into()));
    };
    let internal = |e: anyhow::Error| ApiError::Internal(format!("chat error: {e}"));

    // Inline snapshot wins; otherwise fall back to the stored profile.
    let profile = match body.user_profile {
        Some(p) => Some(p),
        None => profiles::repo::fetch_profile(&state.db, user_id)
            .await
            .map_err(internal)?,
    };

    let mut messages =
        vec![ChatMessage::system(services::system_prompt(profile.as_ref()))];
    for entry in services::truncate_history(&body.conversation_history) {
        messages.push(ChatMessage {
            role: entry.role,
            content: crate::ai::client::MessageContent::Text(entry.content.clone()),
        });
    }
    messages.push(ChatMessage::user(message));

    let reply = state
        .ai
        .complete(CompletionRequest {
            messages,
            max_tokens: 500,
            temperature: 0.7,
        })
        .await
        .map_err(internal)?;

    if let Some(session_id) = body.session_id.clone() {
        let db = state.db.clone();
        let user_message = message.to_string();
        let assistant_message = reply.clone();
        tasks::spawn_best_effort("session-append", move || {
            let db = db.clone();
            let session_id = session_id.clone();
            let user_message = user_message.clone();
            let assistant_message = assistant_message.clone();
            async move {
                repo::append_exchange(&db, user_id, &session_id, &user_message, &assistant_message)
                    .await
            }
        });
    }

    let db = state.db.clone();
    tasks::spawn_best_effort("chat-counter", move || {
        let db = db.clone();
        async move { analytics::repo::increment_chat_messages(&db, user_id).await }
    });

    Ok(success(ChatResponse { message: reply }))
}
