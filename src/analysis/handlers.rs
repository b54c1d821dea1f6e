use axum::{extract::State, routing::post, Json, Router};
use tracing::instrument;

use crate::ai::{ChatMessage, CompletionRequest, ContentPart, ImageUrl};
use crate::analytics;
use crate::auth::AuthUser;
use crate::error::{success, ApiError, ApiSuccess};
use crate::state::AppState;
use crate::tasks;

use super::dto::{AnalysisResult, AnalyzeFoodRequest};
use super::prompts;

pub fn router() -> Router<AppState> {
    Router::new().route("/ai/analyze-food", post(analyze_food))
}

#[instrument(skip(state, body))]
pub async fn analyze_food(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<AnalyzeFoodRequest>,
) -> Result<Json<ApiSuccess<AnalysisResult>>, ApiError> {
    let image = body.image_base64.as_deref().filter(|s| !s.is_empty());
    let context = body.user_context.as_deref().filter(|s| !s.is_empty());

    let messages = match image {
        None => {
            let Some(context) = context else {
                return Err(ApiError::InvalidArgument(
                    "either image data or food description is required".into(),
                ));
            };
            vec![
                ChatMessage::system(prompts::text_system_prompt()),
                ChatMessage::user(prompts::text_user_prompt(context)),
            ]
        }
        Some(b64) => {
            let mime = body.mime_type.as_deref().unwrap_or("image/jpeg");
            vec![
                ChatMessage::system(prompts::image_system_prompt()),
                ChatMessage::user_parts(vec![
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:{mime};base64,{b64}"),
                            // trade image fidelity for latency
                            detail: "low",
                        },
                    },
                    ContentPart::Text {
                        text: prompts::image_user_prompt(context),
                    },
                ]),
            ]
        }
    };

    let reply = state
        .ai
        .complete(CompletionRequest {
            messages,
            max_tokens: 1000,
            temperature: 0.3,
        })
        .await
        .map_err(|e| ApiError::Internal(format!("failed to analyze food: {e}")))?;

    let value = crate::ai::extract::parse_model_json(&reply)
        .map_err(|e| ApiError::Internal(format!("failed to analyze food: {e}")))?;
    let mut result: AnalysisResult = serde_json::from_value(value)
        .map_err(|e| ApiError::Internal(format!("AI response failed validation: {e}")))?;
    result.fill_derived();
    result
        .validate()
        .map_err(|e| ApiError::Internal(format!("AI response failed validation: {e}")))?;

    let db = state.db.clone();
    tasks::spawn_best_effort("scan-counter", move || {
        let db = db.clone();
        async move { analytics::repo::increment_scans(&db, user_id).await }
    });

    Ok(success(result))
}
