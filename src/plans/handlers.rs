use axum::{extract::State, routing::post, Json, Router};
use serde_json::Value;
use tracing::instrument;

use crate::ai::{ChatMessage, CompletionRequest};
use crate::auth::AuthUser;
use crate::error::{success, ApiError, ApiSuccess};
use crate::state::AppState;

use super::dto::GenerateMealPlanRequest;
use super::{prompts, repo};

pub fn router() -> Router<AppState> {
    Router::new().route("/ai/meal-plans", post(generate_meal_plan))
}

#[instrument(skip(state, body))]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<GenerateMealPlanRequest>,
) -> Result<Json<ApiSuccess<Value>>, ApiError> {
    let internal = |e: anyhow::Error| ApiError::Internal(format!("failed to generate meal plan: {e}"));

    let reply = state
        .ai
        .complete(CompletionRequest {
            messages: vec![
                ChatMessage::system(prompts::system_prompt(body.days_count)),
                ChatMessage::user(prompts::user_prompt(&body)),
            ],
            max_tokens: 4000,
            temperature: 0.7,
        })
        .await
        .map_err(internal)?;

    let mut plan = crate::ai::extract::parse_model_json(&reply).map_err(internal)?;

    // Persistence is part of the contract here; a failed write fails the call.
    let id = repo::insert_plan(&state.db, user_id, &plan, &body)
        .await
        .map_err(internal)?;
    if let Some(obj) = plan.as_object_mut() {
        obj.insert("id".into(), Value::String(id.to_string()));
    }

    Ok(success(plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn unparseable_reply_is_internal_before_any_write() {
        let state = AppState::fake_with_reply("no plan for you");
        let err = generate_meal_plan(
            State(state),
            AuthUser(Uuid::new_v4()),
            Json(GenerateMealPlanRequest::default()),
        )
        .await
        .map(|_| ())
        .unwrap_err();
        assert_eq!(err.kind(), "internal");
        assert!(err.to_string().contains("could not parse AI response"));
    }

    #[tokio::test]
    async fn empty_reply_is_internal() {
        let state = AppState::fake_with_reply("");
        let err = generate_meal_plan(
            State(state),
            AuthUser(Uuid::new_v4()),
            Json(GenerateMealPlanRequest::default()),
        )
        .await
        .map(|_| ())
        .unwrap_err();
        assert!(err.to_string().contains("no response from AI"));
    }
}
