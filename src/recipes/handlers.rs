use axum::{extract::State, routing::post, Json, Router};
use serde_json::Value;
use tracing::instrument;

use crate::ai::{ChatMessage, CompletionRequest};
use crate::auth::AuthUser;
use crate::error::{success, ApiError, ApiSuccess};
use crate::state::AppState;

use super::dto::GenerateRecipeRequest;
use super::prompts;

pub fn router() -> Router<AppState> {
    Router::new().route("/ai/recipes", post(generate_recipe))
}

/// Purely compute-and-return; nothing is persisted for recipes.
#[instrument(skip(state, body))]
pub async fn generate_recipe(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    Json(body): Json<GenerateRecipeRequest>,
) -> Result<Json<ApiSuccess<Value>>, ApiError> {
    let internal = |e: anyhow::Error| ApiError::Internal(format!("failed to generate recipe: {e}"));

    let reply = state
        .ai
        .complete(CompletionRequest {
            messages: vec![
                ChatMessage::system(prompts::SYSTEM_PROMPT),
                ChatMessage::user(prompts::user_prompt(&body)),
            ],
            max_tokens: 2000,
            temperature: 0.7,
        })
        .await
        .map_err(internal)?;

    let recipe = crate::ai::extract::parse_model_json(&reply).map_err(internal)?;
    Ok(success(recipe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    async fn call(state: AppState, body: GenerateRecipeRequest) -> Result<Value, ApiError> {
        generate_recipe(State(state), AuthUser(Uuid::new_v4()), Json(body))
            .await
            .map(|Json(envelope)| envelope.data)
    }

    #[tokio::test]
    async fn returns_extracted_recipe_object() {
        let reply = r#"Of course! {"name": "Lentil Soup", "servings": 4, "nutritionPerServing": {"calories": 320}}"#;
        let state = AppState::fake_with_reply(reply);
        let recipe = call(state, GenerateRecipeRequest::default()).await.unwrap();
        assert_eq!(recipe["name"], "Lentil Soup");
        assert_eq!(recipe["nutritionPerServing"]["calories"], 320);
    }

    #[tokio::test]
    async fn unparseable_reply_is_internal() {
        let state = AppState::fake_with_reply("I'd rather not.");
        let err = call(state, GenerateRecipeRequest::default()).await.unwrap_err();
        assert_eq!(err.kind(), "internal");
        assert!(err.to_string().contains("could not parse AI response"));
    }
}
