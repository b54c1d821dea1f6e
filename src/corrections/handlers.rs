use axum::{extract::State, routing::post, Json, Router};
use tracing::instrument;

use crate::auth::AuthUser;
use crate::error::{success, ApiError, ApiSuccess};
use crate::state::AppState;

use super::dto::{CorrectFoodAnalysisRequest, CorrectionPatch, CorrectionResponse};
use super::repo;

pub fn router() -> Router<AppState> {
    Router::new().route("/ai/corrections", post(correct_food_analysis))
}

#[instrument(skip(state, body))]
pub async fn correct_food_analysis(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CorrectFoodAnalysisRequest>,
) -> Result<Json<ApiSuccess<CorrectionResponse>>, ApiError> {
    let Some(correction) = body.correction.as_ref() else {
        return Err(ApiError::InvalidArgument("correction data is required".into()));
    };
    let internal = |e: anyhow::Error| ApiError::Internal(format!("failed to save correction: {e}"));

    // The audit row keeps the submitted payload verbatim.
    repo::insert_correction(
        &state.db,
        user_id,
        body.food_log_id,
        body.original_analysis.as_ref(),
        correction,
    )
    .await
    .map_err(internal)?;

    if let Some(food_log_id) = body.food_log_id {
        let patch = CorrectionPatch::from_correction(correction);
        repo::patch_food_log(&state.db, user_id, food_log_id, &patch)
            .await
            .map_err(internal)?;
    }

    Ok(success(CorrectionResponse {
        message: "Correction saved successfully".into(),
    }))
}
