use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use super::dto::CorrectionPatch;

/// Appends the audit record; status starts at 'pending' and is advanced by
/// an external review process.
pub async fn insert_correction(
    db: &PgPool,
    user_id: Uuid,
    food_log_id: Option<Uuid>,
    original_analysis: Option<&Value>,
    correction: &Value,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO ai_corrections (user_id, food_log_id, original_analysis, correction, status)
        VALUES ($1, $2, $3, $4, 'pending')
        "#,
    )
    .bind(user_id)
    .bind(food_log_id)
    .bind(original_analysis)
    .bind(correction)
    .execute(db)
    .await?;
    Ok(())
}

/// Overlays the allow-listed fields onto the caller's own log and marks it
/// corrected.
pub async fn patch_food_log(
    db: &PgPool,
    user_id: Uuid,
    food_log_id: Uuid,
    patch: &CorrectionPatch,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE food_logs SET
            food_name     = COALESCE($3, food_name),
            serving_size  = COALESCE($4, serving_size),
            calories      = COALESCE($5, calories),
            protein       = COALESCE($6, protein),
            carbohydrates = COALESCE($7, carbohydrates),
            fat           = COALESCE($8, fat),
            fiber         = COALESCE($9, fiber),
            sugar         = COALESCE($10, sugar),
            sodium        = COALESCE($11, sodium),
            was_user_corrected = TRUE,
            corrected_at  = now()
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(food_log_id)
    .bind(user_id)
    .bind(&patch.food_name)
    .bind(&patch.serving_size)
    .bind(patch.calories)
    .bind(patch.protein)
    .bind(patch.carbohydrates)
    .bind(patch.fat)
    .bind(patch.fiber)
    .bind(patch.sugar)
    .bind(patch.sodium)
    .execute(db)
    .await?;
    Ok(())
}
