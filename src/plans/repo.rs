use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use super::dto::GenerateMealPlanRequest;

/// Appends a generated plan owned by `user_id`, created active. Returns the
/// new record id.
pub async fn insert_plan(
    db: &PgPool,
    user_id: Uuid,
    plan: &Value,
    req: &GenerateMealPlanRequest,
) -> anyhow::Result<Uuid> {
    let (id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO meal_plans
            (user_id, plan, target_calories, target_protein, target_carbs, target_fat, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, TRUE)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(plan)
    .bind(req.target_calories)
    .bind(req.target_protein)
    .bind(req.target_carbs)
    .bind(req.target_fat)
    .fetch_one(db)
    .await?;
    Ok(id)
}
