use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::FoodLogRow;

pub async fn list_logs_between(
    db: &PgPool,
    user_id: Uuid,
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> anyhow::Result<Vec<FoodLogRow>> {
    let rows = sqlx::query_as::<_, FoodLogRow>(
        r#"
        SELECT id, food_name, serving_size, calories, protein, carbohydrates,
               fat, fiber, sugar, sodium, was_user_corrected, logged_at
        FROM food_logs
        WHERE user_id = $1 AND logged_at >= $2 AND logged_at <= $3
        ORDER BY logged_at ASC
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await?;
    Ok(rows)
}
