use sqlx::PgPool;
use uuid::Uuid;

use super::UserProfile;

pub async fn fetch_profile(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<UserProfile>> {
    let profile = sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT display_name, age, height_cm, weight_kg, goal, activity_level,
               daily_calorie_target, daily_protein_target, daily_carbs_target,
               daily_fat_target, health_conditions, dietary_preferences
        FROM user_profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(profile)
}
