use sqlx::PgPool;
use uuid::Uuid;

// Increments are merge-upserts executed in one statement, so concurrent
// calls on the same counter cannot lose updates.

pub async fn increment_scans(db: &PgPool, user_id: Uuid) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO usage_counters (user_id, total_scans, last_scan_at)
        VALUES ($1, 1, now())
        ON CONFLICT (user_id) DO UPDATE
        SET total_scans = usage_counters.total_scans + 1,
            last_scan_at = now()
        "#,
    )
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn increment_chat_messages(db: &PgPool, user_id: Uuid) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO usage_counters (user_id, total_chat_messages, last_chat_at)
        VALUES ($1, 1, now())
        ON CONFLICT (user_id) DO UPDATE
        SET total_chat_messages = usage_counters.total_chat_messages + 1,
            last_chat_at = now()
        "#,
    )
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(())
}
