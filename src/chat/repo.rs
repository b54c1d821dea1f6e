use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

/// Appends one user/assistant exchange to a session and touches its
/// timestamp. One transaction, so the pair lands in order or not at all.
pub async fn append_exchange(
    db: &PgPool,
    user_id: Uuid,
    session_id: &str,
    user_message: &str,
    assistant_message: &str,
) -> anyhow::Result<()> {
    let mut tx = db.begin().await.context("begin tx")?;

    sqlx::query(
        r#"
        INSERT INTO chat_sessions (user_id, id, updated_at)
        VALUES ($1, $2, now())
        ON CONFLICT (user_id, id) DO UPDATE SET updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(session_id)
    .execute(&mut *tx)
    .await?;

    for (role, content) in [("user", user_message), ("assistant", assistant_message)] {
        sqlx::query(
            r#"
            INSERT INTO chat_messages (user_id, session_id, role, content)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user_id)
        .bind(session_id)
        .bind(role)
        .bind(content)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await.context("commit tx")?;
    Ok(())
}
