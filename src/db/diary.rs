use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

/// Number of entries returned by `fetch_latest` when no limit is requested.
pub const DEFAULT_PAGE_SIZE: i64 = 30;

pub async fn insert(pool: &PgPool, entry: models::DiaryEntry) -> Result<models::DiaryEntry, String> {
    let query_span = tracing::info_span!("Saving new diary entry into the database");
    sqlx::query_as::<_, models::DiaryEntry>(
        r#"
        INSERT INTO diary_entries (user_id, emotion, intensity, situation, thoughts, body, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, user_id, emotion, intensity, situation, thoughts, body, created_at
        "#,
    )
    .bind(entry.user_id)
    .bind(entry.emotion)
    .bind(entry.intensity)
    .bind(entry.situation)
    .bind(entry.thoughts)
    .bind(entry.body)
    .bind(entry.created_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert diary entry: {:?}", err);
        "Failed to insert".to_string()
    })
}

/// Latest entries of `user_id`, newest first.
pub async fn fetch_latest(
    pool: &PgPool,
    user_id: i64,
    limit: i64,
) -> Result<Vec<models::DiaryEntry>, String> {
    let query_span = tracing::info_span!("Fetching latest diary entries", user_id);
    sqlx::query_as::<_, models::DiaryEntry>(
        r#"
        SELECT id, user_id, emotion, intensity, situation, thoughts, body, created_at
        FROM diary_entries
        WHERE user_id = $1
        ORDER BY created_at DESC, id DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch diary entries: {:?}", err);
        "Database error".to_string()
    })
}
