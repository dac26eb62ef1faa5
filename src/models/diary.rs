use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DiaryEntry {
    pub id: i64,
    pub user_id: i64,
    pub emotion: String,
    pub intensity: i32,
    pub situation: String,
    pub thoughts: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl DiaryEntry {
    pub fn new(
        user_id: i64,
        emotion: String,
        intensity: i32,
        situation: String,
        thoughts: String,
        body: String,
    ) -> Self {
        Self {
            id: 0,
            user_id,
            emotion,
            intensity,
            situation,
            thoughts,
            body,
            created_at: Utc::now(),
        }
    }
}
