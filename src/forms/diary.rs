use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DiaryForm {
    /// Name of the feeling, e.g. "anxiety"
    #[validate(min_length = 1)]
    #[validate(max_length = 64)]
    pub emotion: String,
    /// Self-assessed strength of the feeling on a 0..=10 scale
    #[validate(minimum = 0)]
    #[validate(maximum = 10)]
    pub intensity: i32,
    #[serde(default)]
    #[validate(max_length = 4000)]
    pub situation: String,
    #[serde(default)]
    #[validate(max_length = 4000)]
    pub thoughts: String,
    /// Bodily sensations
    #[serde(default)]
    #[validate(max_length = 4000)]
    pub body: String,
}

/// Answer of `GET /diary`.
#[derive(Debug, Serialize)]
pub struct DiaryPage {
    pub items: Vec<models::DiaryEntry>,
}

/// Answer of `POST /diary`.
#[derive(Debug, Serialize)]
pub struct DiarySaved {
    pub ok: bool,
    pub id: i64,
}

impl DiaryForm {
    pub fn into_entry(self, user_id: i64) -> models::DiaryEntry {
        models::DiaryEntry::new(
            user_id,
            self.emotion.trim().to_string(),
            self.intensity,
            self.situation,
            self.thoughts,
            self.body,
        )
    }
}
