use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ChatForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 4000)]
    pub text: String,
    /// Guided scenario selected in the mini-app, if any
    #[validate(max_length = 200)]
    pub scenario: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}
