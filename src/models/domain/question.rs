use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub room_id: String,
    pub text: String,
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Closed enumeration: anything outside these variants is rejected at
/// deserialization time.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    SingleChoice,
    MultiChoice,
}

impl Question {
    pub fn new(
        room_id: &str,
        text: &str,
        question_type: QuestionType,
        options: Option<Vec<String>>,
        correct_answer: &str,
    ) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            room_id: room_id.to_string(),
            text: text.to_string(),
            question_type,
            options,
            correct_answer: correct_answer.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}
