use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A quiz/classroom container owned by exactly one institute.
/// `institute_id` is set on creation and never changes; rooms are not
/// transferred between institutes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub institute_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Room {
    pub fn new(name: &str, institute_id: &str) -> Self {
        Room {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            institute_id: institute_id.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}
