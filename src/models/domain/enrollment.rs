use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student's membership in a room, addressed by email.
/// `(room_id, email)` is unique; the same email may be enrolled in any
/// number of other rooms independently.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Enrollment {
    pub room_id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Enrollment {
    pub fn new(room_id: &str, email: &str) -> Self {
        Enrollment {
            room_id: room_id.to_string(),
            email: email.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrollment_creation() {
        let enrollment = Enrollment::new("room-1", "s@acme.io");

        assert_eq!(enrollment.room_id, "room-1");
        assert_eq!(enrollment.email, "s@acme.io");
        assert!(enrollment.created_at.is_some());
    }
}
