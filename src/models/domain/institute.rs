use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tenant root. Owns rooms; authenticates via email + password to obtain
/// a session token. The password is only ever stored as a bcrypt hash.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Institute {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Institute {
    pub fn new(name: &str, email: &str, password_hash: &str, phone: &str) -> Self {
        Institute {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            phone: phone.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_institute_creation() {
        let institute = Institute::new("Acme", "a@acme.io", "$2b$12$hash", "1234567890");

        assert_eq!(institute.name, "Acme");
        assert_eq!(institute.email, "a@acme.io");
        assert_eq!(institute.phone, "1234567890");
        assert!(!institute.id.is_empty());
        assert!(institute.created_at.is_some());
    }

    #[test]
    fn test_institute_ids_are_unique() {
        let a = Institute::new("A", "a@a.io", "h", "1234567890");
        let b = Institute::new("B", "b@b.io", "h", "1234567890");
        assert_ne!(a.id, b.id);
    }
}
