use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Institute;

/// Role claim carried inside the token. A tagged variant, not a free-form
/// string: role comparisons downstream are exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Institute,
    Teacher,
    Student,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject: the owning institute id
    pub email: String,
    pub role: Role,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(institute: &Institute, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: institute.id.clone(),
            email: institute.email.clone(),
            role: Role::Institute,
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }

    /// Claims for a principal delegated within an institute (e.g. a
    /// teacher). The subject stays the institute id so ownership checks
    /// scope the delegate to its own tenant.
    pub fn delegated(institute_id: &str, email: &str, role: Role, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: institute_id.to_string(),
            email: email.to_string(),
            role,
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let institute = Institute::new("Acme", "a@acme.io", "$2b$12$hash", "1234567890");
        let claims = Claims::new(&institute, 24);

        assert_eq!(claims.sub, institute.id);
        assert_eq!(claims.email, "a@acme.io");
        assert_eq!(claims.role, Role::Institute);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_delegated_claims_keep_institute_scope() {
        let claims = Claims::delegated("inst-1", "teacher@acme.io", Role::Teacher, 24);

        assert_eq!(claims.sub, "inst-1");
        assert_eq!(claims.role, Role::Teacher);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Teacher).expect("role should serialize");
        assert_eq!(json, "\"teacher\"");
    }
}
