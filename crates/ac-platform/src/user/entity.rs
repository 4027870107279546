//! User Entity
//!
//! Registered account that can own contact aliases.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// UUID v4 as string
    #[serde(rename = "_id")]
    pub id: String,

    /// Login email (unique)
    pub email: String,

    /// Argon2id hash in PHC string format
    pub password_hash: String,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_unique_id() {
        let a = User::new("a@example.com", "$argon2id$fake");
        let b = User::new("b@example.com", "$argon2id$fake");
        assert_ne!(a.id, b.id);
        assert_eq!(a.email, "a@example.com");
    }
}
