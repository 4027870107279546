//! Alias Record Entity
//!
//! The durable mapping between an opaque contact alias and its owner.
//! Records are never physically deleted; revocation flips `active` exactly
//! once, `true -> false`, and the record is retained for status queries.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact alias record.
///
/// The alias string doubles as the primary key, so the storage layer's
/// `_id` uniqueness constraint enforces alias uniqueness atomically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasRecord {
    /// Opaque alias, 64 lowercase hex chars (32 random bytes)
    #[serde(rename = "_id")]
    pub alias: String,

    /// Principal that created the record; immutable, never client-supplied
    pub owner: String,

    /// Free-text label supplied by the owner at creation
    pub purpose: String,

    /// Lifecycle flag; the only permitted transition is true -> false
    pub active: bool,

    /// QR rendering of `anonconnect://<alias>` as a PNG data URI,
    /// stored alongside to avoid recomputation
    pub transport_image: String,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,

    /// When the alias was revoked (if revoked)
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime_optional"
    )]
    pub revoked_at: Option<DateTime<Utc>>,
}

impl AliasRecord {
    /// Create a fresh, active record owned by `owner`.
    pub fn new(
        alias: impl Into<String>,
        owner: impl Into<String>,
        purpose: impl Into<String>,
        transport_image: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            owner: owner.into(),
            purpose: purpose.into(),
            active: true,
            transport_image: transport_image.into(),
            created_at: Utc::now(),
            revoked_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_starts_active() {
        let record = AliasRecord::new("abc123", "user-1", "demo", "data:image/png;base64,x");
        assert!(record.active);
        assert!(record.revoked_at.is_none());
        assert_eq!(record.owner, "user-1");
    }
}
