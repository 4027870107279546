//! MongoDB Alias Store
//!
//! Production implementation of `AliasStore`. The alias is the document
//! `_id`, so uniqueness is enforced by the collection's primary index and a
//! colliding insert surfaces as a duplicate-key write error. Revocation is a
//! single `update_one` with the full ownership filter, which MongoDB applies
//! atomically per document.

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use tracing::debug;

use crate::alias::entity::AliasRecord;
use crate::alias::store::AliasStore;
use crate::shared::error::{is_duplicate_key, PlatformError, Result};

const COLLECTION: &str = "alias_records";

pub struct MongoAliasStore {
    collection: Collection<AliasRecord>,
}

impl MongoAliasStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl AliasStore for MongoAliasStore {
    async fn insert(&self, record: &AliasRecord) -> Result<()> {
        self.collection.insert_one(record).await.map_err(|e| {
            if is_duplicate_key(&e) {
                PlatformError::DuplicateAlias
            } else {
                PlatformError::Database(e)
            }
        })?;

        debug!(alias = %record.alias, "Alias record inserted");
        Ok(())
    }

    async fn deactivate(&self, alias: &str, owner: &str) -> Result<u64> {
        let now = mongodb::bson::DateTime::from_chrono(Utc::now());
        let result = self
            .collection
            .update_one(
                doc! { "_id": alias, "owner": owner, "active": true },
                doc! { "$set": { "active": false, "revokedAt": now } },
            )
            .await?;
        Ok(result.modified_count)
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<AliasRecord>> {
        Ok(self.collection.find_one(doc! { "_id": alias }).await?)
    }
}
