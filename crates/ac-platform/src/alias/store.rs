//! Alias Store Trait
//!
//! The persistence seam for alias records. The lifecycle service depends
//! only on this trait, never on a concrete database client, so a relational
//! engine, a key-value engine, or the in-memory store can back it.
//!
//! Atomicity contract:
//! - `insert` detects duplicates with a single storage-layer constraint
//!   check, never a prior read, so two concurrent issues that draw the same
//!   value cannot both succeed.
//! - `deactivate` is one conditional update; two concurrent revokes of the
//!   same active alias yield exactly one success and one no-op.

use async_trait::async_trait;

use crate::alias::entity::AliasRecord;
use crate::shared::error::Result;

#[async_trait]
pub trait AliasStore: Send + Sync {
    /// Persist a fresh record. Fails with `DuplicateAlias` if the alias
    /// already exists.
    async fn insert(&self, record: &AliasRecord) -> Result<()>;

    /// Atomically set `active=false` where alias, owner, and `active=true`
    /// all match. Returns the number of records affected (0 or 1).
    ///
    /// A 0 does not distinguish "no such alias" from "not the owner" from
    /// "already revoked"; that ambiguity is a deliberate anti-enumeration
    /// property and must be preserved by every implementation.
    async fn deactivate(&self, alias: &str, owner: &str) -> Result<u64>;

    /// Point lookup with no ownership filter; alias status is public.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<AliasRecord>>;
}
