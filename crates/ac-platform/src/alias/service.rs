//! Alias Lifecycle Service
//!
//! Orchestrates alias issue, revocation, and status lookup over an
//! `AliasStore`. The service is stateless between calls; all shared mutable
//! state lives in the store. Per alias the state machine is
//! `ACTIVE --revoke(by owner)--> REVOKED`, with no other transitions.

use std::sync::Arc;
use tracing::{info, warn};

use crate::alias::entity::AliasRecord;
use crate::alias::store::AliasStore;
use crate::alias::{generator, transport};
use crate::shared::error::{PlatformError, Result};

/// Payload returned to the caller on a successful issue.
///
/// The owner is deliberately absent; the caller already knows who they are.
#[derive(Debug, Clone)]
pub struct IssuedAlias {
    pub alias: String,
    pub purpose: String,
    pub transport_image: String,
}

/// Public view of an alias for status queries.
#[derive(Debug, Clone)]
pub struct AliasStatus {
    pub alias: String,
    pub purpose: String,
    pub active: bool,
}

pub struct AliasService {
    store: Arc<dyn AliasStore>,
}

impl AliasService {
    pub fn new(store: Arc<dyn AliasStore>) -> Self {
        Self { store }
    }

    /// Issue a fresh alias for `owner`.
    ///
    /// A duplicate from the store is retried once with a newly generated
    /// alias; a second collision under 256-bit entropy means the random
    /// source is broken, and is surfaced as a systemic failure rather than
    /// retried further.
    pub async fn issue(&self, owner: &str, purpose: &str) -> Result<IssuedAlias> {
        // The API boundary rejects empty purposes; re-check defensively.
        let purpose = purpose.trim();
        if purpose.is_empty() {
            return Err(PlatformError::validation("Purpose must not be empty"));
        }

        for _ in 0..2 {
            let alias = generator::new_alias()?;
            let transport_image = transport::encode(&alias)?;
            let record = AliasRecord::new(&alias, owner, purpose, &transport_image);

            match self.store.insert(&record).await {
                Ok(()) => {
                    info!(alias = %alias, "Alias issued");
                    return Ok(IssuedAlias {
                        alias,
                        purpose: purpose.to_string(),
                        transport_image,
                    });
                }
                Err(PlatformError::DuplicateAlias) => {
                    warn!(alias = %alias, "Alias collision on insert, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(PlatformError::internal(
            "Alias collision persisted after regeneration",
        ))
    }

    /// Revoke an alias on behalf of `owner`.
    ///
    /// Returns the store's affected count verbatim: 1 on success, 0 when
    /// nothing matched. A 0 is a normal outcome, not an error, and does not
    /// reveal which of the three conditions failed.
    pub async fn revoke(&self, owner: &str, alias: &str) -> Result<u64> {
        let affected = self.store.deactivate(alias, owner).await?;
        if affected == 1 {
            info!(alias = %alias, "Alias revoked");
        }
        Ok(affected)
    }

    /// Public status lookup; no ownership check by design, so a holder of
    /// the alias string can confirm liveness before using it.
    pub async fn status(&self, alias: &str) -> Result<Option<AliasStatus>> {
        Ok(self.store.find_by_alias(alias).await?.map(|r| AliasStatus {
            alias: r.alias,
            purpose: r.purpose,
            active: r.active,
        }))
    }
}
