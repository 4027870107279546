//! AnonConnect Platform
//!
//! Core platform providing:
//! - Opaque contact aliases that stand in for a user's real identity
//! - Ownership-gated, one-way alias revocation
//! - Public alias status lookup
//! - QR transport rendering of alias URIs
//! - User registration and login with bearer tokens
//!
//! ## Module Organization (Aggregate-based)
//!
//! Each aggregate contains:
//! - `entity` - Domain entities
//! - `repository` / `store` - Data access
//! - `service` - Orchestration logic
//! - `api` - REST endpoints

// Core aggregates
pub mod alias;
pub mod user;

// Authentication
pub mod auth;

// Shared infrastructure
pub mod shared;

// Re-export common types from shared
pub use shared::error::{PlatformError, Result};

// Re-export main entity types for convenience
pub use alias::entity::AliasRecord;
pub use user::entity::User;

// Re-export store seam and implementations
pub use alias::memory_store::InMemoryAliasStore;
pub use alias::mongo_store::MongoAliasStore;
pub use alias::store::AliasStore;

// Re-export services
pub use alias::service::{AliasService, AliasStatus, IssuedAlias};
pub use auth::auth_service::{AccessTokenClaims, AuthConfig, AuthService};
pub use auth::password_service::{Argon2Config, PasswordPolicy, PasswordService};

// Re-export repositories
pub use user::repository::UserRepository;

// Re-export API states and routers
pub use alias::api::{keys_router, KeysState};
pub use auth::auth_api::{auth_router, AuthState};
pub use shared::middleware::{AppState, AuthContext, AuthLayer, Authenticated};
