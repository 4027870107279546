//! Alias aggregate: the contact alias lifecycle core.
//!
//! - `entity` - the durable alias record
//! - `generator` - CSPRNG-backed alias generation
//! - `transport` - QR rendering of the alias URI
//! - `store` - persistence trait, with MongoDB and in-memory backends
//! - `service` - issue / revoke / status orchestration
//! - `api` - REST endpoints

pub mod api;
pub mod entity;
pub mod generator;
pub mod memory_store;
pub mod mongo_store;
pub mod service;
pub mod store;
pub mod transport;
