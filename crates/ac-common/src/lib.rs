//! Shared infrastructure for AnonConnect services.

pub mod logging;
