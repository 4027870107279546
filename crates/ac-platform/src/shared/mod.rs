//! Shared infrastructure: errors, API helpers, middleware.

pub mod api_common;
pub mod error;
pub mod middleware;
