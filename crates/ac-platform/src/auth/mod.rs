//! Authentication: password handling, token issuing, and the auth API.

pub mod auth_api;
pub mod auth_service;
pub mod password_service;
