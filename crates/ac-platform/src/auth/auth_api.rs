//! Auth API Endpoints
//!
//! Registration and login for alias owners.
//! - POST /api/auth/register - Create an account, returns a bearer token
//! - POST /api/auth/login - Password login, returns a bearer token

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::auth::auth_service::AuthService;
use crate::auth::password_service::PasswordService;
use crate::shared::error::PlatformError;
use crate::user::entity::User;
use crate::user::repository::UserRepository;

/// Registration / login request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// Token response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Signed bearer token
    pub token: String,
}

/// Auth service state
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: Arc<AuthService>,
    pub password_service: Arc<PasswordService>,
    pub user_repo: Arc<UserRepository>,
}

fn validate_credentials(req: &CredentialsRequest) -> Result<(), PlatformError> {
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(PlatformError::validation("A valid email address is required"));
    }
    if req.password.is_empty() {
        return Err(PlatformError::validation("Password is required"));
    }
    Ok(())
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "User registered", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AuthState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), PlatformError> {
    validate_credentials(&req)?;

    if state.user_repo.find_by_email(&req.email).await?.is_some() {
        return Err(PlatformError::duplicate("User", "email", &req.email));
    }

    let password_hash = state.password_service.hash_password(&req.password)?;
    let user = User::new(req.email.trim(), password_hash);
    state.user_repo.insert(&user).await?;

    info!(user_id = %user.id, "User registered");

    let token = state.auth_service.generate_access_token(&user.id)?;
    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, PlatformError> {
    validate_credentials(&req)?;

    // Unknown email and wrong password are indistinguishable to the caller.
    let user = state
        .user_repo
        .find_by_email(req.email.trim())
        .await?
        .ok_or(PlatformError::InvalidCredentials)?;

    if !state
        .password_service
        .verify_password(&req.password, &user.password_hash)?
    {
        return Err(PlatformError::InvalidCredentials);
    }

    info!(user_id = %user.id, "User logged in");

    let token = state.auth_service.generate_access_token(&user.id)?;
    Ok(Json(TokenResponse { token }))
}

/// Build the auth router
pub fn auth_router(state: AuthState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(register))
        .routes(routes!(login))
        .with_state(state)
}
