//! Contact Keys API
//!
//! REST endpoints for the alias lifecycle.
//! - POST /api/keys/generate - Issue a new alias (authenticated)
//! - DELETE /api/keys/revoke - Revoke an owned alias (authenticated)
//! - GET /api/keys/status/{alias} - Public liveness lookup

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::alias::service::AliasService;
use crate::shared::error::PlatformError;
use crate::shared::middleware::Authenticated;

/// Generate alias request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// What the alias will be used for
    #[serde(default)]
    pub purpose: String,
}

/// Generated alias response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub message: String,
    /// The opaque alias value
    pub alias: String,
    pub purpose: String,
    /// QR rendering of the alias URI as a PNG data URI
    pub qr_image: String,
}

/// Revoke alias request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevokeRequest {
    /// The alias to revoke
    #[serde(default)]
    pub alias: String,
}

/// Revoke alias response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevokeResponse {
    pub message: String,
    pub revoked_alias: String,
}

/// Alias status response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub alias: String,
    pub purpose: String,
    pub is_active: bool,
}

/// Keys service state
#[derive(Clone)]
pub struct KeysState {
    pub alias_service: Arc<AliasService>,
}

/// Issue a new contact alias for the authenticated user
#[utoipa::path(
    post,
    path = "/generate",
    tag = "keys",
    request_body = GenerateRequest,
    responses(
        (status = 201, description = "Alias generated", body = GenerateResponse),
        (status = 400, description = "Missing purpose"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn generate_alias(
    State(state): State<KeysState>,
    auth: Authenticated,
    Json(req): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<GenerateResponse>), PlatformError> {
    if req.purpose.trim().is_empty() {
        return Err(PlatformError::validation("The key purpose is required"));
    }

    let issued = state
        .alias_service
        .issue(&auth.principal_id, &req.purpose)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(GenerateResponse {
            message: "Contact key generated successfully".to_string(),
            alias: issued.alias,
            purpose: issued.purpose,
            qr_image: issued.transport_image,
        }),
    ))
}

/// Revoke an alias owned by the authenticated user
///
/// The 404 is deliberately uniform: a missing alias, an alias owned by
/// someone else, and an already-revoked alias all produce the same
/// response, so callers cannot enumerate foreign aliases.
#[utoipa::path(
    delete,
    path = "/revoke",
    tag = "keys",
    request_body = RevokeRequest,
    responses(
        (status = 200, description = "Alias revoked", body = RevokeResponse),
        (status = 400, description = "Missing alias"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Not found, already revoked, or not owned")
    ),
    security(("bearer_auth" = []))
)]
pub async fn revoke_alias(
    State(state): State<KeysState>,
    auth: Authenticated,
    Json(req): Json<RevokeRequest>,
) -> Result<Json<RevokeResponse>, PlatformError> {
    if req.alias.trim().is_empty() {
        return Err(PlatformError::validation("An alias is required to revoke"));
    }

    let affected = state
        .alias_service
        .revoke(&auth.principal_id, &req.alias)
        .await?;

    if affected == 0 {
        return Err(PlatformError::not_found("Alias", &req.alias));
    }

    Ok(Json(RevokeResponse {
        message: "Contact key revoked successfully".to_string(),
        revoked_alias: req.alias,
    }))
}

/// Query the status of an alias (public, no authentication)
#[utoipa::path(
    get,
    path = "/status/{alias}",
    tag = "keys",
    params(
        ("alias" = String, Path, description = "Alias to look up")
    ),
    responses(
        (status = 200, description = "Alias status", body = StatusResponse),
        (status = 404, description = "Alias not found")
    )
)]
pub async fn alias_status(
    State(state): State<KeysState>,
    Path(alias): Path<String>,
) -> Result<Json<StatusResponse>, PlatformError> {
    let status = state
        .alias_service
        .status(&alias)
        .await?
        .ok_or_else(|| PlatformError::not_found("Alias", &alias))?;

    Ok(Json(StatusResponse {
        alias: status.alias,
        purpose: status.purpose,
        is_active: status.active,
    }))
}

/// Build the keys router
pub fn keys_router(state: KeysState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(generate_alias))
        .routes(routes!(revoke_alias))
        .routes(routes!(alias_status))
        .with_state(state)
}
