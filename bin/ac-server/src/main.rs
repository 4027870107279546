//! AnonConnect Server
//!
//! REST API for contact alias lifecycle and authentication:
//! - Auth APIs: register, login
//! - Keys APIs: generate, revoke, status
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AC_API_PORT` | `3000` | HTTP API port |
//! | `AC_MONGO_URL` | `mongodb://localhost:27017` | MongoDB connection URL |
//! | `AC_MONGO_DB` | `anonconnect` | MongoDB database name |
//! | `AC_JWT_SECRET` | - | HS256 signing secret (required) |
//! | `AC_JWT_ISSUER` | `anonconnect` | JWT issuer claim |
//! | `RUST_LOG` | `info` | Log level |

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{response::Json, routing::get, Router};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use ac_platform::{
    auth_router, keys_router, AliasService, AppState, AuthConfig, AuthLayer, AuthService,
    AuthState, KeysState, MongoAliasStore, PasswordService, UserRepository,
};

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> Result<()> {
    ac_common::logging::init_logging("ac-server");

    info!("Starting AnonConnect Server");

    // Configuration from environment
    let api_port: u16 = env_or_parse("AC_API_PORT", 3000);
    let mongo_url = env_or("AC_MONGO_URL", "mongodb://localhost:27017");
    let mongo_db = env_or("AC_MONGO_DB", "anonconnect");
    let jwt_issuer = env_or("AC_JWT_ISSUER", "anonconnect");
    let jwt_secret =
        std::env::var("AC_JWT_SECRET").context("AC_JWT_SECRET must be set")?;

    // Connect to MongoDB
    info!("Connecting to MongoDB: {}/{}", mongo_url, mongo_db);
    let mongo_client = mongodb::Client::with_uri_str(&mongo_url).await?;
    let db = mongo_client.database(&mongo_db);

    // Initialize repositories and the alias store
    let user_repo = Arc::new(UserRepository::new(&db));
    user_repo.ensure_indexes().await?;
    let alias_store = Arc::new(MongoAliasStore::new(&db));
    info!("Store initialized");

    // Initialize services
    let auth_config = AuthConfig {
        secret_key: jwt_secret,
        issuer: jwt_issuer,
        ..AuthConfig::default()
    };
    let auth_service = Arc::new(AuthService::new_with_secret(auth_config));
    let password_service = Arc::new(PasswordService::default());
    let alias_service = Arc::new(AliasService::new(alias_store));
    info!("Services initialized");

    // Create AppState for the Authenticated extractor
    let app_state = AppState {
        auth_service: auth_service.clone(),
    };

    // Build API states
    let auth_state = AuthState {
        auth_service,
        password_service,
        user_repo,
    };
    let keys_state = KeysState { alias_service };

    // Build API router with auto-collected OpenAPI paths
    let (router, mut openapi) = OpenApiRouter::new()
        .nest("/api/auth", auth_router(auth_state))
        .nest("/api/keys", keys_router(keys_state))
        .split_for_parts();

    openapi.info.title = "AnonConnect API".to_string();
    openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    openapi.info.description =
        Some("Opaque contact aliases: issue, revoke, and status lookup".to_string());

    let app = Router::new()
        .merge(router)
        .route("/health", get(health_handler))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", openapi))
        .layer(AuthLayer::new(app_state))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start API server
    let api_addr = format!("0.0.0.0:{}", api_port);
    info!("API server listening on http://{}", api_addr);
    info!("API docs available at http://{}/api-docs", api_addr);

    let api_listener = TcpListener::bind(&api_addr).await?;
    let api_task = tokio::spawn(async move {
        axum::serve(api_listener, app).await.unwrap();
    });

    info!("AnonConnect Server started");
    info!("Press Ctrl+C to shutdown");

    shutdown_signal().await;
    info!("Shutdown signal received...");

    api_task.abort();

    info!("AnonConnect Server shutdown complete");
    Ok(())
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "UP",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
