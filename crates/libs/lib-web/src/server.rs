//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! This module provides the main server setup function that creates the Axum router,
//! registers all routes, applies middleware, and starts the HTTP server.

// region: --- Imports
use axum::{
    extract::FromRef,
    http::{header, HeaderName, HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use lib_auth::TokenService;
use lib_core::{create_pool, run_migrations, AppError, Config, DbPool};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::handlers;
use crate::middleware::mw_req_stamp::{request_id_of, REQUEST_ID_HEADER};
use crate::middleware::{log_requests, require_auth, stamp_req};
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
    pub tokens: TokenService,
}

impl AppState {
    /// Build the state, deriving the token service from `config`.
    pub fn new(db: DbPool, config: Config) -> Self {
        let tokens = TokenService::new(&config.jwt_secret, config.jwt_expiration_hours);
        Self { db, config, tokens }
    }
}

impl FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
// endregion: --- AppState

// region: --- Server Setup
/// Initialize and start the HTTP server
///
/// # Errors
///
/// This function will return an error if:
/// - Database connection fails
/// - Database migrations fail
/// - Server binding fails
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .try_init()
        .is_err()
    {
        warn!("Tracing subscriber already installed, keeping it");
    }

    info!(" ASSET LEDGER BACKEND STARTING");
    info!(" Environment: {}", config.environment);
    info!(" Log level: {}", config.log_level);
    info!("Configuration: {:?}", config);

    info!("Connecting to database...");
    let pool = create_pool(&config.database_url).await?;

    info!(" Running database migrations...");
    run_migrations(&pool).await?;
    info!(" Migrations complete");

    let bind_address = config.bind_address();
    let app = create_router(AppState::new(pool, config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!(" SERVER READY: http://{}", bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the main application router with all routes
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]);

    info!("[ROUTE SETUP] Registering HTTP routes...");

    let public = Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login));

    let protected = Router::new()
        .route("/users", get(handlers::users::list_users))
        .route(
            "/users/{id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        .route(
            "/assets",
            get(handlers::assets::list_assets).post(handlers::assets::create_asset),
        )
        .route(
            "/assets/{id}",
            get(handlers::assets::get_asset)
                .put(handlers::assets::update_asset)
                .delete(handlers::assets::delete_asset),
        )
        .route(
            "/transactions",
            get(handlers::transactions::list_transactions)
                .post(handlers::transactions::create_transaction),
        )
        .route(
            "/transactions/{id}",
            get(handlers::transactions::get_transaction)
                .put(handlers::transactions::update_transaction)
                .delete(handlers::transactions::delete_transaction),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .nest("/api/v1", public.merge(protected))
        .route("/health", get(|| async { "OK" }))
        .fallback(|| async {
            info!("[404 HANDLER] Unmatched route - returning 404");
            AppError::NotFound("Route not found".to_string())
        })
        .with_state(state)
        // Layers run bottom-up: cors, stamp_req, trace span, log_requests, router
        .layer(from_fn(log_requests))
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id_of(request),
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(())
                .on_response(())
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::error!(
                            error = ?error,
                            latency_ms = latency.as_millis(),
                            "[HTTP FAILURE] Error: {:?}, Latency: {}ms",
                            error,
                            latency.as_millis()
                        );
                    },
                ),
        )
        .layer(from_fn(stamp_req))
        .layer(cors)
}

/// Log server information
fn log_server_info() {
    info!(" AUTH:");
    info!("   • POST /api/v1/auth/register");
    info!("   • POST /api/v1/auth/login");
    info!(" USERS (bearer token):");
    info!("   • GET  /api/v1/users");
    info!("   • GET|PUT|DELETE /api/v1/users/{{id}}");
    info!(" ASSETS (bearer token):");
    info!("   • GET|POST /api/v1/assets");
    info!("   • GET|PUT|DELETE /api/v1/assets/{{id}}");
    info!(" TRANSACTIONS (bearer token):");
    info!("   • GET|POST /api/v1/transactions");
    info!("   • GET|PUT|DELETE /api/v1/transactions/{{id}}");
    info!(" HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup
