//! Server setup and initialization
//!
//! Provides the main application builder and server runner. All shared
//! handles are constructed here once and passed down as an explicit
//! context; nothing lives in module-level state.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use wall_cache::{Publisher, RedisPool, RedisPoolConfig};
use wall_common::{AppConfig, AppError, IdentityService};
use wall_core::SnowflakeGenerator;
use wall_db::{create_pool, PgLikeRepository, PgMessageRepository, PgSettingsRepository};
use wall_service::{SentimentClassifier, ServiceContextBuilder};

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors = state.config().cors.clone();
    let is_production = state.config().app.env.is_production();

    let router = create_router().merge(health_routes());
    let router = apply_middleware(router, &cors, is_production);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = wall_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_config = RedisPoolConfig::from(&config.redis);
    let redis_pool = RedisPool::new(redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
    let publisher = Publisher::new(redis_pool);
    info!("Redis connection established");

    // Create shared services
    let identity_service = Arc::new(IdentityService::new(
        &config.identity.secret,
        config.identity.token_expiry,
    ));
    let classifier = Arc::new(SentimentClassifier::new(config.classifier.clone()));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let message_repo = Arc::new(PgMessageRepository::new(pool.clone()));
    let like_repo = Arc::new(PgLikeRepository::new(pool.clone()));
    let settings_repo = Arc::new(PgSettingsRepository::new(pool));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .message_repo(message_repo)
        .like_repo(like_repo)
        .settings_repo(settings_repo)
        .publisher(publisher)
        .identity_service(identity_service)
        .classifier(classifier)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
