//! Gateway server setup
//!
//! Provides the main WebSocket server configuration and routes.

mod handler;
mod state;

pub use handler::gateway_handler;
pub use state::GatewayState;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use wall_cache::{Publisher, RedisPool, RedisPoolConfig};
use wall_common::{AppConfig, AppError, IdentityService};
use wall_core::SnowflakeGenerator;
use wall_db::{create_pool, PgLikeRepository, PgMessageRepository, PgSettingsRepository};
use wall_service::{SentimentClassifier, ServiceContextBuilder};

use crate::broadcast::{EventDispatcher, EventDispatcherConfig};
use crate::connection::ConnectionManager;

/// Create the gateway router
pub fn create_router() -> Router<GatewayState> {
    Router::new()
        .route("/gateway", get(gateway_handler))
        .route("/health", get(health_check))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Build the complete application
pub fn create_app(state: GatewayState) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialize all dependencies and create `GatewayState`
pub async fn create_gateway_state(config: AppConfig) -> Result<GatewayState, AppError> {
    // Create database pool
    tracing::info!("Connecting to PostgreSQL...");
    let db_config = wall_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    tracing::info!("PostgreSQL connection established");

    // Create Redis pool
    tracing::info!("Connecting to Redis...");
    let redis_config = RedisPoolConfig::from(&config.redis);
    let redis_pool = RedisPool::new(redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
    let publisher = Publisher::new(redis_pool);
    tracing::info!("Redis connection established");

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

    // Create connection manager
    let connection_manager = ConnectionManager::new_shared();

    // Create event dispatcher
    let dispatcher_config = EventDispatcherConfig {
        redis_url: config.redis.url.clone(),
        broadcast_buffer: 1024,
        reconnect_delay_ms: 1000,
    };

    let event_dispatcher = EventDispatcher::new(dispatcher_config, connection_manager.clone())
        .await
        .map_err(|e| AppError::Cache(format!("Failed to create event dispatcher: {e}")))?;

    let event_dispatcher = Arc::new(event_dispatcher);

    // Start the event dispatcher
    event_dispatcher.clone().start();

    Ok(GatewayState::new(
        service_context,
        connection_manager,
        event_dispatcher,
        config,
    ))
}

/// Run the gateway server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    tracing::info!("Starting Gateway server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    tracing::info!("Gateway listening on ws://{}/gateway", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete gateway server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.gateway.port));

    // Create gateway state
    let state = create_gateway_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
