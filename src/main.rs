mod config;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Fleet Management API");
    info!("=======================");

    let config = EnvironmentConfig::default();

    let pool = match database::connection::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error connecting to the database: {}", e);
            return Err(anyhow::anyhow!("Database error: {}", e));
        }
    };

    sqlx::migrate!("./migrations").run(&pool).await?;

    if let Err(e) = database::seed::seed_auth_data(&pool).await {
        error!("❌ Error seeding auth data: {}", e);
        return Err(anyhow::anyhow!("Seed error: {}", e));
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app = build_router(AppState::new(pool, config));

    info!("🌐 Server starting on http://{}", addr);
    info!("🔍 Available endpoints:");
    info!("   GET    /health - Health check");
    info!("🔐 Auth:");
    info!("   POST   /api/v1/auth/login - Login, returns a JWT");
    info!("🚛 Trucks (JWT required):");
    info!("   GET    /api/v1/trucks - List all trucks");
    info!("   GET    /api/v1/trucks/paginated - Paginated listing (page, size, sort)");
    info!("   GET    /api/v1/trucks/:id - Get truck by id");
    info!("   POST   /api/v1/trucks - Create truck");
    info!("   PUT    /api/v1/trucks/:id - Update truck");
    info!("   DELETE /api/v1/trucks/:id - Delete truck");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let cors = if state.config.is_development() || state.config.cors_origins.is_empty() {
        middleware::cors::cors_middleware()
    } else {
        middleware::cors::cors_middleware_with_origins(&state.config.cors_origins)
    };

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1/auth", routes::auth_routes::create_auth_router())
        .nest(
            "/api/v1/trucks",
            routes::truck_routes::create_truck_router().route_layer(
                axum::middleware::from_fn_with_state(
                    state.clone(),
                    middleware::auth::auth_middleware,
                ),
            ),
        )
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-management",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Graceful shutdown on Ctrl+C or SIGTERM
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
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
