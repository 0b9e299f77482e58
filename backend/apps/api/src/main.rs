//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use admin::admin_router_generic;
use auth::domain::repository::UserRepository;
use auth::{AuthConfig, PgUserStore, SqliteUserStore, auth_router_generic};
use axum::{
    Router, http,
    http::{Method, header},
};
use reports::{CatalogStore, PgCatalogStore, SqliteCatalogStore, catalog_router_generic};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,reports=info,admin=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let auth_config = Arc::new(AuthConfig::from_env());
    let cors = cors_layer();

    // The URL scheme selects the storage engine: a sqlite: URL runs the
    // file-backed local engine, anything else is treated as PostgreSQL.
    let app = if database_url.starts_with("sqlite") {
        let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        tracing::info!("Connected to SQLite database");

        let users = SqliteUserStore::new(pool.clone());
        users.ensure_schema().await?;
        let catalog = SqliteCatalogStore::new(pool);
        catalog.ensure_schema().await?;

        build_app(Arc::new(users), Arc::new(catalog), auth_config, cors)
    } else {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await?;

        tracing::info!("Connected to PostgreSQL database");

        let users = PgUserStore::new(pool.clone());
        users.ensure_schema().await?;
        let catalog = PgCatalogStore::new(pool);
        catalog.ensure_schema().await?;

        build_app(Arc::new(users), Arc::new(catalog), auth_config, cors)
    };

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8788);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Assemble the full route tree over a store pair.
fn build_app<R, S>(
    users: Arc<R>,
    catalog: Arc<S>,
    config: Arc<AuthConfig>,
    cors: CorsLayer,
) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
    S: CatalogStore,
{
    Router::new()
        .nest("/api/auth", auth_router_generic(users.clone(), config.clone()))
        .nest("/api/admin", admin_router_generic(users, config))
        .nest("/api", catalog_router_generic(catalog))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS configuration
fn cors_layer() -> CorsLayer {
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}
