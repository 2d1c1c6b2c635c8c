#![recursion_limit = "256"]

mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::revenue::PgRevenueSource;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if let Some(tenant) = &config.dev_auth_tenant {
        tracing::warn!(%tenant, "DEV_AUTH_TENANT set; unauthenticated requests act as this tenant");
    }

    let revenue = Arc::new(PgRevenueSource::new(pool.clone()));
    let state = state::AppState::new(pool, revenue, config.revenue_cache_ttl, config.dev_auth_tenant.clone());

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "propdash listening");
    axum::serve(listener, app).await.expect("server failed");
}
