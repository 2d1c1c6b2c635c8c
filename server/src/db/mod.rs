//! Postgres pool and embedded migrations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pool serves two consumers: session-token lookups in the auth extractor
//! and the revenue aggregate query. Migrations create the `sessions`,
//! `properties` and `reservations` tables and seed the demo tenants, and they
//! run before the listener binds.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Connect with at most `max_connections` and apply pending migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}
