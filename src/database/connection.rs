//! PostgreSQL connection handling

use anyhow::Result;
use sqlx::PgPool;

/// Create a connection pool, falling back to DATABASE_URL from the
/// environment when no URL is given.
pub async fn create_pool(database_url: Option<&str>) -> Result<PgPool> {
    let database_url = match database_url {
        Some(url) => url.to_string(),
        None => std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
    };

    let pool = PgPool::connect(&database_url).await?;

    Ok(pool)
}
