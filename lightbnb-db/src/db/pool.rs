//! Database connection pool management
//!
//! A single sqlx `PgPool` serves every repository. Acquisition and release
//! of individual connections is entirely the pool's responsibility; this
//! layer imposes no ordering or admission control of its own.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Open a PostgreSQL connection pool for the LightBnB database.
///
/// # Errors
///
/// Returns an error if the server cannot be reached or rejects the
/// credentials in `database_url`.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Open a pool with an explicit connection cap.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!("Database pool open (max {} connections)", max_connections);
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::UserRepo;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p lightbnb-db -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let result: (i64,) = sqlx::query_as("SELECT 1::int8")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_lookups_are_independent() {
        tracing_subscriber::fmt().with_test_writer().try_init().ok();

        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");

        // Interleaved lookups must neither block nor observe each other.
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let repo = UserRepo::new(&pool);
                    repo.get_by_email(&format!("nobody-{}@example.com", i))
                        .await
                        .expect("lookup failed")
                })
            })
            .collect();

        for handle in handles {
            let user = handle.await.expect("task panicked");
            assert!(user.is_none());
        }
    }
}
