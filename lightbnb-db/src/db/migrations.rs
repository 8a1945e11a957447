//! Schema migrations for the LightBnB tables
//!
//! Idempotent: every statement is `IF NOT EXISTS`, so `run` is safe to call
//! on every startup. Non-key property columns carry defaults so the dynamic
//! INSERT can name only the fields a caller supplied.

use sqlx::PgPool;

use crate::error::DbResult;

/// Create all tables and indexes if they do not exist yet.
pub async fn run(pool: &PgPool) -> DbResult<()> {
    tracing::info!("Running LightBnB migrations...");

    // Email uniqueness is an application convention, not a constraint.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS properties (
            id BIGSERIAL PRIMARY KEY,
            owner_id BIGINT REFERENCES users(id) ON DELETE CASCADE,
            title TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            thumbnail_photo_url TEXT NOT NULL DEFAULT '',
            cover_photo_url TEXT NOT NULL DEFAULT '',
            cost_per_night BIGINT NOT NULL DEFAULT 0,
            street TEXT NOT NULL DEFAULT '',
            city TEXT NOT NULL DEFAULT '',
            province TEXT NOT NULL DEFAULT '',
            post_code TEXT NOT NULL DEFAULT '',
            country TEXT NOT NULL DEFAULT '',
            parking_spaces INTEGER NOT NULL DEFAULT 0,
            number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
            number_of_bedrooms INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            id BIGSERIAL PRIMARY KEY,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            property_id BIGINT NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
            guest_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS property_reviews (
            id BIGSERIAL PRIMARY KEY,
            guest_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            property_id BIGINT NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
            reservation_id BIGINT REFERENCES reservations(id) ON DELETE CASCADE,
            rating SMALLINT NOT NULL DEFAULT 0,
            message TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("LightBnB migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> DbResult<()> {
    // User lookup
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
        .execute(pool)
        .await?;

    // Property search
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_properties_owner ON properties(owner_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_properties_city ON properties(city)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_properties_cost ON properties(cost_per_night)")
        .execute(pool)
        .await?;

    // Guest reservation listing
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_reservations_guest ON reservations(guest_id)")
        .execute(pool)
        .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_reservations_start ON reservations(start_date)",
    )
    .execute(pool)
    .await?;

    // Rating aggregation
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_property_reviews_property ON property_reviews(property_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
