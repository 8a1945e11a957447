//! Reservation repository
//!
//! Read-only in this layer: reservations are listed for a guest, never
//! created or changed here.

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool, Row};

use crate::error::DbResult;
use crate::models::Property;

/// Reservation joined with the reserved property.
#[derive(Debug, Clone)]
pub struct GuestReservation {
    pub reservation_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property: Property,
}

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a guest's reservations with the reserved property, earliest
    /// start date first. `limit` is honored as a bound parameter.
    pub async fn list_for_guest(
        &self,
        guest_id: i64,
        limit: i64,
    ) -> DbResult<Vec<GuestReservation>> {
        let rows = sqlx::query(
            r#"
            SELECT
                reservations.id AS reservation_id,
                reservations.start_date,
                reservations.end_date,
                properties.*
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            JOIN users ON reservations.guest_id = users.id
            WHERE users.id = $1
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(GuestReservation {
                    reservation_id: row.try_get("reservation_id")?,
                    start_date: row.try_get("start_date")?,
                    end_date: row.try_get("end_date")?,
                    property: Property::from_row(&row)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_guest_gets_an_empty_list() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");

        let repo = ReservationRepo::new(&pool);
        let reservations = repo
            .list_for_guest(i64::MAX, 10)
            .await
            .expect("listing failed");

        assert!(reservations.is_empty());
    }
}
