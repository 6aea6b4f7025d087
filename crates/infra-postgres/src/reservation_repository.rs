// PostgreSQL ReservationRepository Implementation

use crate::error::map_sqlx_error;
use crate::rows::{GuestReservationRow, ReservationRow};
use async_trait::async_trait;
use lightbnb_core::domain::{GuestReservation, NewReservation, Reservation, UserId};
use lightbnb_core::error::Result;
use lightbnb_core::port::ReservationRepository;
use sqlx::PgPool;
use tracing::debug;

pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn find_for_guest(&self, guest_id: UserId, limit: i64) -> Result<Vec<GuestReservation>> {
        // Reservation columns are aliased: properties.* already has `id`
        let rows: Vec<GuestReservationRow> = sqlx::query_as(
            r#"
            SELECT
                properties.*,
                reservations.id AS reservation_id,
                reservations.start_date,
                reservations.end_date,
                reservations.guest_id,
                avg(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(guest_id, rows = rows.len(), "Fetched guest reservations");
        Ok(rows
            .into_iter()
            .map(GuestReservationRow::into_guest_reservation)
            .collect())
    }

    async fn insert(&self, reservation: &NewReservation) -> Result<Reservation> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            INSERT INTO reservations (start_date, end_date, property_id, guest_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(reservation.start_date)
        .bind(reservation.end_date)
        .bind(reservation.property_id)
        .bind(reservation.guest_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into_reservation())
    }
}
