// Booking Service - Guest reservations

use crate::domain::{GuestReservation, NewReservation, Reservation, UserId, DEFAULT_SEARCH_LIMIT};
use crate::error::{AppError, Result};
use crate::port::ReservationRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct BookingService {
    reservations: Arc<dyn ReservationRepository>,
}

impl BookingService {
    pub fn new(reservations: Arc<dyn ReservationRepository>) -> Self {
        Self { reservations }
    }

    /// Reservations for `guest_id`, earliest first, at most `limit` (default 10)
    pub async fn list_for_guest(
        &self,
        guest_id: UserId,
        limit: Option<i64>,
    ) -> Result<Vec<GuestReservation>> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        if limit <= 0 {
            return Err(AppError::Validation(format!(
                "limit must be positive (got {})",
                limit
            )));
        }

        let reservations = self
            .reservations
            .find_for_guest(guest_id, limit)
            .await
            .inspect_err(|e| warn!(error = %e, guest_id, "Loading guest reservations failed"))?;
        debug!(
            guest_id,
            limit,
            count = reservations.len(),
            "Loaded guest reservations"
        );
        Ok(reservations)
    }

    /// Validate and store a reservation
    pub async fn book(&self, reservation: NewReservation) -> Result<Reservation> {
        reservation.validate()?;

        let stored = self
            .reservations
            .insert(&reservation)
            .await
            .inspect_err(|e| {
                warn!(
                    error = %e,
                    property_id = reservation.property_id,
                    guest_id = reservation.guest_id,
                    "Reservation insert failed"
                )
            })?;
        info!(
            reservation_id = stored.id,
            property_id = stored.property_id,
            guest_id = stored.guest_id,
            nights = reservation.nights(),
            "Reservation saved"
        );
        Ok(stored)
    }
}
