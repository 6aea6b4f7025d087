// Reservation Repository Port (Interface)

use crate::domain::{GuestReservation, NewReservation, Reservation, UserId};
use crate::error::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Reservations for one guest, earliest start date first
    async fn find_for_guest(&self, guest_id: UserId, limit: i64) -> Result<Vec<GuestReservation>>;

    /// Insert a new reservation and return the stored row
    async fn insert(&self, reservation: &NewReservation) -> Result<Reservation>;
}
