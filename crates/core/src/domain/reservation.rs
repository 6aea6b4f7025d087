// Reservation Domain Model

use super::error::{DomainError, Result};
use super::property::{Property, PropertyId};
use super::user::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation ID (SERIAL primary key)
pub type ReservationId = i32;

/// Stored reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: PropertyId,
    pub guest_id: UserId,
}

/// Reservation as shown to its guest: the booking, the property and its rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestReservation {
    pub reservation: Reservation,
    pub property: Property,
    pub average_rating: f64,
}

/// Booking payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: PropertyId,
    pub guest_id: UserId,
}

impl NewReservation {
    pub fn validate(&self) -> Result<()> {
        if self.end_date <= self.start_date {
            return Err(DomainError::InvalidStay {
                start: self.start_date.to_string(),
                end: self.end_date.to_string(),
            });
        }
        Ok(())
    }

    /// Number of nights booked
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
