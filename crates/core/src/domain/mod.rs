// Domain Layer - Records and validation

pub mod error;
pub mod filter;
pub mod property;
pub mod reservation;
pub mod user;

// Re-exports
pub use error::DomainError;
pub use filter::{PropertyFilter, DEFAULT_SEARCH_LIMIT};
pub use property::{NewProperty, Property, PropertyId, PropertyListing, MINOR_UNITS_PER_MAJOR};
pub use reservation::{GuestReservation, NewReservation, Reservation, ReservationId};
pub use user::{NewUser, User, UserId};
