// Port Layer - Interfaces for the relational store

pub mod property_repository;
pub mod reservation_repository;
pub mod user_repository;

// Re-exports
pub use property_repository::PropertyRepository;
pub use reservation_repository::ReservationRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use property_repository::MockPropertyRepository;
#[cfg(test)]
pub use reservation_repository::MockReservationRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
