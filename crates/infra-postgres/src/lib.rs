// LightBnB Infrastructure - PostgreSQL Adapter
// Implements: UserRepository, ReservationRepository, PropertyRepository

mod config;
mod connection;
mod error;
mod property_repository;
mod reservation_repository;
mod rows;
mod user_repository;

pub use config::DatabaseConfig;
pub use connection::create_pool;
pub use error::map_sqlx_error;
pub use property_repository::PgPropertyRepository;
pub use reservation_repository::PgReservationRepository;
pub use user_repository::PgUserRepository;

// Re-exported so composition roots do not need a direct sqlx dependency
pub use sqlx::PgPool;
