// Application Layer - Use Cases over the repository ports

pub mod accounts;
pub mod booking;
pub mod deadline;
pub mod listing;

// Re-exports
pub use accounts::AccountService;
pub use booking::BookingService;
pub use deadline::within;
pub use listing::ListingService;
