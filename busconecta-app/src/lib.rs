pub mod auth;
pub mod bookings;
pub mod error;
pub mod search;
pub mod state;
pub mod tickets;
pub mod trips;

pub use error::AppError;
pub use state::AppState;
