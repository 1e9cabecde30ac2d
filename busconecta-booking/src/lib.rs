pub mod flow;
pub mod models;
pub mod repository;
pub mod ticket;

pub use flow::{BookingFlow, FlowError, FlowState};
pub use models::{Passenger, Reservation, ReservationStatus, TripSnapshot};
pub use repository::{LedgerError, ReservationStore};
pub use ticket::Ticket;
