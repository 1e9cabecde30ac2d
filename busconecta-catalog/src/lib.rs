pub mod search;
pub mod seatmap;
pub mod trip;

pub use search::{search, SearchResults};
pub use seatmap::SeatRow;
pub use trip::{departures, Trip};
