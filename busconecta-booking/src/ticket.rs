use serde::Serialize;

use crate::models::Reservation;

/// Boarding ticket derived from a reservation. The token is rendered as a
/// QR code and shown at boarding.
#[derive(Debug, Clone, Serialize)]
pub struct Ticket {
    pub qr_token: String,
    pub reservation: Reservation,
}

impl Ticket {
    pub fn for_reservation(reservation: Reservation) -> Self {
        Self {
            qr_token: format!("TICKET-{}", reservation.id),
            reservation,
        }
    }
}
