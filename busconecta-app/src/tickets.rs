use busconecta_booking::ticket::Ticket;

use crate::error::AppError;
use crate::state::AppState;
use crate::trips;

/// Tickets screen: one boarding ticket per reservation of the signed-in
/// account, shown newest first.
pub async fn my_tickets(state: &AppState) -> Result<Vec<Ticket>, AppError> {
    Ok(trips::my_trips(state)
        .await?
        .into_iter()
        .map(Ticket::for_reservation)
        .collect())
}
