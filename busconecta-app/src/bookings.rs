use busconecta_booking::flow::BookingFlow;
use busconecta_booking::models::{Reservation, TripSnapshot};
use busconecta_booking::repository::ReservationStore;
use busconecta_core::account::SessionStore;
use busconecta_catalog::seatmap::{self, SeatRow};
use busconecta_catalog::Trip;
use busconecta_core::payment::{PaymentProvider, PaymentRequest};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Start a booking session for a trip picked on the results screen.
pub fn start_booking(trip: &Trip, travel_date: &str) -> BookingFlow {
    BookingFlow::new(TripSnapshot::capture(trip, travel_date))
}

/// Seat layout for the selection screen.
pub fn seat_rows() -> Vec<SeatRow> {
    seatmap::rows()
}

/// Confirm payment and persist the reservation. The provider delay is the
/// only latency in the system; it is awaited, never cancelled. The owner
/// is whoever the session names once the provider confirms.
pub async fn pay(state: &AppState, flow: &mut BookingFlow) -> Result<Reservation, AppError> {
    flow.begin_payment()?;

    let request = PaymentRequest::new(
        flow.payment_method(),
        flow.trip().price.clone().unwrap_or_default(),
    );
    if let Err(err) = state.payments.process(&request).await {
        flow.abort_payment();
        return Err(err.into());
    }

    let owner = state
        .session
        .current()
        .await
        .map_err(|e| AppError::PersistAfterPayment(e.into()))?;

    let reservation = flow.build_reservation(owner)?;
    if let Err(err) = state.ledger.append(&reservation).await {
        // The charge already went through; the session still ends as paid.
        let _ = flow.mark_paid();
        return Err(AppError::PersistAfterPayment(err));
    }

    flow.mark_paid()?;
    info!("reservation {} paid and stored", reservation.id);
    Ok(reservation)
}
