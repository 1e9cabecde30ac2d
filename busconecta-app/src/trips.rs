use busconecta_booking::models::{Reservation, ReservationStatus};
use busconecta_booking::repository::ReservationStore;
use busconecta_core::account::SessionStore;

use crate::error::AppError;
use crate::state::AppState;

/// Reschedule form state. It is not consumed on failure, so the editing
/// panel stays open with whatever was typed.
#[derive(Debug, Clone, Default)]
pub struct RescheduleForm {
    pub reservation_id: String,
    pub new_date: String,
    pub new_time: String,
}

/// My-trips screen: reservations owned by the signed-in account, newest
/// first. Without a session there is nothing to show.
pub async fn my_trips(state: &AppState) -> Result<Vec<Reservation>, AppError> {
    let Some(email) = state.session.current().await? else {
        return Ok(Vec::new());
    };
    Ok(state.ledger.list_for_user(&email).await?)
}

/// Cancel a reservation. The screen disables its cancel affordance for
/// already-cancelled entries; the ledger mutation itself enforces nothing.
pub async fn cancel(state: &AppState, id: &str) -> Result<(), AppError> {
    state
        .ledger
        .set_status(id, ReservationStatus::Cancelled)
        .await?;
    Ok(())
}

/// Save the reschedule form: new date and time, status becomes rescheduled.
pub async fn reschedule(state: &AppState, form: &RescheduleForm) -> Result<(), AppError> {
    state
        .ledger
        .reschedule(&form.reservation_id, &form.new_date, &form.new_time)
        .await?;
    Ok(())
}
