use async_trait::async_trait;
use busconecta_core::kv::KvError;

use crate::models::{Reservation, ReservationStatus};

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("a new date and a new time are both required")]
    MissingFields,

    #[error("ledger storage failure: {0}")]
    Storage(#[from] KvError),
}

/// Repository trait for the reservation ledger: the single shared
/// collection of every reservation across all accounts. Implementations
/// mutate by whole-collection read-modify-write, so concurrent writers
/// race with last-write-wins semantics.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Prepend, so the newest entry lists first.
    async fn append(&self, reservation: &Reservation) -> Result<(), LedgerError>;

    /// Reservations owned by `email`, in ledger order. Ownerless entries
    /// never match.
    async fn list_for_user(&self, email: &str) -> Result<Vec<Reservation>, LedgerError>;

    /// Replace the status of the matching entry; silently succeeds when
    /// `id` is unknown.
    async fn set_status(&self, id: &str, status: ReservationStatus) -> Result<(), LedgerError>;

    /// Mark the matching entry rescheduled and overwrite its travel date
    /// and time. Blank fields fail before the ledger is read.
    async fn reschedule(&self, id: &str, date: &str, time: &str) -> Result<(), LedgerError>;
}
