use async_trait::async_trait;
use busconecta_booking::models::{Reservation, ReservationStatus};
use busconecta_booking::repository::{LedgerError, ReservationStore};
use busconecta_core::kv::{KeyValueStore, KvError, RESERVATIONS_KEY};
use std::sync::Arc;
use tracing::{info, warn};

/// Reservation ledger over the key-value collaborator: one JSON array
/// under `reservas`. Every mutation rewrites the whole array, so two
/// racing writers resolve as last-write-wins.
pub struct KvReservationLedger {
    kv: Arc<dyn KeyValueStore>,
}

impl KvReservationLedger {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    async fn load(&self) -> Result<Vec<Reservation>, KvError> {
        let Some(raw) = self.kv.get(RESERVATIONS_KEY).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(reservations) => Ok(reservations),
            Err(e) => {
                // A corrupt ledger reads as empty rather than failing the screen.
                warn!("reservation ledger unreadable, treating as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn persist(&self, reservations: &[Reservation]) -> Result<(), KvError> {
        self.kv
            .set(RESERVATIONS_KEY, &serde_json::to_string(reservations)?)
            .await
    }
}

#[async_trait]
impl ReservationStore for KvReservationLedger {
    async fn append(&self, reservation: &Reservation) -> Result<(), LedgerError> {
        let mut all = self.load().await?;
        all.insert(0, reservation.clone());
        self.persist(&all).await?;

        info!(
            "reservation {} appended to ledger ({} total)",
            reservation.id,
            all.len()
        );
        Ok(())
    }

    async fn list_for_user(&self, email: &str) -> Result<Vec<Reservation>, LedgerError> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|r| r.user_email.as_deref() == Some(email))
            .collect())
    }

    async fn set_status(&self, id: &str, status: ReservationStatus) -> Result<(), LedgerError> {
        let mut all = self.load().await?;
        for reservation in all.iter_mut().filter(|r| r.id == id) {
            reservation.status = status;
        }
        self.persist(&all).await?;
        Ok(())
    }

    async fn reschedule(&self, id: &str, date: &str, time: &str) -> Result<(), LedgerError> {
        if date.trim().is_empty() || time.trim().is_empty() {
            return Err(LedgerError::MissingFields);
        }

        let mut all = self.load().await?;
        for reservation in all.iter_mut().filter(|r| r.id == id) {
            reservation.status = ReservationStatus::Rescheduled;
            reservation.trip.date = Some(date.to_string());
            reservation.trip.time = Some(time.to_string());
        }
        self.persist(&all).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKv;
    use busconecta_booking::models::{Passenger, TripSnapshot};

    fn ledger() -> KvReservationLedger {
        KvReservationLedger::new(Arc::new(MemoryKv::new()))
    }

    fn reservation(owner: Option<&str>) -> Reservation {
        Reservation::new(
            owner.map(str::to_string),
            TripSnapshot::default(),
            vec![3, 7],
            vec![Passenger::default(), Passenger::default()],
        )
    }

    #[tokio::test]
    async fn test_newest_entry_lists_first() {
        let ledger = ledger();

        let mut first = reservation(Some("ana@x.com"));
        first.id = "1".to_string();
        let mut second = reservation(Some("ana@x.com"));
        second.id = "2".to_string();

        ledger.append(&first).await.unwrap();
        ledger.append(&second).await.unwrap();

        let mine = ledger.list_for_user("ana@x.com").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].id, "2");
        assert_eq!(mine[1].id, "1");
    }

    #[tokio::test]
    async fn test_listing_never_leaks_other_owners() {
        let ledger = ledger();
        ledger.append(&reservation(Some("ana@x.com"))).await.unwrap();
        ledger.append(&reservation(Some("rui@x.com"))).await.unwrap();
        ledger.append(&reservation(None)).await.unwrap();

        let mine = ledger.list_for_user("ana@x.com").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert!(mine
            .iter()
            .all(|r| r.user_email.as_deref() == Some("ana@x.com")));
    }

    #[tokio::test]
    async fn test_listing_is_idempotent() {
        let ledger = ledger();
        ledger.append(&reservation(Some("ana@x.com"))).await.unwrap();

        let first = ledger.list_for_user("ana@x.com").await.unwrap();
        let second = ledger.list_for_user("ana@x.com").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_set_status_on_unknown_id_changes_nothing() {
        let ledger = ledger();
        ledger.append(&reservation(Some("ana@x.com"))).await.unwrap();
        let before = ledger.list_for_user("ana@x.com").await.unwrap();

        ledger
            .set_status("no-such-id", ReservationStatus::Cancelled)
            .await
            .unwrap();

        let after = ledger.list_for_user("ana@x.com").await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_cancel_flips_only_the_matching_entry() {
        let ledger = ledger();
        let mut target = reservation(Some("ana@x.com"));
        target.id = "t".to_string();
        let mut other = reservation(Some("ana@x.com"));
        other.id = "o".to_string();
        ledger.append(&target).await.unwrap();
        ledger.append(&other).await.unwrap();

        ledger
            .set_status("t", ReservationStatus::Cancelled)
            .await
            .unwrap();

        let mine = ledger.list_for_user("ana@x.com").await.unwrap();
        let target = mine.iter().find(|r| r.id == "t").unwrap();
        let other = mine.iter().find(|r| r.id == "o").unwrap();
        assert_eq!(target.status, ReservationStatus::Cancelled);
        assert_eq!(other.status, ReservationStatus::Active);
    }

    #[tokio::test]
    async fn test_reschedule_overwrites_date_time_and_status() {
        let ledger = ledger();
        let mut entry = reservation(Some("ana@x.com"));
        entry.id = "r".to_string();
        ledger.append(&entry).await.unwrap();

        ledger.reschedule("r", "21/02/2026", "08:30").await.unwrap();

        let mine = ledger.list_for_user("ana@x.com").await.unwrap();
        assert_eq!(mine[0].status, ReservationStatus::Rescheduled);
        assert_eq!(mine[0].trip.date.as_deref(), Some("21/02/2026"));
        assert_eq!(mine[0].trip.time.as_deref(), Some("08:30"));
    }

    #[tokio::test]
    async fn test_reschedule_with_blank_fields_fails_before_reading() {
        let ledger = ledger();
        let mut entry = reservation(Some("ana@x.com"));
        entry.id = "r".to_string();
        ledger.append(&entry).await.unwrap();

        let err = ledger.reschedule("r", "  ", "08:30").await.unwrap_err();
        assert!(matches!(err, LedgerError::MissingFields));

        let mine = ledger.list_for_user("ana@x.com").await.unwrap();
        assert_eq!(mine[0].status, ReservationStatus::Active);
    }

    #[tokio::test]
    async fn test_corrupt_ledger_reads_as_empty() {
        let kv = Arc::new(MemoryKv::new());
        kv.set(RESERVATIONS_KEY, "][").await.unwrap();
        let ledger = KvReservationLedger::new(kv);

        assert!(ledger.list_for_user("ana@x.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_legacy_ledger_blob_is_readable() {
        let kv = Arc::new(MemoryKv::new());
        kv.set(
            RESERVATIONS_KEY,
            r#"[{"id":"1755950000000","userEmail":"ana@x.com","viagem":{"agencia":"Macom","origem":"Lubango","destino":"Luanda","data":"20/02/2026","hora":"09:30","preco":"16.500 Kz","duracao":"11h30","embarque":"Terminal Central"},"assentos":[12],"passageiros":[{"nome":"Ana","bilhete":"B-9"}],"status":"remarcada","criadaEm":"2026-08-20T09:00:00.000Z"}]"#,
        )
        .await
        .unwrap();
        let ledger = KvReservationLedger::new(kv);

        let mine = ledger.list_for_user("ana@x.com").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].status, ReservationStatus::Rescheduled);
        assert_eq!(mine[0].trip.agency.as_deref(), Some("Macom"));
    }
}
