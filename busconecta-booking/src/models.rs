use busconecta_catalog::Trip;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Reservation lifecycle status, persisted under the legacy wire names so
/// an existing ledger round-trips unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReservationStatus {
    #[serde(rename = "ativa")]
    Active,
    #[serde(rename = "cancelada")]
    Cancelled,
    #[serde(rename = "remarcada")]
    Rescheduled,
}

/// Trip attributes copied by value at booking time. Later catalog changes
/// never propagate into a reservation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripSnapshot {
    #[serde(rename = "agencia", default)]
    pub agency: Option<String>,
    #[serde(rename = "origem", default)]
    pub origin: Option<String>,
    #[serde(rename = "destino", default)]
    pub destination: Option<String>,
    #[serde(rename = "data", default)]
    pub date: Option<String>,
    #[serde(rename = "hora", default)]
    pub time: Option<String>,
    #[serde(rename = "preco", default)]
    pub price: Option<String>,
    #[serde(rename = "duracao", default)]
    pub duration: Option<String>,
    #[serde(rename = "embarque", default)]
    pub boarding_location: Option<String>,
}

impl TripSnapshot {
    /// Capture a catalog trip for the travel date picked on the dashboard.
    pub fn capture(trip: &Trip, travel_date: &str) -> Self {
        Self {
            agency: Some(trip.agency.clone()),
            origin: Some(trip.origin.clone()),
            destination: Some(trip.destination.clone()),
            date: Some(travel_date.to_string()),
            time: Some(trip.departure_time.clone()),
            price: Some(trip.price.clone()),
            duration: Some(trip.duration.clone()),
            boarding_location: Some(trip.boarding_location.clone()),
        }
    }
}

/// One traveller on a reservation, paired with a seat by position only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Passenger {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "bilhete")]
    pub ticket_number: String,
}

/// One entry in the reservation ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reservation {
    pub id: String,
    #[serde(rename = "userEmail")]
    pub user_email: Option<String>,
    #[serde(rename = "viagem")]
    pub trip: TripSnapshot,
    #[serde(rename = "assentos")]
    pub seats: Vec<u8>,
    #[serde(rename = "passageiros")]
    pub passengers: Vec<Passenger>,
    pub status: ReservationStatus,
    #[serde(rename = "criadaEm")]
    pub created_at: String,
}

impl Reservation {
    /// Ids are the creation instant in milliseconds; two reservations
    /// created within the same millisecond collide.
    pub fn new(
        owner: Option<String>,
        trip: TripSnapshot,
        seats: Vec<u8>,
        passengers: Vec<Passenger>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            user_email: owner,
            trip,
            seats,
            passengers,
            status: ReservationStatus::Active,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
