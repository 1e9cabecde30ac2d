use serde::{Deserialize, Serialize};

/// A scheduled intercity departure offered by an agency. Times, prices and
/// durations are display strings; nothing downstream computes with them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trip {
    pub id: u32,
    pub agency: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub price: String,
    pub duration: String,
    pub boarding_location: String,
}

/// The fixed departure board. The catalog is a read-only collaborator:
/// nothing in the system ever writes to it.
pub fn departures() -> Vec<Trip> {
    vec![
        Trip {
            id: 1,
            agency: "Huambo Express".to_string(),
            origin: "Lubango".to_string(),
            destination: "Luanda".to_string(),
            departure_time: "07:00".to_string(),
            price: "15.000 Kz".to_string(),
            duration: "12h".to_string(),
            boarding_location: "Terminal Rodoviário do Lubango".to_string(),
        },
        Trip {
            id: 2,
            agency: "Macom".to_string(),
            origin: "Lubango".to_string(),
            destination: "Luanda".to_string(),
            departure_time: "09:30".to_string(),
            price: "16.500 Kz".to_string(),
            duration: "11h30".to_string(),
            boarding_location: "Terminal Central".to_string(),
        },
        Trip {
            id: 3,
            agency: "Rosalina Express".to_string(),
            origin: "Lubango".to_string(),
            destination: "Luanda".to_string(),
            departure_time: "18:00".to_string(),
            price: "14.000 Kz".to_string(),
            duration: "13h".to_string(),
            boarding_location: "Paragem Principal".to_string(),
        },
        Trip {
            id: 4,
            agency: "TCUL Express".to_string(),
            origin: "Lubango".to_string(),
            destination: "Luanda".to_string(),
            departure_time: "18:00".to_string(),
            price: "14.000 Kz".to_string(),
            duration: "13h".to_string(),
            boarding_location: "Paragem Principal".to_string(),
        },
        Trip {
            id: 5,
            agency: "OLga Chaves".to_string(),
            origin: "Lubango".to_string(),
            destination: "Luanda".to_string(),
            departure_time: "18:00".to_string(),
            price: "14.000 Kz".to_string(),
            duration: "13h".to_string(),
            boarding_location: "Paragem Principal".to_string(),
        },
    ]
}
