use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Search form filled on the dashboard. Dates are free-text, exactly as
/// typed (e.g. "20/02/2026"); the catalog never parses them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: Option<String>,
    pub round_trip: bool,
}

impl TripQuery {
    pub fn one_way(origin: &str, destination: &str, departure_date: &str) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date: departure_date.to_string(),
            return_date: None,
            round_trip: false,
        }
    }

    /// Origin, destination and departure date are mandatory before the
    /// catalog is consulted.
    pub fn validate(&self) -> CoreResult<()> {
        if self.origin.trim().is_empty()
            || self.destination.trim().is_empty()
            || self.departure_date.trim().is_empty()
        {
            return Err(CoreError::ValidationError(
                "Fill in origin, destination and departure date.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_query_passes() {
        let query = TripQuery::one_way("Lubango", "Luanda", "20/02/2026");
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_blank_destination_rejected() {
        let query = TripQuery::one_way("Lubango", "  ", "20/02/2026");
        assert!(matches!(
            query.validate(),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_date_rejected() {
        let query = TripQuery::one_way("Lubango", "Luanda", "");
        assert!(query.validate().is_err());
    }
}
