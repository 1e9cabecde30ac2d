use busconecta_core::search::TripQuery;
use serde::Serialize;

use crate::trip::{departures, Trip};

/// Departures answering a search, together with the query they answer so
/// the results header can echo it.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: TripQuery,
    pub trips: Vec<Trip>,
}

/// Consult the board. The whole board comes back regardless of the route
/// asked for; the query only feeds the results header.
pub fn search(query: TripQuery) -> SearchResults {
    SearchResults {
        trips: departures(),
        query,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_returns_whole_board() {
        let query = TripQuery::one_way("Benguela", "Namibe", "01/03/2026");
        let results = search(query);

        assert_eq!(results.trips.len(), departures().len());
        assert_eq!(results.query.origin, "Benguela");
    }
}
