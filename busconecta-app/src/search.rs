use busconecta_catalog::search::SearchResults;
use busconecta_core::search::TripQuery;

use crate::error::AppError;

/// Search screen: validate the form, then consult the catalog.
pub fn search_trips(query: TripQuery) -> Result<SearchResults, AppError> {
    query.validate()?;
    Ok(busconecta_catalog::search(query))
}
