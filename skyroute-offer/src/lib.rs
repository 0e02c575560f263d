pub mod models;
pub mod listing;
pub mod search_form;

pub use listing::{filter_flights, select_fare, select_package, sort_flights, FlightListManager};
pub use models::{
    CabinSelectionSummary, ExpandedState, FarePackage, FareSelection, FlightListView,
    FlightSummary, HeaderLabels, ListingView, SearchSubmission,
};
pub use search_form::{CityField, SearchFormState};
