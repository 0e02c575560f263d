pub mod flight;
pub mod search;
pub mod repository;

pub use flight::{
    generate_flight_key, Airport, BrandCode, CabinSection, City, Country, FareCategories,
    FareCategory, FarePrice, FareStatus, FareSubcategory, Flight, FlightsData,
};
pub use repository::FlightRepository;
pub use search::{AutocompleteOption, CabinType, RecentSearch, SearchCriteria, SortBy};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Fare {brand} cannot be selected: {reason}")]
    FareNotSelectable { brand: String, reason: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
