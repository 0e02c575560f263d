pub mod app_config;
pub mod flight_repo;
pub mod loader;
pub mod recent;

pub use flight_repo::JsonFlightRepository;
pub use loader::{DatasetState, FlightLoader};
pub use recent::RecentSearches;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read flight data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed flight data in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
