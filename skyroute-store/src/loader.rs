use skyroute_core::{FlightRepository, FlightsData};
use std::sync::Arc;
use tracing::{info, warn};

/// Availability of the session's flight dataset.
#[derive(Debug, Clone, Default)]
pub enum DatasetState {
    #[default]
    Loading,
    Ready(Arc<FlightsData>),
    /// The fetch failed; there is no partial dataset.
    Unavailable,
}

impl DatasetState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DatasetState::Loading)
    }

    pub fn flights(&self) -> Option<&FlightsData> {
        match self {
            DatasetState::Ready(data) => Some(data.as_ref()),
            _ => None,
        }
    }
}

impl From<FlightsData> for DatasetState {
    fn from(data: FlightsData) -> Self {
        DatasetState::Ready(Arc::new(data))
    }
}

/// One-shot fetch of the dataset. Never retries; a rejected fetch becomes
/// `DatasetState::Unavailable`.
pub struct FlightLoader {
    repository: Arc<dyn FlightRepository>,
}

impl FlightLoader {
    pub fn new(repository: Arc<dyn FlightRepository>) -> Self {
        Self { repository }
    }

    pub async fn load(&self) -> DatasetState {
        match self.repository.get_flights().await {
            Ok(data) => {
                info!("Flight dataset loaded: {} flights", data.flights.len());
                DatasetState::from(data)
            }
            Err(e) => {
                warn!("Flight dataset unavailable: {}", e);
                DatasetState::Unavailable
            }
        }
    }
}
