use async_trait::async_trait;
use crate::flight::FlightsData;

/// Repository trait for the flight dataset
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Fetch the full dataset. Called once per session.
    async fn get_flights(&self) -> Result<FlightsData, Box<dyn std::error::Error + Send + Sync>>;
}
