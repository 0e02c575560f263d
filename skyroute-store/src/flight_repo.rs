use async_trait::async_trait;
use skyroute_core::{FlightRepository, FlightsData};
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use crate::StoreError;

/// Serves the mock dataset from a JSON file on disk.
pub struct JsonFlightRepository {
    path: PathBuf,
    latency: Duration,
}

impl JsonFlightRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn read(&self) -> Result<FlightsData, StoreError> {
        let path = self.path.display().to_string();
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Io { path: path.clone(), source })?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Parse { path, source })
    }
}

#[async_trait]
impl FlightRepository for JsonFlightRepository {
    async fn get_flights(&self) -> Result<FlightsData, Box<dyn Error + Send + Sync>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let data = self.read().await?;
        debug!("Read {} flights from {}", data.flights.len(), self.path.display());
        Ok(data)
    }
}
