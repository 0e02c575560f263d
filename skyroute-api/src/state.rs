use std::sync::Arc;
use skyroute_store::app_config::{CabinConfig, SearchConfig};
use skyroute_store::{DatasetState, FlightLoader, RecentSearches};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<RwLock<DatasetState>>,
    pub recent: Arc<RwLock<RecentSearches>>,
    pub search: SearchConfig,
    pub cabin: CabinConfig,
}

impl AppState {
    pub fn new(search: SearchConfig, cabin: CabinConfig) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(DatasetState::Loading)),
            recent: Arc::new(RwLock::new(RecentSearches::new(search.recent_limit))),
            search,
            cabin,
        }
    }

    /// Snapshot of the dataset; cheap, the flights are behind an `Arc`.
    pub async fn dataset(&self) -> DatasetState {
        self.dataset.read().await.clone()
    }

    /// Runs the one-shot dataset fetch in the background.
    pub fn spawn_loader(&self, loader: FlightLoader) -> JoinHandle<()> {
        let dataset = self.dataset.clone();
        tokio::spawn(async move {
            let loaded = loader.load().await;
            *dataset.write().await = loaded;
        })
    }
}
