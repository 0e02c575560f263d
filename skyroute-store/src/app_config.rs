use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub cabin: CabinConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub flights_path: String,
    /// Artificial delay before the dataset resolves, to mimic a remote fetch
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_limit")]
    pub recent_limit: usize,
    #[serde(default = "default_limit")]
    pub popular_limit: usize,
}

fn default_limit() -> usize { 5 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_limit(),
            popular_limit: default_limit(),
        }
    }
}

/// Fallbacks for the cabin-selection screen when it is reached without a
/// selected fare.
#[derive(Debug, Deserialize, Clone)]
pub struct CabinConfig {
    #[serde(default = "default_amount")]
    pub default_amount: f64,
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_amount() -> f64 { 470.0 }
fn default_currency() -> String { "TRY".to_string() }

impl Default for CabinConfig {
    fn default() -> Self {
        Self {
            default_amount: default_amount(),
            default_currency: default_currency(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SKYROUTE_SERVER__PORT=8081`
            .add_source(config::Environment::with_prefix("SKYROUTE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
