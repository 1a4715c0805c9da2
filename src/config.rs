use std::time::Duration;

pub use crate::audio::config::AudioConfig;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub audio: AudioConfig,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Fixed result-set size for both popular and search queries.
    pub result_limit: u32,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.deezer.com/".to_string(),
            result_limit: 20,
            timeout_secs: 10,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }
}
