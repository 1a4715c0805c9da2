pub mod error;
pub mod model;
pub mod transport;

use std::{sync::Arc, time::Instant};

use reqwest::Url;
use tracing::{info, warn};

use crate::{
    catalog::{
        error::CatalogError,
        model::{Track, decode_result_set},
        transport::{CatalogTransport, HttpTransport},
    },
    config::CatalogConfig,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    Popular,
    Search(String),
}

impl CatalogQuery {
    /// A search made only of whitespace never reaches the network.
    pub fn is_blank(&self) -> bool {
        matches!(self, CatalogQuery::Search(query) if query.trim().is_empty())
    }
}

pub struct CatalogClient {
    transport: Arc<dyn CatalogTransport>,
    base_url: Url,
    limit: u32,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let transport = Arc::new(HttpTransport::new(config)?);
        Self::with_transport(config, transport)
    }

    pub fn with_transport(
        config: &CatalogConfig,
        transport: Arc<dyn CatalogTransport>,
    ) -> Result<Self, CatalogError> {
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;

        Ok(Self {
            transport,
            base_url,
            limit: config.result_limit,
        })
    }

    pub fn endpoint(&self, query: &CatalogQuery) -> Result<Url, CatalogError> {
        let path = match query {
            CatalogQuery::Popular => "chart/0/tracks",
            CatalogQuery::Search(_) => "search",
        };
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;

        {
            let mut pairs = url.query_pairs_mut();
            if let CatalogQuery::Search(text) = query {
                pairs.append_pair("q", text);
            }
            pairs.append_pair("limit", &self.limit.to_string());
        }

        Ok(url)
    }

    pub async fn try_fetch(&self, query: &CatalogQuery) -> Result<Vec<Track>, CatalogError> {
        if query.is_blank() {
            return Ok(Vec::new());
        }

        let url = self.endpoint(query)?;
        let start = Instant::now();
        let body = self.transport.get(&url).await?;
        let tracks = decode_result_set(&body)?;

        info!(
            url = url.as_str(),
            count = tracks.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "catalog_fetched"
        );

        Ok(tracks)
    }

    /// Like [`CatalogClient::try_fetch`], but every failure degrades to an
    /// empty result set.
    pub async fn fetch(&self, query: &CatalogQuery) -> Vec<Track> {
        match self.try_fetch(query).await {
            Ok(tracks) => tracks,
            Err(e) => {
                warn!(query = ?query, error = %e, "catalog_fetch_failed");
                Vec::new()
            }
        }
    }

    pub async fn popular(&self) -> Vec<Track> {
        self.fetch(&CatalogQuery::Popular).await
    }

    pub async fn search(&self, query: &str) -> Vec<Track> {
        self.fetch(&CatalogQuery::Search(query.to_string())).await
    }
}
