use async_trait::async_trait;
use serde_json::Value;

use crate::{
    errors::FetchError,
    repositories::{fs::FsFetcher, http::HttpFetcher},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Retrieves and parses the JSON document at `path`, relative to the
    /// fetcher's base.
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError>;
}

/// Fetcher picked from the configured base: `http(s)://` URLs go over the
/// network, anything else is a local directory.
#[derive(Debug, Clone)]
pub enum SourceFetcher {
    Http(HttpFetcher),
    Fs(FsFetcher),
}

impl SourceFetcher {
    pub fn from_base(base: &str) -> Result<Self, FetchError> {
        let trimmed = base.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(SourceFetcher::Http(HttpFetcher::new(trimmed)?))
        } else {
            Ok(SourceFetcher::Fs(FsFetcher::new(trimmed)))
        }
    }
}

#[async_trait]
impl ResourceFetcher for SourceFetcher {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        match self {
            SourceFetcher::Http(fetcher) => fetcher.fetch_json(path).await,
            SourceFetcher::Fs(fetcher) => fetcher.fetch_json(path).await,
        }
    }
}
