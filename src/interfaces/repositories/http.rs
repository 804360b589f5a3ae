use async_trait::async_trait;
use reqwest::{
    header::{CACHE_CONTROL, PRAGMA},
    Client,
};
use serde_json::Value;
use url::Url;

use crate::{errors::FetchError, repositories::resource::ResourceFetcher};

/// Fetches documents over HTTP, bypassing caches.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let mut base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(FetchError::InvalidLocator(base.to_string()));
        }
        // Without the trailing slash `join` would replace the last segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder().build()?;
        Ok(Self { client, base })
    }

    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        Ok(self.base.join(path)?)
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.resolve(path)?;

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
