use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use crate::{errors::FetchError, repositories::resource::ResourceFetcher};

/// Reads documents from a local directory.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ResourceFetcher for FsFetcher {
    async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        let full_path = self.root.join(path);

        let content = fs::read_to_string(&full_path)
            .await
            .map_err(|e| FetchError::Io(format!("{}: {}", full_path.display(), e)))?;

        Ok(serde_json::from_str(&content)?)
    }
}
