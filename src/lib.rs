use chrono::NaiveDate;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, render, repositories};
pub use infrastructure::{html, utils};

use errors::AppError;
use render::target::RenderTarget;
use repositories::resource::SourceFetcher;
use settings::{AppConfig, RenderConfig};
use use_cases::{load::{DataLoader, ResourcePaths}, portfolio::Portfolio};

pub struct AppState {
    pub render_config: RenderConfig,
    pub loader: AppDataLoader,
}

pub type AppDataLoader = DataLoader<SourceFetcher>;

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let render_config = RenderConfig::from(config);
        let fetcher = SourceFetcher::from_base(&config.base_url)?;
        let loader = DataLoader::new(
            fetcher,
            ResourcePaths::from(config),
            render_config.fallback.clone(),
        );

        Ok(AppState {
            render_config,
            loader,
        })
    }

    /// Loads the documents and draws the page into `target`.
    pub async fn render<T: RenderTarget>(&self, target: T, today: NaiveDate) -> Portfolio<T> {
        let data = self.loader.load().await;
        Portfolio::initialize(self.render_config.clone(), data, target, today)
    }
}
