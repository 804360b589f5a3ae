use chrono::Local;
use portfolio_renderer::{
    html::document::HtmlDocument,
    settings::AppConfig,
    AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing(false);
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(config.is_production());
    tracing::info!("Loaded configuration: {:?}", config);

    let state = AppState::new(&config)?;

    tracing::info!(
        "🚀 Rendering {} v{} from {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        config.base_url
    );

    let portfolio = state
        .render(HtmlDocument::new(), Local::now().date_naive())
        .await;

    match portfolio.status().stats() {
        Ok(stats) => tracing::info!(
            "{} skills, {} categories, {}+ years",
            stats.skill_count,
            stats.category_count,
            stats.experience_years
        ),
        Err(e) => tracing::warn!("Page written with malformed-data notice: {}", e),
    }

    let title = match portfolio.user().name.trim() {
        "" => config.name.clone(),
        name => format!("{} | {}", name, config.name),
    };
    let html = portfolio.target.to_html(&title);

    tokio::fs::write(&config.output_path, html).await?;
    tracing::info!("Wrote {}", config.output_path.display());

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
