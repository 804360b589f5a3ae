use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use dotenv::dotenv;
use std::{env, fmt, path::PathBuf, str::FromStr};
use validator::Validate;

use crate::constants::{
    fallback_ratings, fallback_skills, fallback_user, DEFAULT_EXCERPT_LENGTH,
    MALFORMED_DATA_TEXT, NO_DATE_PLACEHOLDER, NO_PROJECTS_TEXT, NO_RESOURCES_TEXT,
    NO_SKILLS_TEXT, PLACEHOLDER_AVATAR, PLACEHOLDER_IMAGE,
};
use crate::errors::AppError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Deserialize, Clone, Validate)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    /// `http(s)://` URL or local directory holding the three documents.
    #[serde(default = "default_base_url")]
    #[validate(length(min = 1, message = "base_url cannot be empty"))]
    pub base_url: String,

    #[serde(default = "default_user_path")]
    #[validate(length(min = 1, message = "user_path cannot be empty"))]
    pub user_path: String,

    #[serde(default = "default_skills_path")]
    #[validate(length(min = 1, message = "skills_path cannot be empty"))]
    pub skills_path: String,

    #[serde(default = "default_ratings_path")]
    #[validate(length(min = 1, message = "ratings_path cannot be empty"))]
    pub ratings_path: String,

    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    #[serde(default = "default_excerpt_length")]
    #[validate(range(min = 10, max = 1000, message = "excerpt_length must be between 10 and 1000"))]
    pub excerpt_length: usize,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio".to_string()
}
fn default_base_url() -> String {
    "data".to_string()
}
fn default_user_path() -> String {
    "user.json".to_string()
}
fn default_skills_path() -> String {
    "skills.json".to_string()
}
fn default_ratings_path() -> String {
    "ratings.json".to_string()
}
fn default_output_path() -> PathBuf {
    PathBuf::from("portfolio.html")
}
fn default_excerpt_length() -> usize {
    DEFAULT_EXCERPT_LENGTH
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: default_env(),
            name: default_name(),
            base_url: default_base_url(),
            user_path: default_user_path(),
            skills_path: default_skills_path(),
            ratings_path: default_ratings_path(),
            output_path: default_output_path(),
            excerpt_length: default_excerpt_length(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }
}

/// Text shown in place of missing content.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholders {
    pub image: String,
    pub avatar: String,
    pub no_date: String,
    pub no_projects: String,
    pub no_resources: String,
    pub no_skills: String,
    pub malformed_data: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            image: PLACEHOLDER_IMAGE.to_string(),
            avatar: PLACEHOLDER_AVATAR.to_string(),
            no_date: NO_DATE_PLACEHOLDER.to_string(),
            no_projects: NO_PROJECTS_TEXT.to_string(),
            no_resources: NO_RESOURCES_TEXT.to_string(),
            no_skills: NO_SKILLS_TEXT.to_string(),
            malformed_data: MALFORMED_DATA_TEXT.to_string(),
        }
    }
}

/// Documents substituted for resources that fail to load.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackData {
    pub user: Value,
    pub skills: Value,
    pub ratings: Value,
}

impl Default for FallbackData {
    fn default() -> Self {
        Self {
            user: fallback_user(),
            skills: fallback_skills(),
            ratings: fallback_ratings(),
        }
    }
}

/// Immutable rendering configuration, built once at startup and handed to
/// the loader and renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub excerpt_length: usize,
    pub placeholders: Placeholders,
    pub fallback: FallbackData,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            placeholders: Placeholders::default(),
            fallback: FallbackData::default(),
        }
    }
}

impl From<&AppConfig> for RenderConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            excerpt_length: config.excerpt_length,
            ..Default::default()
        }
    }
}
