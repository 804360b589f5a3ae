use std::fmt;

use derive_more::Display;
use validator::ValidationErrors;

use crate::render::target::Slot;

#[derive(Debug)]
pub enum AppError {
    Config(String),
    Load(LoadError),
    Render(RenderError),
    Io(std::io::Error),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Load(err) => write!(f, "Load error: {}", err),
            AppError::Render(err) => write!(f, "Render error: {}", err),
            AppError::Io(err) => write!(f, "I/O error: {}", err),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let messages = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect::<Vec<_>>()
            .join(", ");

        AppError::Config(messages)
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        AppError::Config(format!("invalid data source: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        AppError::Load(err)
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Render(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Failure to retrieve or parse one of the JSON resources.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum FetchError {
    #[display("Request failed: {_0}")]
    Request(String),

    #[display("Unexpected HTTP status {_0}")]
    Status(u16),

    #[display("Failed to read file: {_0}")]
    Io(String),

    #[display("Invalid JSON: {_0}")]
    Parse(String),

    #[display("Invalid resource locator: {_0}")]
    InvalidLocator(String),
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None if err.is_decode() => FetchError::Parse(err.to_string()),
            None => FetchError::Request(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::InvalidLocator(err.to_string())
    }
}

/// Structurally invalid data that made it past fetching. Rendering stops.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum LoadError {
    #[display("{resource} payload must be {expected}")]
    Malformed {
        resource: &'static str,
        expected: &'static str,
    },
}

impl std::error::Error for LoadError {}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    #[display("Missing render anchor: #{_0}")]
    MissingAnchor(Slot),
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_and_render_errors_keep_their_message() {
        let load = AppError::from(LoadError::Malformed { resource: "skills", expected: "an array" });
        assert!(matches!(load, AppError::Load(_)));
        assert_eq!(load.to_string(), "Load error: skills payload must be an array");

        let render = AppError::from(RenderError::MissingAnchor(Slot::ModalTitle));
        assert!(matches!(render, AppError::Render(RenderError::MissingAnchor(Slot::ModalTitle))));
    }

    #[test]
    fn anyhow_errors_become_internal() {
        let err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.to_string(), "Internal error: boom");
    }
}
