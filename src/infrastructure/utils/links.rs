use url::{ParseError, Url};

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Returns the trimmed link when it is relative or uses an allowed scheme.
/// `javascript:` and other schemes are dropped.
pub fn safe_href(raw: &str) -> Option<String> {
    let href = raw.trim();
    if href.is_empty() {
        return None;
    }

    match Url::parse(href) {
        Ok(url) if ALLOWED_SCHEMES.contains(&url.scheme()) => Some(href.to_string()),
        Ok(url) => {
            tracing::warn!("Dropping link with disallowed scheme '{}'", url.scheme());
            None
        }
        Err(ParseError::RelativeUrlWithoutBase) => Some(href.to_string()),
        Err(e) => {
            tracing::warn!("Dropping unparseable link '{}': {}", href, e);
            None
        }
    }
}
