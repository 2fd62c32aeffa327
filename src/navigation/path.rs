//! Path normalization.
//!
//! Turns whatever the user agent hands over (relative paths, full URLs,
//! paths carrying a query or fragment) into the form the resolver expects:
//! a leading slash, dot segments resolved, percent-encoded, and no query or
//! fragment.

use url::Url;

use crate::navigation::NavigationError;

const BASE: &str = "http://localhost/";

/// Normalize a raw location into a resolver path.
pub fn normalize_path(raw: &str) -> Result<String, NavigationError> {
    let raw = raw.trim();

    if let Ok(absolute) = Url::parse(raw) {
        if absolute.has_host() {
            return Ok(absolute.path().to_string());
        }
    }

    // Collapse leading slashes so "//host/x" stays a path, not a network reference.
    let relative = format!("/{}", raw.trim_start_matches('/'));
    let base = Url::parse(BASE).map_err(|e| NavigationError::InvalidPath {
        path: raw.to_string(),
        reason: e.to_string(),
    })?;
    let url = base.join(&relative).map_err(|e| NavigationError::InvalidPath {
        path: raw.to_string(),
        reason: e.to_string(),
    })?;

    Ok(url.path().to_string())
}
