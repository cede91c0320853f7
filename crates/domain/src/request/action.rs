//! Request action synthesizer
//!
//! Rebuilds the action URL used for submission from the structured
//! parameter list. The query string is derived solely from enabled
//! parameters; the base (origin + pathname) is never touched.

use crate::request::query::QueryParams;

/// Returns the action with any prior query string stripped.
#[must_use]
pub fn base_path(action: &str) -> &str {
    action.split_once('?').map_or(action, |(base, _)| base)
}

/// Composes the action URL from a base path and a parameter list.
///
/// Enabled parameters are mapped to `key=value`, joined by `&`, and appended
/// behind a single `?`. When no parameter is enabled the base is returned
/// unchanged, without a trailing `?`.
#[must_use]
pub fn synthesize_action(base_path: &str, params: &QueryParams) -> String {
    let query = params
        .enabled()
        .map(|p| format!("{}={}", p.key, p.value))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        base_path.to_string()
    } else {
        format!("{base_path}?{query}")
    }
}
