//! Parameter codec
//!
//! Pure conversions between the structured parameter list and its two other
//! representations: the newline-delimited bulk-text format and the URL
//! string. The bulk line format (`key:value`, `#`-prefixed when disabled) is
//! the only wire format the editor defines and is kept stable for copy-paste
//! workflows.

use url::Url;

use crate::error::{DomainError, DomainResult};
use crate::request::path_variable::{PathVariable, PathVariables};
use crate::request::query::{QueryParam, QueryParams};

/// Marker character that turns a path segment into a path variable.
const PATH_VARIABLE_MARKER: char = ':';

/// Serializes a parameter list into bulk text.
///
/// One line per parameter, `key:value` for enabled entries and `#key:value`
/// for disabled ones, in list order.
#[must_use]
pub fn encode_bulk_text(params: &QueryParams) -> String {
    params
        .all()
        .iter()
        .map(|p| {
            if p.enabled {
                format!("{}:{}", p.key, p.value)
            } else {
                format!("#{}:{}", p.key, p.value)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses bulk text back into a parameter list.
///
/// Each line is split on the first `:`; a line with no colon yields an
/// empty value rather than an error. A `#` prefix on the key marks the
/// entry disabled.
///
/// Descriptions are inherited positionally from `previous` (line *i* takes
/// the description of the previous list's entry *i*). This is a known
/// limitation: reordering lines in the bulk editor attaches the wrong
/// description. Callers depend on the positional semantics, so any move to
/// key-based matching is a behavior change, not a cleanup.
#[must_use]
pub fn decode_bulk_text(text: &str, previous: &QueryParams) -> QueryParams {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| {
            let (key_part, value_part) = line.split_once(':').unwrap_or((line, ""));
            let key_part = key_part.trim();
            let enabled = !key_part.starts_with('#');
            let key = key_part.strip_prefix('#').unwrap_or(key_part).trim();
            let description = previous
                .get(index)
                .map(|p| p.description.clone())
                .unwrap_or_default();

            QueryParam {
                key: key.to_string(),
                value: value_part.trim().to_string(),
                description,
                enabled,
            }
        })
        .collect()
}

/// Parses the query string of a URL into a parameter list.
///
/// Entries come back in `query_pairs` iteration order, enabled, with empty
/// descriptions.
///
/// # Errors
///
/// Returns [`DomainError::InvalidUrl`] when the string does not parse as a
/// URL. Edit entry points treat this as "no parameters": an incomplete URL
/// while the user is typing is expected, not exceptional.
pub fn query_params_from_url(action: &str) -> DomainResult<QueryParams> {
    let url = Url::parse(action).map_err(|_| DomainError::InvalidUrl(action.to_string()))?;

    Ok(url
        .query_pairs()
        .map(|(key, value)| QueryParam::new(key, value))
        .collect())
}

/// Extracts path variables from a URL's path template.
///
/// Any `/`-delimited segment that starts with the marker character and is
/// longer than the marker alone becomes a variable keyed by the remainder,
/// with empty value and description.
///
/// # Errors
///
/// Returns [`DomainError::InvalidUrl`] when the string does not parse as a
/// URL; callers degrade to an empty list.
pub fn path_variables_from_url(action: &str) -> DomainResult<PathVariables> {
    let url = Url::parse(action).map_err(|_| DomainError::InvalidUrl(action.to_string()))?;

    Ok(url
        .path()
        .split('/')
        .filter_map(|segment| {
            segment
                .strip_prefix(PATH_VARIABLE_MARKER)
                .filter(|key| !key.is_empty())
                .map(PathVariable::new)
        })
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_mixed_enabled_and_disabled() {
        let params: QueryParams = [QueryParam::new("q", "test"), QueryParam::disabled("p", "1")]
            .into_iter()
            .collect();

        assert_eq!(encode_bulk_text(&params), "q:test\n#p:1");
    }

    #[test]
    fn test_decode_bulk_disable_round_trip() {
        let decoded = decode_bulk_text("q:test\n#p:1", &QueryParams::new());

        let expected: QueryParams = [QueryParam::new("q", "test"), QueryParam::disabled("p", "1")]
            .into_iter()
            .collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_round_trip_preserves_descriptions() {
        let params: QueryParams = [
            QueryParam::new("page", "1").with_description("page number"),
            QueryParam::disabled("debug", "true").with_description("dev only"),
        ]
        .into_iter()
        .collect();

        let decoded = decode_bulk_text(&encode_bulk_text(&params), &params);
        assert_eq!(decoded, params);
    }

    #[test]
    fn test_decode_line_without_colon_defaults_value() {
        let decoded = decode_bulk_text("standalone", &QueryParams::new());
        assert_eq!(decoded.get(0).unwrap().key, "standalone");
        assert_eq!(decoded.get(0).unwrap().value, "");
        assert!(decoded.get(0).unwrap().enabled);
    }

    #[test]
    fn test_decode_splits_on_first_colon_only() {
        let decoded = decode_bulk_text("time:12:30:45", &QueryParams::new());
        assert_eq!(decoded.get(0).unwrap().key, "time");
        assert_eq!(decoded.get(0).unwrap().value, "12:30:45");
    }

    #[test]
    fn test_decode_trims_whitespace() {
        let decoded = decode_bulk_text("  # page : 1 ", &QueryParams::new());
        assert_eq!(decoded.get(0).unwrap().key, "page");
        assert_eq!(decoded.get(0).unwrap().value, "1");
        assert!(!decoded.get(0).unwrap().enabled);
    }

    #[test]
    fn test_decode_description_is_positional() {
        let previous: QueryParams = [
            QueryParam::new("a", "1").with_description("first"),
            QueryParam::new("b", "2").with_description("second"),
        ]
        .into_iter()
        .collect();

        // Lines swapped relative to `previous`: descriptions stay by index
        let decoded = decode_bulk_text("b:2\na:1", &previous);
        assert_eq!(decoded.get(0).unwrap().description, "first");
        assert_eq!(decoded.get(1).unwrap().description, "second");
    }

    #[test]
    fn test_query_params_from_url_in_order() {
        let params = query_params_from_url("https://api.example.com/users?page=1&limit=10")
            .unwrap();

        assert_eq!(params.len(), 2);
        assert_eq!(params.get(0).unwrap().key, "page");
        assert_eq!(params.get(1).unwrap().key, "limit");
        assert!(params.all().iter().all(|p| p.enabled));
    }

    #[test]
    fn test_query_params_from_url_without_query() {
        let params = query_params_from_url("https://api.example.com/users").unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_query_params_from_invalid_url() {
        let result = query_params_from_url("not a url");
        assert_eq!(result, Err(DomainError::InvalidUrl("not a url".to_string())));
    }

    #[test]
    fn test_path_variables_from_url() {
        let variables =
            path_variables_from_url("https://api.example.com/users/:id/posts/:postId").unwrap();

        assert_eq!(variables.len(), 2);
        assert_eq!(variables.get(0).unwrap().key, "id");
        assert_eq!(variables.get(1).unwrap().key, "postId");
    }

    #[test]
    fn test_bare_marker_segment_is_not_a_variable() {
        let variables = path_variables_from_url("https://api.example.com/users/:/posts").unwrap();
        assert!(variables.is_empty());
    }

    #[test]
    fn test_path_variables_from_invalid_url() {
        assert!(path_variables_from_url("http//broken").is_err());
    }
}
