use axum::http::{header, HeaderMap};
use subtle::ConstantTimeEq;

/// Header carrying the admin API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Constant-time string comparison to prevent timing attacks
/// Use this for comparing API keys and other sensitive values
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Extract the presented API key from `X-API-Key` or `Authorization: Bearer`
pub fn presented_api_key(headers: &HeaderMap) -> Option<&str> {
    if let Some(key) = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()) {
        return Some(key);
    }
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// Check a request against the configured admin key.
///
/// Always false when no key is configured, so admin routes stay closed by
/// default.
pub fn is_authorized(headers: &HeaderMap, expected: Option<&str>) -> bool {
    match (expected, presented_api_key(headers)) {
        (Some(expected), Some(presented)) if !expected.is_empty() => {
            constant_time_compare(presented, expected)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("secret123", "secret123"));
        assert!(!constant_time_compare("secret123", "secret124"));
        assert!(!constant_time_compare("secret123", "secret12"));
        assert!(!constant_time_compare("", "secret"));
    }

    #[test]
    fn test_api_key_header_authorizes() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_static("admin-key"));
        assert!(is_authorized(&headers, Some("admin-key")));
        assert!(!is_authorized(&headers, Some("other-key")));
    }

    #[test]
    fn test_bearer_token_authorizes() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer admin-key"),
        );
        assert!(is_authorized(&headers, Some("admin-key")));
    }

    #[test]
    fn test_missing_configured_key_denies() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_static(""));
        assert!(!is_authorized(&headers, None));
        assert!(!is_authorized(&headers, Some("")));
    }

    #[test]
    fn test_missing_presented_key_denies() {
        assert!(!is_authorized(&HeaderMap::new(), Some("admin-key")));
    }
}
