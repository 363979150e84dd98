//! Header assembly for resource requests.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::error::{Error, Result};

/// Merge caller headers with the bearer token.
///
/// The Authorization header is applied after the caller's entries so
/// it can never be overridden; anything else (Content-Type included)
/// is the caller's to set.
pub fn authorized_headers(access_token: &str, extra: &HeaderMap) -> Result<HeaderMap> {
    let mut headers = extra.clone();
    let bearer = HeaderValue::from_str(&format!("Bearer {}", access_token))
        .map_err(|e| Error::Config(format!("access token is not a valid header value: {}", e)))?;
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;

    #[test]
    fn test_bearer_header_attached() {
        let headers = authorized_headers("tok123", &HeaderMap::new()).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok123");
    }

    #[test]
    fn test_caller_cannot_override_authorization() {
        let mut extra = HeaderMap::new();
        extra.insert(AUTHORIZATION, HeaderValue::from_static("Bearer forged"));
        extra.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let headers = authorized_headers("tok123", &extra).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer tok123");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
    }

    #[test]
    fn test_invalid_token_rejected() {
        assert!(authorized_headers("bad\ntoken", &HeaderMap::new()).is_err());
    }
}
