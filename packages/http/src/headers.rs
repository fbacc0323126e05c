//! Headers applied to every outgoing request.

use std::sync::{Arc, PoisonError, RwLock};

use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::error::Error;

/// A shared, growable set of default headers.
///
/// Clones share the same set, so a header added through one handle is sent
/// by every client built from any clone. Headers can be overwritten but not
/// removed. Concurrent `set` calls are not ordered with respect to each
/// other.
#[derive(Debug, Clone, Default)]
pub struct DefaultHeaders {
    inner: Arc<RwLock<HeaderMap>>,
}

impl DefaultHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a header.
    pub fn set(&self, name: &str, value: &str) -> Result<(), Error> {
        let name = HeaderName::try_from(name)?;
        let value = HeaderValue::try_from(value)?;
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the current set.
    pub fn snapshot(&self) -> HeaderMap {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Merge headers for a request. Later sources win on conflict:
/// `Content-Type: application/json` (when `json_content`), then defaults,
/// then the per-call headers.
pub(crate) fn merge(
    defaults: &DefaultHeaders,
    json_content: bool,
    call_headers: &[(&str, &str)],
) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    if json_content {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    for (name, value) in defaults.snapshot().iter() {
        headers.insert(name.clone(), value.clone());
    }

    for (name, value) in call_headers {
        headers.insert(HeaderName::try_from(*name)?, HeaderValue::try_from(*value)?);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_upserts() {
        let defaults = DefaultHeaders::new();
        assert!(defaults.is_empty());

        defaults.set("X-Trace", "abc").unwrap();
        defaults.set("x-trace", "def").unwrap();

        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults.get("X-Trace"), Some("def".to_string()));
    }

    #[test]
    fn test_clones_share_headers() {
        let defaults = DefaultHeaders::new();
        let other = defaults.clone();
        other.set("Authorization", "Bearer t").unwrap();
        assert_eq!(defaults.get("authorization"), Some("Bearer t".to_string()));
    }

    #[test]
    fn test_invalid_header_name() {
        let defaults = DefaultHeaders::new();
        let result = defaults.set("bad header", "x");
        assert!(matches!(result, Err(Error::InvalidHeaderName(_))));
    }

    #[test]
    fn test_merge_order() {
        let defaults = DefaultHeaders::new();
        defaults.set("Content-Type", "application/vnd.api+json").unwrap();
        defaults.set("X-Client", "relay").unwrap();

        let merged = merge(&defaults, true, &[("x-client", "override")]).unwrap();
        assert_eq!(merged["content-type"], "application/vnd.api+json");
        assert_eq!(merged["x-client"], "override");

        let plain = merge(&DefaultHeaders::new(), false, &[]).unwrap();
        assert!(plain.is_empty());

        let json = merge(&DefaultHeaders::new(), true, &[]).unwrap();
        assert_eq!(json[CONTENT_TYPE], "application/json");
    }
}
