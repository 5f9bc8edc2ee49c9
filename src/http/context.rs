//! [`RequestContext`] over an HTTP request.

use axum::http::{HeaderMap, HeaderName, HeaderValue, Uri};
use percent_encoding::percent_decode_str;

use crate::dispatch::RequestContext;

/// Request path and query plus the response headers set so far.
#[derive(Debug, Clone, Default)]
pub struct HttpContext {
    path: String,
    query: String,
    headers: HeaderMap,
}

impl HttpContext {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: query.into(),
            headers: HeaderMap::new(),
        }
    }

    /// The path is percent-decoded, the query is kept raw.
    pub fn from_uri(uri: &Uri) -> Self {
        let path = percent_decode_str(uri.path()).decode_utf8_lossy();
        Self::new(path, uri.query().unwrap_or_default())
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn into_headers(self) -> HeaderMap {
        self.headers
    }
}

impl RequestContext for HttpContext {
    fn path(&self) -> &str {
        &self.path
    }

    fn raw_query(&self) -> &str {
        &self.query
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => tracing::warn!(header = %name, "Dropping invalid response header"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_uri_splits_query() {
        let uri: Uri = "/missing/page?param=1&param=2".parse().unwrap();
        let ctx = HttpContext::from_uri(&uri);
        assert_eq!(ctx.path(), "/missing/page");
        assert_eq!(ctx.raw_query(), "param=1&param=2");

        let bare = HttpContext::from_uri(&"/".parse().unwrap());
        assert_eq!(bare.raw_query(), "");
    }

    #[test]
    fn test_from_uri_decodes_path_only() {
        let uri: Uri = "/missing%20page/caf%C3%A9?q=a%20b".parse().unwrap();
        let ctx = HttpContext::from_uri(&uri);
        assert_eq!(ctx.path(), "/missing page/café");
        assert_eq!(ctx.raw_query(), "q=a%20b");
    }

    #[test]
    fn test_set_header_replaces() {
        let mut ctx = HttpContext::default();
        ctx.set_header("Content-Disposition", "attachment;filename=a.csv");
        ctx.set_header("content-disposition", "attachment;filename=b.csv");
        assert_eq!(ctx.headers().len(), 1);
        assert_eq!(
            ctx.headers().get("content-disposition").unwrap(),
            "attachment;filename=b.csv"
        );
    }

    #[test]
    fn test_invalid_header_dropped() {
        let mut ctx = HttpContext::default();
        ctx.set_header("bad header", "x");
        ctx.set_header("X-Ok", "line\nbreak");
        assert!(ctx.headers().is_empty());
    }
}
