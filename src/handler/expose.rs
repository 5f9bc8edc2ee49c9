//! Marking callables as web-reachable handlers.

use std::fmt;
use std::sync::Arc;

use axum::http::Method;

use crate::dispatch::context::RequestContext;
use crate::dispatch::error::DispatchError;
use crate::dispatch::POST_FLAG;
use crate::handler::descriptor::{CorsOrigin, HandlerDescriptor, MethodSet};
use crate::handler::error::HandlerError;
use crate::query::{QueryArgs, QueryValue};

/// Content type used by the stock pages.
pub const HTML_UTF8: &str = "text/html; charset=utf-8";

/// Handler body.
pub type HandlerFn = Arc<dyn Fn(&mut Call<'_>) -> Result<Payload, HandlerError> + Send + Sync>;

/// Response body produced by a handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload(Vec<u8>);

impl Payload {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Named arguments a handler is willing to take.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Accepts {
    /// No arguments at all.
    #[default]
    Nothing,
    /// Only these keys; any of them may be missing.
    Keys(Vec<String>),
    /// Any keyword argument.
    Any,
}

impl Accepts {
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Accepts::Keys(keys.into_iter().map(Into::into).collect())
    }

    /// Supplied keys this signature cannot bind.
    pub fn rejected(&self, args: &QueryArgs) -> Vec<String> {
        match self {
            Accepts::Any => Vec::new(),
            Accepts::Nothing => args.keys().map(str::to_string).collect(),
            Accepts::Keys(keys) => args
                .keys()
                .filter(|k| !keys.iter().any(|known| known == k))
                .map(str::to_string)
                .collect(),
        }
    }

    fn default_arity(&self) -> usize {
        match self {
            Accepts::Nothing => 0,
            Accepts::Keys(keys) => keys.len(),
            Accepts::Any => 1,
        }
    }
}

/// What a handler body sees of the current request.
pub struct Call<'a> {
    ctx: &'a mut dyn RequestContext,
    args: &'a QueryArgs,
}

impl<'a> Call<'a> {
    pub fn new(ctx: &'a mut dyn RequestContext, args: &'a QueryArgs) -> Self {
        Self { ctx, args }
    }

    /// Request path, without the query string.
    pub fn path(&self) -> &str {
        self.ctx.path()
    }

    pub fn args(&self) -> &QueryArgs {
        self.args
    }

    pub fn arg(&self, key: &str) -> Option<&QueryValue> {
        self.args.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.args.get(key).and_then(QueryValue::as_str)
    }

    /// True when the request came in as a POST.
    pub fn is_post(&self) -> bool {
        self.args.get(POST_FLAG).is_some_and(QueryValue::is_flag)
    }

    pub fn set_header(&mut self, name: &str, value: &str) {
        self.ctx.set_header(name, value);
    }
}

/// A callable carrying a [`HandlerDescriptor`].
pub struct Exposed {
    descriptor: HandlerDescriptor,
    accepts: Accepts,
    arity: usize,
    func: HandlerFn,
}

impl Exposed {
    pub fn descriptor(&self) -> &HandlerDescriptor {
        &self.descriptor
    }

    pub fn accepts(&self) -> &Accepts {
        &self.accepts
    }

    /// Declared number of formal parameters, receiver included.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Run the handler body if the supplied arguments fit its signature.
    pub fn invoke(&self, call: &mut Call<'_>) -> Result<Payload, DispatchError> {
        let rejected = self.accepts.rejected(call.args());
        if !rejected.is_empty() {
            return Err(DispatchError::ArityMismatch {
                rejected,
                arity: self.arity,
            });
        }
        (self.func)(call).map_err(DispatchError::Handler)
    }
}

impl fmt::Debug for Exposed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exposed")
            .field("descriptor", &self.descriptor)
            .field("accepts", &self.accepts)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Exposed`] handlers.
///
/// ```
/// use site_dispatch::handler::{Expose, Accepts};
///
/// let page = Expose::new("application/json; charset=utf-8")
///     .doc("Current user")
///     .accepts(Accepts::keys(["id"]))
///     .handler(|call| Ok(format!("{:?}", call.text("id")).into()));
/// assert_eq!(page.arity(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Expose {
    descriptor: HandlerDescriptor,
    accepts: Accepts,
    arity: Option<usize>,
}

impl Expose {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            descriptor: HandlerDescriptor::new(content_type),
            accepts: Accepts::default(),
            arity: None,
        }
    }

    /// `text/html; charset=utf-8`
    pub fn html() -> Self {
        Self::new(HTML_UTF8)
    }

    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.descriptor.content_encoding = Some(encoding.into());
        self
    }

    pub fn cors(mut self, origin: impl Into<String>) -> Self {
        self.descriptor.cors = CorsOrigin::Allow(origin.into());
        self
    }

    pub fn no_cors(mut self) -> Self {
        self.descriptor.cors = CorsOrigin::Disabled;
        self
    }

    /// Replace the default `GET, POST`. `OPTIONS` is added regardless.
    pub fn methods<I>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = Method>,
    {
        self.descriptor.allowed_methods = MethodSet::new(methods);
        self
    }

    pub fn doc(mut self, documentation: impl Into<String>) -> Self {
        self.descriptor.documentation = Some(documentation.into());
        self
    }

    pub fn accepts(mut self, accepts: Accepts) -> Self {
        self.accepts = accepts;
        self
    }

    /// Override the parameter count used for the zero-argument retry.
    pub fn arity(mut self, arity: usize) -> Self {
        self.arity = Some(arity);
        self
    }

    pub fn handler<F>(self, func: F) -> Arc<Exposed>
    where
        F: Fn(&mut Call<'_>) -> Result<Payload, HandlerError> + Send + Sync + 'static,
    {
        let arity = self.arity.unwrap_or_else(|| self.accepts.default_arity());
        Arc::new(Exposed {
            descriptor: self.descriptor,
            accepts: self.accepts,
            arity,
            func: Arc::new(func),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query;

    #[test]
    fn test_default_descriptor() {
        let page = Expose::html().handler(|_| Ok("x".into()));
        let d = page.descriptor();
        assert_eq!(d.content_type, HTML_UTF8);
        assert_eq!(d.content_encoding, None);
        assert_eq!(d.cors, CorsOrigin::Inherit);
        assert_eq!(d.allowed_methods.allow_header(), "GET, POST, OPTIONS");
        assert_eq!(page.arity(), 0);
    }

    #[test]
    fn test_declared_arity() {
        let any = Expose::html().accepts(Accepts::Any).handler(|_| Ok("".into()));
        assert_eq!(any.arity(), 1);

        let keys = Expose::html()
            .accepts(Accepts::keys(["a", "b"]))
            .handler(|_| Ok("".into()));
        assert_eq!(keys.arity(), 2);

        let bound = Expose::html().arity(1).handler(|_| Ok("".into()));
        assert_eq!(bound.arity(), 1);
    }

    #[test]
    fn test_rejected_keys() {
        let args = parse_query("?a=1&b=2");
        assert_eq!(Accepts::Nothing.rejected(&args), vec!["a", "b"]);
        assert!(Accepts::Any.rejected(&args).is_empty());
        assert_eq!(Accepts::keys(["a"]).rejected(&args), vec!["b"]);
        assert!(Accepts::Nothing.rejected(&QueryArgs::new()).is_empty());
    }
}
