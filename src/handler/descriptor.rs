//! Handler descriptor: the response metadata attached to an endpoint.

use axum::http::Method;

/// CORS policy of a single handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsOrigin {
    /// Use the dispatcher-wide default origin, if one is configured.
    #[default]
    Inherit,
    /// Never emit CORS headers for this handler.
    Disabled,
    /// Emit CORS headers allowing this origin.
    Allow(String),
}

impl CorsOrigin {
    /// Effective origin once the dispatcher default is taken into account.
    pub fn resolve<'a>(&'a self, fallback: Option<&'a str>) -> Option<&'a str> {
        match self {
            CorsOrigin::Inherit => fallback,
            CorsOrigin::Disabled => None,
            CorsOrigin::Allow(origin) => Some(origin.as_str()),
        }
    }
}

/// Ordered, de-duplicated set of HTTP methods.
///
/// Methods keep their declaration order and `OPTIONS` is always present
/// as the last member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSet {
    methods: Vec<Method>,
}

impl MethodSet {
    pub fn new<I>(methods: I) -> Self
    where
        I: IntoIterator<Item = Method>,
    {
        let mut set: Vec<Method> = Vec::new();
        for method in methods {
            if method != Method::OPTIONS && !set.contains(&method) {
                set.push(method);
            }
        }
        set.push(Method::OPTIONS);
        Self { methods: set }
    }

    pub fn contains(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter()
    }

    /// Value for the `Allow` and `Access-Control-Allow-Methods` headers.
    pub fn allow_header(&self) -> String {
        self.methods
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for MethodSet {
    fn default() -> Self {
        Self::new([Method::GET, Method::POST])
    }
}

/// Response metadata for an exposed handler.
#[derive(Debug, Clone)]
pub struct HandlerDescriptor {
    /// MIME type written as `Content-Type`.
    pub content_type: String,
    /// Written as `Content-Encoding`; the handler encodes its own body.
    pub content_encoding: Option<String>,
    pub cors: CorsOrigin,
    pub allowed_methods: MethodSet,
    /// Shown in the sitemap.
    pub documentation: Option<String>,
}

impl HandlerDescriptor {
    pub fn new(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            content_encoding: None,
            cors: CorsOrigin::default(),
            allowed_methods: MethodSet::default(),
            documentation: None,
        }
    }
}
