//! One dispatcher serves GET, POST and OPTIONS for a whole tree.

use std::sync::Arc;

use axum::http::Method;

use crate::dispatch::context::RequestContext;
use crate::dispatch::error::DispatchError;
use crate::dispatch::POST_FLAG;
use crate::handler::{Call, Exposed, MethodSet, Payload};
use crate::query::{parse_query, QueryArgs, QueryValue};
use crate::routing::{resolve, GlobalDefault, Resolution, Root, RootSlot};
use crate::sitemap::{build_sitemap, SitemapEntry};

const ALLOW_HEADERS: &str = "Authorization, Content-Type";

/// Resolves requests against a node tree and runs the selected handler.
pub struct Dispatcher {
    root: RootSlot,
    global_default: GlobalDefault,
    default_cors: Option<String>,
}

impl Dispatcher {
    pub fn new(root: Root) -> Self {
        Self {
            root: RootSlot::new(root),
            global_default: GlobalDefault::default(),
            default_cors: None,
        }
    }

    /// CORS origin for handlers that do not choose their own.
    pub fn with_default_cors(mut self, origin: Option<String>) -> Self {
        self.default_cors = origin;
        self
    }

    pub fn with_global_default(self, handler: Arc<Exposed>) -> Self {
        self.global_default.set(handler);
        self
    }

    pub fn root(&self) -> &RootSlot {
        &self.root
    }

    pub fn set_root(&self, root: Root) {
        self.root.store(root);
    }

    pub fn global_default(&self) -> &GlobalDefault {
        &self.global_default
    }

    pub fn default_cors(&self) -> Option<&str> {
        self.default_cors.as_deref()
    }

    /// Methods this dispatcher answers at all.
    pub fn supported_methods() -> MethodSet {
        MethodSet::new([Method::GET, Method::POST])
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        resolve(&self.root.load(), path, &self.global_default)
    }

    pub fn sitemap(&self) -> Vec<SitemapEntry> {
        build_sitemap(&self.root.load())
    }

    pub fn get(&self, ctx: &mut dyn RequestContext) -> Result<Payload, DispatchError> {
        self.handle(&Method::GET, ctx)
    }

    pub fn post(&self, ctx: &mut dyn RequestContext) -> Result<Payload, DispatchError> {
        self.handle(&Method::POST, ctx)
    }

    pub fn options(&self, ctx: &mut dyn RequestContext) -> Result<Payload, DispatchError> {
        self.handle(&Method::OPTIONS, ctx)
    }

    /// Route by HTTP method; anything but GET, POST or OPTIONS is refused.
    pub fn dispatch(
        &self,
        method: &Method,
        ctx: &mut dyn RequestContext,
    ) -> Result<Payload, DispatchError> {
        match *method {
            Method::GET | Method::POST | Method::OPTIONS => self.handle(method, ctx),
            _ => Err(DispatchError::MethodNotAllowed {
                method: method.clone(),
                allowed: Self::supported_methods(),
            }),
        }
    }

    fn handle(&self, method: &Method, ctx: &mut dyn RequestContext) -> Result<Payload, DispatchError> {
        let path = ctx.path().to_string();
        let Resolution { handler, via } = self.resolve(&path);

        tracing::debug!(
            method = %method,
            path = %path,
            via = via.as_str(),
            "Resolved handler"
        );

        self.admit(method, &handler, ctx)?;

        if *method == Method::OPTIONS {
            return Ok(Payload::empty());
        }

        let descriptor = handler.descriptor();
        ctx.set_header("Content-Type", &descriptor.content_type);
        if let Some(encoding) = &descriptor.content_encoding {
            ctx.set_header("Content-Encoding", encoding);
        }

        let mut args = parse_query(ctx.raw_query());
        if *method == Method::POST {
            if args.contains_key(POST_FLAG) {
                tracing::error!(path = %path, "Caller supplied reserved argument `{}`", POST_FLAG);
                return Err(DispatchError::ReservedKey(POST_FLAG.to_string()));
            }
            args.insert(POST_FLAG, QueryValue::Flag);
        }

        invoke(&handler, ctx, &args)
    }

    /// Method admission, then `Allow` and CORS headers.
    fn admit(
        &self,
        method: &Method,
        handler: &Exposed,
        ctx: &mut dyn RequestContext,
    ) -> Result<(), DispatchError> {
        let descriptor = handler.descriptor();
        let allowed = &descriptor.allowed_methods;

        if !allowed.contains(method) {
            tracing::warn!(
                method = %method,
                path = %ctx.path(),
                allowed = %allowed.allow_header(),
                "Method not allowed"
            );
            return Err(DispatchError::MethodNotAllowed {
                method: method.clone(),
                allowed: allowed.clone(),
            });
        }

        let methods = allowed.allow_header();
        ctx.set_header("Allow", &methods);

        if let Some(origin) = descriptor.cors.resolve(self.default_cors.as_deref()) {
            ctx.set_header("Access-Control-Allow-Origin", origin);
            ctx.set_header("Access-Control-Allow-Methods", &methods);
            ctx.set_header("Access-Control-Allow-Headers", ALLOW_HEADERS);
        }

        Ok(())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Root::Empty)
    }
}

/// Call the handler with `args`. If it cannot bind them and declares at
/// most one parameter, call it again with none.
fn invoke(
    handler: &Exposed,
    ctx: &mut dyn RequestContext,
    args: &QueryArgs,
) -> Result<Payload, DispatchError> {
    let first = handler.invoke(&mut Call::new(&mut *ctx, args));
    match first {
        Err(DispatchError::ArityMismatch { rejected, arity }) if arity <= 1 => {
            tracing::debug!(?rejected, arity, "Retrying handler without arguments");
            let empty = QueryArgs::new();
            handler.invoke(&mut Call::new(ctx, &empty))
        }
        other => other,
    }
}
