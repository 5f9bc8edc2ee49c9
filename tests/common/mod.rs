//! Shared site trees and request helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use site_dispatch::codec::zip_it;
use site_dispatch::config::AppConfig;
use site_dispatch::tree::Function;
use site_dispatch::{Accepts, Dispatcher, Expose, HandlerError, HttpServer, Root, Site};

/// Response parts collected for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub fn router_for(dispatcher: Arc<Dispatcher>) -> Router {
    HttpServer::new(AppConfig::default(), dispatcher).router()
}

pub async fn send(router: &Router, method: Method, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse { status, headers, body }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::GET, uri).await
}

fn page(body: &'static str) -> Arc<site_dispatch::Exposed> {
    Expose::html().arity(1).handler(move |_| Ok(body.into()))
}

/// Three-level site exercising index/default fallback.
pub fn site_root() -> Site {
    let third = Site::new("ThirdLevel").handler("index", page("ThirdLevel.index"));

    let with_default = Site::new("SecondLevelWithDefaultHandling")
        .handler("index", page("SecondLevelWithDefault.index"))
        .handler("default", page("SecondLevelWithDefault.default"))
        .function(
            "notexposed",
            Function::new(|| "SecondLevelWithDefault.notexposed".into()),
        )
        .child("third", third);

    let no_index_with_default = Site::new("SecondLevelNoIndexWithDefault")
        .handler("default", page("SecondLevelNoIndexWithDefault.default"));

    Site::new("SiteRoot")
        .handler(
            "index",
            Expose::html()
                .doc("Root page")
                .arity(1)
                .handler(|_| Ok("SiteRoot.index".into())),
        )
        .handler("page", page("SiteRoot.page"))
        .handler("default", page("SiteRoot.default"))
        .child("noIndexWithDefault", no_index_with_default)
        .child("withDefault", with_default)
        .child("withoutDefault", Site::new("SecondLevelWithoutDefaultHandling"))
}

/// Handlers with and without query parameters.
pub fn parameter_root() -> Site {
    Site::new("ParameterSiteRoot")
        .handler("page_without_params", page(""))
        .handler(
            "page_with_params_dictionary_as_input",
            Expose::html()
                .accepts(Accepts::Any)
                .arity(2)
                .handler(|call| {
                    serde_json::to_string(call.args())
                        .map(Into::into)
                        .map_err(|e| HandlerError::Failed(e.to_string()))
                }),
        )
        .handler(
            "page_with_two_params",
            Expose::html()
                .accepts(Accepts::keys(["a", "b"]))
                .handler(|call| {
                    Ok(format!(
                        "{}-{}",
                        call.text("a").unwrap_or("?"),
                        call.text("b").unwrap_or("?")
                    )
                    .into())
                }),
        )
}

/// Handlers declaring different content types and encodings.
pub fn content_type_root() -> Site {
    const JSON: &str = "application/json; charset=utf-8";
    const TEXT: &str = "application/text; charset=utf-8";

    Site::new("ContentTypeSiteRoot")
        .handler("html", page("HTML"))
        .handler(
            "zipped_html",
            Expose::html()
                .encoding("gzip")
                .handler(|_| Ok(zip_it("HTML Zipped", 5)?.into())),
        )
        .handler(
            "json",
            Expose::new(JSON).handler(|_| {
                serde_json::to_string_pretty("JSON")
                    .map(Into::into)
                    .map_err(|e| HandlerError::Failed(e.to_string()))
            }),
        )
        .handler(
            "zipped_json",
            Expose::new(JSON).encoding("gzip").handler(|_| {
                let json = serde_json::to_string_pretty("JSON Zipped")
                    .map_err(|e| HandlerError::Failed(e.to_string()))?;
                Ok(zip_it(json, 5)?.into())
            }),
        )
        .handler(
            "text_as_downloadable_file",
            Expose::new(TEXT).handler(|call| {
                call.set_header("content-disposition", "attachment;filename=myfile.csv");
                Ok("text file content".into())
            }),
        )
        .handler(
            "zipped_text_as_downloadable_file",
            Expose::new(TEXT).encoding("gzip").handler(|call| {
                call.set_header("content-disposition", "attachment;filename=myfile.csv");
                Ok(zip_it("zipped text file content", 5)?.into())
            }),
        )
}

pub fn dispatcher(site: Site) -> Arc<Dispatcher> {
    Arc::new(Dispatcher::new(Root::node(site)))
}
