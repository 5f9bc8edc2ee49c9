//! site-dispatch demo server.
//!
//! Serves a small example tree:
//!
//! ```text
//! /                 DemoRoot.index
//! /echo?a=1&a=2     query arguments as JSON
//! /zipped           gzip-encoded body
//! /download         CSV with Content-Disposition
//! /docs             Docs.index
//! /docs/cors        CORS-enabled JSON
//! /anything/else    DemoRoot.default
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::Method;
use clap::Parser;
use tokio::net::TcpListener;

use site_dispatch::codec::zip_it;
use site_dispatch::config::{default_config, load_config};
use site_dispatch::observability::{logging::init_logging, metrics::init_metrics};
use site_dispatch::{Accepts, Dispatcher, Expose, HandlerError, HttpServer, Root, Site};

const JSON: &str = "application/json; charset=utf-8";

#[derive(Parser)]
#[command(name = "site-dispatch")]
#[command(about = "Serve a node tree over HTTP", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => default_config()?,
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability)?;
    tracing::info!("site-dispatch v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        default_cors = ?config.cors.default_origin,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let dispatcher = Dispatcher::new(Root::node(demo_site(config.compression.level)))
        .with_default_cors(config.cors.default_origin.clone());

    for entry in dispatcher.sitemap() {
        tracing::info!(url = %entry.url, handler = %entry.handler, "{}", entry.description);
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config, Arc::new(dispatcher));
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn demo_site(gzip_level: u32) -> Site {
    let docs = Site::new("Docs")
        .handler(
            "index",
            Expose::html()
                .doc("Documentation home")
                .handler(|_| Ok("<h1>Docs</h1>".into())),
        )
        .handler(
            "cors",
            Expose::new(JSON)
                .cors("*")
                .methods([Method::GET])
                .doc("JSON readable from any origin")
                .handler(|_| Ok(r#"{"shared":true}"#.into())),
        );

    Site::new("DemoRoot")
        .handler(
            "index",
            Expose::html()
                .doc("Landing page")
                .handler(|_| Ok("<h1>site-dispatch</h1>".into())),
        )
        .handler(
            "default",
            Expose::html()
                .doc("Fallback for unknown pages")
                .handler(|call| Ok(format!("Nothing at {}", call.path()).into())),
        )
        .handler(
            "echo",
            Expose::new(JSON)
                .accepts(Accepts::Any)
                .doc("Query arguments as JSON")
                .handler(|call| {
                    serde_json::to_string(call.args())
                        .map(Into::into)
                        .map_err(|e| HandlerError::Failed(e.to_string()))
                }),
        )
        .handler(
            "zipped",
            Expose::html()
                .encoding("gzip")
                .doc("gzip-encoded greeting")
                .handler(move |_| Ok(zip_it("Hello, compressed world", gzip_level)?.into())),
        )
        .handler(
            "download",
            Expose::new("text/csv; charset=utf-8")
                .methods([Method::GET])
                .doc("CSV download")
                .handler(|call| {
                    call.set_header("Content-Disposition", "attachment;filename=data.csv");
                    Ok("a,b\n1,2\n".into())
                }),
        )
        .child("docs", docs)
}
