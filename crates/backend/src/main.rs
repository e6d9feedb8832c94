pub mod handlers;
pub mod routes;
pub mod shared;

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use handlers::gateway::AppState;
use shared::config::{get_static_dir, load_config};
use shared::upstream::PhpUpstream;

/// One line per request: time, duration, status, method, path
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    // cyan for 2xx, brown for everything else
    let color_code = if response.status().is_success() { "36" } else { "33" };
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {} {:>6} {}",
        color_code,
        chrono::Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        status,
        method,
        path
    );
    response
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("gateway.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = load_config()?;
    let upstream = PhpUpstream::new(config.upstream_base(), config.upstream_timeout())?;
    tracing::info!("Forwarding /api/*.php to {}", config.upstream_base());

    let static_dir = get_static_dir(&config);
    tracing::info!("Serving console from {}", static_dir.display());

    let state = AppState {
        upstream: Arc::new(upstream),
    };
    let app = routes::configure_routes(state, static_dir).layer(middleware::from_fn(request_logger));

    let addr = config.bind_addr()?;
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", addr.port());
            } else {
                tracing::error!("Failed to bind to {}: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;
    Ok(())
}
