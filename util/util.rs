use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

const DEFAULT_SOCKET_ADDR: &str = "127.0.0.1:5000";

/// Loads `.env` and installs the global tracing subscriber.
pub fn init(exe: &str) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "{exe}=trace,apikey_header=trace,tower_http=trace"
        ))
    });

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
        .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO))
}

/// Serves `app` on `SOCKET_ADDR`, or 127.0.0.1:5000 when unset.
pub async fn serve(app: axum::Router<()>) -> anyhow::Result<()> {
    let socket_addr = std::env::var("SOCKET_ADDR")
        .unwrap_or_else(|_| DEFAULT_SOCKET_ADDR.to_owned())
        .parse::<SocketAddr>()
        .context("Invalid SOCKET_ADDR")?;

    tracing::info!(%socket_addr, "Starting server");

    let listener = TcpListener::bind(&socket_addr)
        .await
        .context("Bind failed")?;

    axum::serve(listener, app).await.context("Server failed")?;

    Ok(())
}
