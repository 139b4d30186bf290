use crate::{
    config::Config,
    errors::DecodeFailure,
    handler::{failure, handle},
    logger::setup_logger,
    models::{InvocationRecord, ResponseRecord},
    shutdown::shutdown_signal,
};
use anyhow::{Context, Result};
use axum::{
    Router,
    body::Bytes,
    extract::DefaultBodyLimit,
    response::Json,
    routing::{get, post},
};
use log::info;
use serde_json::{Value, json};

mod config;
mod errors;
mod handler;
mod json;
mod logger;
mod models;
mod shutdown;

#[tokio::main]
async fn main() -> Result<()> {
    setup_logger()?;

    let config = Config::from_env()?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(
        "Running on {addr}, accepting bodies up to {} bytes",
        config.max_body_bytes
    );
    axum::serve(listener, router(config.max_body_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn router(max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", post(gateway))
        .route("/invoke", post(invoke))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_body_bytes))
}

/// Function-container contract: the request is the raw event, the reply is
/// the response record. The function's status lives inside the record.
async fn invoke(event: Bytes) -> Json<ResponseRecord> {
    let response = match InvocationRecord::from_slice(&event) {
        Ok(invocation) => handle(&invocation),
        Err(e) => failure(&e),
    };
    Json(response)
}

/// Proxy-style entry point: the request body is the base64 text itself.
async fn gateway(body: Bytes) -> ResponseRecord {
    match std::str::from_utf8(&body) {
        Ok(text) => handle(&InvocationRecord::with_body(text)),
        Err(_) => failure(&DecodeFailure::NotUtf8),
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
