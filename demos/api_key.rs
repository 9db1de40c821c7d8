//! Run with
//!
//! ```not_rust
//! cargo run --example api_key --features="axum"
//! ```
//!

use apikey_header::{
    authorize::header::api_key::DefaultApiKeyExtractor, extension::ExtensionLayerExt,
    extract::Extracted, ApiKey,
};
use axum::{response::IntoResponse, routing::get, Router};

#[path = "../util/util.rs"]
mod util;

async fn api_key(Extracted(api_key): Extracted<ApiKey>) -> impl IntoResponse {
    // Looking the key up is up to the application
    format!("You used an api key with {} characters", api_key.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    util::init("api_key")?;

    let layer = DefaultApiKeyExtractor::new().layer();

    let app = Router::new()
        // curl -H "Authorization: ApiKey api-key-1" localhost:5000
        .route("/", get(api_key))
        .layer(layer)
        // curl -H "Authorization: Bearer api-key-1" localhost:5000
        .layer(util::trace_layer());

    util::serve(app).await
}
