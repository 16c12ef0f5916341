mod completion;
mod config;
mod errors;
mod generation;
mod models;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::completion::OpenAiClient;
use crate::config::Config;
use crate::render::{renderer_for_style, BrandedCarouselRenderer, DocumentRenderer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Postsmith API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the completion client
    let client = OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    );
    info!("Completion client initialized (model: {})", completion::MODEL);

    // Renderer for plain posts, per RENDER_STYLE
    let post_renderer = renderer_for_style(config.render_style, &config.brand_image_path);
    info!("Post renderer: {}", post_renderer.style_name());

    // Carousels are always the branded deck
    let carousel_renderer: Arc<dyn DocumentRenderer> = Arc::new(BrandedCarouselRenderer::new(
        config.brand_image_path.clone(),
    ));

    // Build app state
    let state = AppState {
        completion: Arc::new(client),
        post_renderer,
        carousel_renderer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
