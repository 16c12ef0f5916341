use std::fmt;

use anyhow::{Context, Result};

use crate::render::RenderStyle;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
///
/// The Debug impl is manual so the API key can never leak through a
/// `{:?}` in logs or panics.
#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    /// Document style for plain posts: flowing, canvas or branded.
    pub render_style: RenderStyle,
    pub brand_image_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            render_style: std::env::var("RENDER_STYLE")
                .unwrap_or_else(|_| "flowing".to_string())
                .parse::<RenderStyle>()
                .map_err(anyhow::Error::msg)?,
            brand_image_path: std::env::var("BRAND_IMAGE_PATH")
                .unwrap_or_else(|_| "assets/brand_header.png".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .field("render_style", &self.render_style)
            .field("brand_image_path", &self.brand_image_path)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
