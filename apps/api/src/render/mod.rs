// Document rendering: three PDF styles behind one trait.
// Rendering is CPU-bound; callers run it inside tokio::task::spawn_blocking.

pub mod canvas;
pub mod carousel;
pub mod encoding;
pub mod flowing;
pub mod metrics;
pub mod page;

use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::models::GeneratedContent;

// Re-export the public API consumed by other modules (pipeline, state, main).
pub use canvas::ManualCanvasRenderer;
pub use carousel::BrandedCarouselRenderer;
pub use flowing::FlowingTextRenderer;
pub use page::PageGeometry;

/// Typed failures from document rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("brand image not found at {path}")]
    MissingAsset { path: String },

    #[error("character {ch:?} cannot be encoded for the built-in font")]
    UnsupportedGlyph { ch: char },

    #[error("the {style} renderer cannot draw this content shape")]
    UnsupportedContent { style: &'static str },

    #[error("page geometry leaves no room for text: {0}")]
    Geometry(String),

    #[error("PDF library error: {0}")]
    Pdf(String),
}

/// A PDF rendering strategy. Implementations are stateless and cheap to
/// share; rendering is synchronous.
pub trait DocumentRenderer: Send + Sync {
    /// Style name used in logs and error messages.
    fn style_name(&self) -> &'static str;

    /// Renders the content to a complete PDF document. A successful
    /// buffer always starts with the `%PDF` signature.
    fn render(&self, content: &GeneratedContent, title: &str) -> Result<Vec<u8>, RenderError>;
}

/// Which renderer backs the posts endpoint. Parsed from `RENDER_STYLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Flowing,
    Canvas,
    Branded,
}

impl FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flowing" => Ok(RenderStyle::Flowing),
            "canvas" => Ok(RenderStyle::Canvas),
            "branded" => Ok(RenderStyle::Branded),
            other => Err(format!(
                "unknown RENDER_STYLE '{other}' (expected flowing, canvas or branded)"
            )),
        }
    }
}

/// Builds the renderer for a configured style. Only the branded style
/// needs the brand image path.
pub fn renderer_for_style(style: RenderStyle, brand_image_path: &str) -> Arc<dyn DocumentRenderer> {
    match style {
        RenderStyle::Flowing => Arc::new(FlowingTextRenderer::new()),
        RenderStyle::Canvas => Arc::new(ManualCanvasRenderer::new()),
        RenderStyle::Branded => Arc::new(BrandedCarouselRenderer::new(brand_image_path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_style_parses_known_values() {
        assert_eq!("flowing".parse::<RenderStyle>().unwrap(), RenderStyle::Flowing);
        assert_eq!("canvas".parse::<RenderStyle>().unwrap(), RenderStyle::Canvas);
        assert_eq!("branded".parse::<RenderStyle>().unwrap(), RenderStyle::Branded);
    }

    #[test]
    fn test_render_style_is_case_insensitive() {
        assert_eq!("Branded".parse::<RenderStyle>().unwrap(), RenderStyle::Branded);
        assert_eq!(" FLOWING ".parse::<RenderStyle>().unwrap(), RenderStyle::Flowing);
    }

    #[test]
    fn test_render_style_rejects_unknown_value() {
        let err = "fancy".parse::<RenderStyle>().expect_err("must fail");
        assert!(err.contains("fancy"), "error should echo the bad value");
    }

    #[test]
    fn test_renderer_for_style_dispatch() {
        assert_eq!(
            renderer_for_style(RenderStyle::Flowing, "assets/brand_header.png").style_name(),
            "flowing"
        );
        assert_eq!(
            renderer_for_style(RenderStyle::Canvas, "assets/brand_header.png").style_name(),
            "canvas"
        );
        assert_eq!(
            renderer_for_style(RenderStyle::Branded, "assets/brand_header.png").style_name(),
            "branded"
        );
    }
}
