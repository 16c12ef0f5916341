use std::sync::Arc;

use crate::completion::CompletionBackend;
use crate::render::DocumentRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend behind the trait seam so handler tests can
    /// swap in a stub with a call counter.
    pub completion: Arc<dyn CompletionBackend>,
    /// Renderer for plain posts, picked by RENDER_STYLE at startup.
    pub post_renderer: Arc<dyn DocumentRenderer>,
    /// Carousels always use the branded deck renderer.
    pub carousel_renderer: Arc<dyn DocumentRenderer>,
}
