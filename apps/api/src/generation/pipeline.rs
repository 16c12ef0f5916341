//! Generation pipeline — orchestrates one request end to end.
//!
//! Flow: build prompt → completion call → (carousel: validate the
//! structured reply) → render PDF off the async runtime → artifact.
//!
//! Rendering is CPU-bound, so it runs under `spawn_blocking`; the
//! handlers never hold the runtime hostage on a long document.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use crate::completion::{parse_structured, CompletionBackend, CompletionCall};
use crate::errors::AppError;
use crate::generation::prompts::{
    build_carousel_prompt, build_post_prompt, CAROUSEL_SYSTEM, POST_SYSTEM,
};
use crate::models::{CarouselContent, GeneratedContent, JobInputs};
use crate::render::DocumentRenderer;

/// Sampling temperature for free-text post drafts. Structured carousel
/// calls leave temperature unset and rely on JSON mode instead.
const POST_TEMPERATURE: f32 = 0.8;

// ────────────────────────────────────────────────────────────────────────────
// Artifacts
// ────────────────────────────────────────────────────────────────────────────

/// Everything a successful post generation produces.
#[derive(Debug, Clone)]
pub struct PostArtifact {
    pub post_text: String,
    pub filename: String,
    pub pdf: Bytes,
}

/// Everything a successful carousel generation produces.
#[derive(Debug, Clone)]
pub struct CarouselArtifact {
    pub content: CarouselContent,
    pub filename: String,
    pub pdf: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipelines
// ────────────────────────────────────────────────────────────────────────────

/// Drafts a plain job post and renders it with the configured style.
pub async fn generate_post(
    backend: &dyn CompletionBackend,
    renderer: Arc<dyn DocumentRenderer>,
    inputs: &JobInputs,
) -> Result<PostArtifact, AppError> {
    info!("generating job post for role {:?}", inputs.role);

    let call = CompletionCall {
        system: POST_SYSTEM.to_string(),
        user: build_post_prompt(inputs),
        temperature: Some(POST_TEMPERATURE),
        json_mode: false,
    };
    let post_text = backend.complete(&call).await?.trim().to_string();

    let pdf = render_document(
        renderer,
        GeneratedContent::Post(post_text.clone()),
        document_title(&inputs.role),
    )
    .await?;

    Ok(PostArtifact {
        post_text,
        filename: download_filename(&inputs.role, "job_post"),
        pdf,
    })
}

/// Drafts a six-slide carousel and renders it as a branded deck.
pub async fn generate_carousel(
    backend: &dyn CompletionBackend,
    renderer: Arc<dyn DocumentRenderer>,
    inputs: &JobInputs,
) -> Result<CarouselArtifact, AppError> {
    info!(
        "generating carousel for role {:?}, market {}",
        inputs.role,
        inputs.country.display_name()
    );

    let call = CompletionCall {
        system: CAROUSEL_SYSTEM.to_string(),
        user: build_carousel_prompt(inputs),
        temperature: None,
        json_mode: true,
    };
    let reply = backend.complete(&call).await?;

    // Validate the slide keys right after the call; a missing key is a
    // malformed response, not a render-time surprise.
    let content: CarouselContent = parse_structured(&reply)?;

    let pdf = render_document(
        renderer,
        GeneratedContent::Carousel(content.clone()),
        document_title(&inputs.role),
    )
    .await?;

    Ok(CarouselArtifact {
        content,
        filename: download_filename(&inputs.role, "carousel"),
        pdf,
    })
}

/// Runs the renderer on the blocking pool and returns the PDF bytes.
async fn render_document(
    renderer: Arc<dyn DocumentRenderer>,
    content: GeneratedContent,
    title: String,
) -> Result<Bytes, AppError> {
    let style = renderer.style_name();
    let pdf = tokio::task::spawn_blocking(move || renderer.render(&content, &title))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task panicked: {e}")))??;

    info!("rendered {} bytes with {} renderer", pdf.len(), style);
    Ok(Bytes::from(pdf))
}

// ────────────────────────────────────────────────────────────────────────────
// Naming helpers
// ────────────────────────────────────────────────────────────────────────────

/// PDF metadata title derived from the role, `Job_Posting` when blank.
pub fn document_title(role: &str) -> String {
    let trimmed = role.trim();
    if trimmed.is_empty() {
        "Job_Posting".to_string()
    } else {
        trimmed.replace(' ', "_")
    }
}

/// Download filename from the role. Whitespace becomes `_` and anything
/// outside ASCII alphanumerics, `_` and `-` is dropped so the name
/// survives Content-Disposition and shells unquoted.
pub fn download_filename(role: &str, suffix: &str) -> String {
    let stem: String = role
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    if stem.is_empty() {
        format!("{suffix}.pdf")
    } else {
        format!("{stem}_{suffix}.pdf")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
