//! Axum route handlers for the Generation API.
//!
//! The PDF travels inside the JSON response as base64 so one submit
//! returns the preview text and the download together.

use axum::extract::State;
use axum::Json;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::pipeline::{generate_carousel, generate_post};
use crate::models::JobInputs;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub post_text: String,
    pub filename: String,
    pub pdf_base64: String,
}

#[derive(Debug, Serialize)]
pub struct SlidePreview {
    pub title: &'static str,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct CarouselResponse {
    pub caption: String,
    pub slides: Vec<SlidePreview>,
    pub filename: String,
    pub pdf_base64: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/posts
///
/// Drafts a plain job post from the form fields and renders it with
/// the configured document style.
pub async fn handle_generate_post(
    State(state): State<AppState>,
    Json(inputs): Json<JobInputs>,
) -> Result<Json<PostResponse>, AppError> {
    if inputs.role.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter at least a Role / Job Title.".to_string(),
        ));
    }

    let artifact =
        generate_post(state.completion.as_ref(), state.post_renderer.clone(), &inputs).await?;

    Ok(Json(PostResponse {
        post_text: artifact.post_text,
        filename: artifact.filename,
        pdf_base64: BASE64.encode(&artifact.pdf),
    }))
}

/// POST /api/v1/carousels
///
/// Turns a pasted job description into a branded six-slide deck plus
/// a LinkedIn caption.
pub async fn handle_generate_carousel(
    State(state): State<AppState>,
    Json(inputs): Json<JobInputs>,
) -> Result<Json<CarouselResponse>, AppError> {
    if inputs.role.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter at least a Role / Job Title.".to_string(),
        ));
    }
    if inputs.jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Paste the job description text before generating a carousel.".to_string(),
        ));
    }

    let artifact = generate_carousel(
        state.completion.as_ref(),
        state.carousel_renderer.clone(),
        &inputs,
    )
    .await?;

    let slides = artifact
        .content
        .slides()
        .into_iter()
        .map(|(title, body)| SlidePreview {
            title,
            body: body.to_string(),
        })
        .collect();

    Ok(Json(CarouselResponse {
        caption: artifact.content.linkedin_post,
        slides,
        filename: artifact.filename,
        pdf_base64: BASE64.encode(&artifact.pdf),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::{CompletionBackend, CompletionCall, CompletionError};
    use crate::render::{BrandedCarouselRenderer, FlowingTextRenderer};
    use crate::routes::build_router;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use printpdf::image_crate::{ImageBuffer, Rgb};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    struct StubBackend {
        reply: &'static str,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CompletionBackend for StubBackend {
        async fn complete(&self, _call: &CompletionCall) -> Result<String, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }
    }

    /// Router wired with a stub backend and real renderers. Returns the
    /// backend call counter so tests can assert on it.
    fn test_router(reply: &'static str, dir: &TempDir) -> (Router, Arc<AtomicUsize>) {
        let brand = dir.path().join("brand.png");
        ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(48, 16, Rgb([16u8, 64, 128]))
            .save(&brand)
            .unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let state = AppState {
            completion: Arc::new(StubBackend {
                reply,
                calls: calls.clone(),
            }),
            post_renderer: Arc::new(FlowingTextRenderer::new()),
            carousel_renderer: Arc::new(BrandedCarouselRenderer::new(brand)),
        };
        (build_router(state), calls)
    }

    async fn post_json(
        router: Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    const CAROUSEL_REPLY: &str = r#"{
        "linkedin_post": "We're hiring a Backend Engineer. Deck below!",
        "slide1": "Backend Engineer\nRemote, India",
        "slide2": "Payments platform team",
        "slide3": "Own the API\nShip weekly",
        "slide4": "Go, PostgreSQL\n4+ years",
        "slide5": "Small team, real ownership",
        "slide6": "Apply at careers@example.com"
    }"#;

    #[tokio::test]
    async fn test_post_end_to_end_with_stubbed_completion() {
        let dir = TempDir::new().unwrap();
        let (router, calls) = test_router("  Hiring a Backend Engineer! Apply today.  ", &dir);

        let (status, json) = post_json(
            router,
            "/api/v1/posts",
            serde_json::json!({
                "role": "Backend Engineer",
                "location": "Remote",
                "skills": "Go, PostgreSQL"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(json["post_text"], "Hiring a Backend Engineer! Apply today.");
        assert_eq!(json["filename"], "Backend_Engineer_job_post.pdf");

        let pdf = BASE64
            .decode(json["pdf_base64"].as_str().unwrap())
            .expect("pdf_base64 must decode");
        assert!(!pdf.is_empty());
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_empty_role_never_calls_the_backend() {
        let dir = TempDir::new().unwrap();
        let (router, calls) = test_router("unused", &dir);

        let (status, json) = post_json(
            router,
            "/api/v1/posts",
            serde_json::json!({ "role": "   " }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(calls.load(Ordering::SeqCst), 0, "validation must short-circuit");
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            json["error"]["message"],
            "Please enter at least a Role / Job Title."
        );
    }

    #[tokio::test]
    async fn test_carousel_requires_jd_text() {
        let dir = TempDir::new().unwrap();
        let (router, calls) = test_router("unused", &dir);

        let (status, json) = post_json(
            router,
            "/api/v1/carousels",
            serde_json::json!({ "role": "Backend Engineer" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_carousel_end_to_end_with_stubbed_completion() {
        let dir = TempDir::new().unwrap();
        let (router, _calls) = test_router(CAROUSEL_REPLY, &dir);

        let (status, json) = post_json(
            router,
            "/api/v1/carousels",
            serde_json::json!({
                "role": "Backend Engineer",
                "country": "india",
                "jd_text": "We need a backend engineer for our payments API."
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["caption"], "We're hiring a Backend Engineer. Deck below!");
        assert_eq!(json["filename"], "Backend_Engineer_carousel.pdf");

        let slides = json["slides"].as_array().unwrap();
        assert_eq!(slides.len(), 6);
        assert_eq!(slides[0]["title"], "We're Hiring");
        assert_eq!(slides[5]["title"], "How to Apply");
        assert!(slides[0]["body"].as_str().unwrap().contains("Backend Engineer"));

        let pdf = BASE64
            .decode(json["pdf_base64"].as_str().unwrap())
            .expect("pdf_base64 must decode");
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_carousel_missing_slide_key_maps_to_completion_error() {
        let dir = TempDir::new().unwrap();
        let (router, _calls) =
            test_router(r#"{"linkedin_post": "caption", "slide1": "only one"}"#, &dir);

        let (status, json) = post_json(
            router,
            "/api/v1/carousels",
            serde_json::json!({
                "role": "Backend Engineer",
                "jd_text": "Some JD text."
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"]["code"], "COMPLETION_ERROR");
        assert!(
            json["error"]["detail"]
                .as_str()
                .unwrap()
                .contains("malformed"),
            "detail should carry the parse failure, got {:?}",
            json["error"]["detail"]
        );
    }

    #[tokio::test]
    async fn test_unknown_country_is_rejected_by_deserialization() {
        let dir = TempDir::new().unwrap();
        let (router, calls) = test_router("unused", &dir);

        // Rejection bodies are plain text, so only the status matters here.
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/carousels")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"role": "Backend Engineer", "country": "atlantis", "jd_text": "JD"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
