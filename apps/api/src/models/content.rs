//! Typed content produced by the completion service.

use serde::{Deserialize, Serialize};

/// Display titles for the six carousel slides, in page order.
pub const SLIDE_TITLES: [&str; 6] = [
    "We're Hiring",
    "About the Role",
    "What You'll Do",
    "What We're Looking For",
    "Why Join Us",
    "How to Apply",
];

/// Structured carousel payload. All six slide fields are required; a
/// reply missing any of them fails deserialization naming the field,
/// which the pipeline surfaces as a malformed-response error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselContent {
    /// Caption to post alongside the document. Optional in the reply.
    #[serde(default)]
    pub linkedin_post: String,
    pub slide1: String,
    pub slide2: String,
    pub slide3: String,
    pub slide4: String,
    pub slide5: String,
    pub slide6: String,
}

impl CarouselContent {
    /// Slides in page order, paired with their display titles.
    pub fn slides(&self) -> [(&'static str, &str); 6] {
        [
            (SLIDE_TITLES[0], self.slide1.as_str()),
            (SLIDE_TITLES[1], self.slide2.as_str()),
            (SLIDE_TITLES[2], self.slide3.as_str()),
            (SLIDE_TITLES[3], self.slide4.as_str()),
            (SLIDE_TITLES[4], self.slide5.as_str()),
            (SLIDE_TITLES[5], self.slide6.as_str()),
        ]
    }
}

/// What one generation produced: a plain post or carousel slides.
#[derive(Debug, Clone)]
pub enum GeneratedContent {
    Post(String),
    Carousel(CarouselContent),
}
