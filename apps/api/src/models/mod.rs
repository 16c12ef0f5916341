pub mod content;
pub mod job;

// Re-export the types the rest of the crate consumes.
pub use content::{CarouselContent, GeneratedContent, SLIDE_TITLES};
pub use job::{Country, JobInputs};
