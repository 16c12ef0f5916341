// Generation engine: prompt building, the completion round trip, and
// PDF assembly for both output shapes.
// All LLM calls go through completion:: — no direct HTTP calls here.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
