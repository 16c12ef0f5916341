// All LLM prompt constants for the Generation module.

/// System prompt for plain job posts.
pub const POST_SYSTEM: &str =
    "You are an expert recruiter and copywriter who writes high-conversion \
    job posts for LinkedIn. You keep things clear, structured and easy to scan.";

/// Plain-post prompt template.
/// Replace: {role}, {location}, {experience}, {skills}, {extra_notes}
pub const POST_PROMPT_TEMPLATE: &str = r#"Create a detailed LinkedIn job post for the following role.

Role: {role}
Location: {location}
Experience required: {experience}
Key skills: {skills}
Extra notes from the hiring manager: {extra_notes}

Structure the post as:
1. Strong hook line (1–2 sentences)
2. Short intro about the company and team
3. 5–8 bullet points on responsibilities
4. 5–8 bullet points on must-have & good-to-have skills
5. 3–4 lines on culture, growth, and why join us
6. Clear CTA to apply, including contact / email placeholder.

Keep tone professional, friendly and concise."#;

/// System prompt for carousel generation — enforces JSON-only output.
pub const CAROUSEL_SYSTEM: &str =
    "You are an expert recruiter and social media copywriter who turns \
    job descriptions into sharp LinkedIn carousel decks. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Carousel prompt template.
/// Replace: {country}, {client_context}, {language_rule}, {jd_text}
pub const CAROUSEL_PROMPT_TEMPLATE: &str = r#"Turn the following job description into a 6-slide LinkedIn carousel for hiring in {country}.

Client context from the recruiter: {client_context}

{language_rule}

SLIDE OUTLINE (exactly these six slides, in this order):
- slide1 — "We're Hiring": role name and location hook
- slide2 — "About the Role": team and mission in two or three short lines
- slide3 — "What You'll Do": top responsibilities
- slide4 — "What We're Looking For": must-have skills and experience
- slide5 — "Why Join Us": culture, growth, benefits
- slide6 — "How to Apply": clear call to action with a contact placeholder

RULES:
1. Maximum 8 words per line on every slide
2. 3-5 lines per slide, separated by newline characters
3. No hashtags and no emoji on the slides
4. linkedin_post is the caption for the carousel: 3-5 sentences, hashtags allowed there

Return a JSON object with this EXACT schema (no extra fields):
{
  "linkedin_post": "Caption text for the carousel post",
  "slide1": "We're hiring a...\nLine two",
  "slide2": "...",
  "slide3": "...",
  "slide4": "...",
  "slide5": "...",
  "slide6": "..."
}

JOB DESCRIPTION:
{jd_text}"#;

/// Language rule for bilingual markets. Replace `{language}` before sending.
pub const BILINGUAL_RULE_TEMPLATE: &str =
    "LANGUAGE RULE: Write every slide line in {language} first, \
    then a short English translation on the next line. \
    Keep the linkedin_post caption in English.";

/// Language rule for single-language markets.
pub const ENGLISH_ONLY_RULE: &str =
    "LANGUAGE RULE: Write all slide text in clear, simple English.";

use crate::models::JobInputs;

/// Fills the plain-post template from the form fields. Pure string
/// formatting; empty optional fields interpolate as empty text.
pub fn build_post_prompt(inputs: &JobInputs) -> String {
    POST_PROMPT_TEMPLATE
        .replace("{role}", &inputs.role)
        .replace("{location}", &inputs.location)
        .replace("{experience}", &inputs.experience)
        .replace("{skills}", &inputs.skills)
        .replace("{extra_notes}", &inputs.extra_notes)
}

/// Fills the carousel template, picking the language rule from the
/// target market.
pub fn build_carousel_prompt(inputs: &JobInputs) -> String {
    let language_rule = match inputs.country.bilingual_language() {
        Some(language) => BILINGUAL_RULE_TEMPLATE.replace("{language}", language),
        None => ENGLISH_ONLY_RULE.to_string(),
    };
    CAROUSEL_PROMPT_TEMPLATE
        .replace("{country}", inputs.country.display_name())
        .replace("{client_context}", &inputs.client_context)
        .replace("{language_rule}", &language_rule)
        .replace("{jd_text}", &inputs.jd_text)
}
