//! Auto-flow renderer: word-wrapped lines, automatic page breaks.
//!
//! The closest analog of the classic recruiter PDF: body text wrapped
//! at the margins, pages opened as needed. Strict about encoding: any
//! character the built-in font cannot carry fails the render instead of
//! degrading silently.

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::debug;

use crate::models::GeneratedContent;
use crate::render::encoding::first_unencodable;
use crate::render::metrics::{get_metrics, FontFace};
use crate::render::page::{PageCursor, PageGeometry};
use crate::render::{DocumentRenderer, RenderError};

pub struct FlowingTextRenderer {
    geometry: PageGeometry,
}

impl FlowingTextRenderer {
    pub fn new() -> Self {
        Self {
            geometry: PageGeometry::a4_portrait(),
        }
    }

    /// Custom geometry, used by tests to force page breaks cheaply.
    #[allow(dead_code)]
    pub fn with_geometry(geometry: PageGeometry) -> Self {
        Self { geometry }
    }
}

impl Default for FlowingTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for FlowingTextRenderer {
    fn style_name(&self) -> &'static str {
        "flowing"
    }

    fn render(&self, content: &GeneratedContent, title: &str) -> Result<Vec<u8>, RenderError> {
        let text = match content {
            GeneratedContent::Post(text) => text,
            GeneratedContent::Carousel(_) => {
                return Err(RenderError::UnsupportedContent {
                    style: self.style_name(),
                })
            }
        };

        let geo = self.geometry;
        if geo.lines_per_page() == 0 {
            return Err(RenderError::Geometry(format!(
                "a {} mm line does not fit a {} x {} mm page with {} mm margins",
                geo.line_height_mm, geo.width_mm, geo.height_mm, geo.margin_mm
            )));
        }
        if let Some(ch) = first_unencodable(text) {
            return Err(RenderError::UnsupportedGlyph { ch });
        }

        let metrics = get_metrics(FontFace::Helvetica);
        let max_width = geo.text_width_mm();

        // Wrap every source line; blank source lines keep one visual
        // line so paragraph spacing survives.
        let mut lines: Vec<String> = Vec::new();
        for raw in text.lines() {
            let wrapped = metrics.wrap(raw, geo.font_size_pt, max_width);
            if wrapped.is_empty() {
                lines.push(String::new());
            } else {
                lines.extend(wrapped);
            }
        }

        debug!(
            "flowing layout: {} wrapped lines over {} pages",
            lines.len(),
            geo.pages_required(lines.len())
        );

        let (doc, first_page, first_layer) =
            PdfDocument::new(title, Mm(geo.width_mm), Mm(geo.height_mm), "text");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        let mut cursor = PageCursor::top(geo);

        for line in &lines {
            let y = match cursor.take_line() {
                Some(y) => y,
                None => {
                    let (page, page_layer) =
                        doc.add_page(Mm(geo.width_mm), Mm(geo.height_mm), "text");
                    layer = doc.get_page(page).get_layer(page_layer);
                    cursor.reset();
                    cursor.take_line().ok_or_else(|| {
                        RenderError::Geometry("page cannot hold a single line".to_string())
                    })?
                }
            };
            if !line.is_empty() {
                layer.use_text(line.as_str(), geo.font_size_pt, Mm(geo.margin_mm), Mm(y), &font);
            }
        }

        doc.save_to_bytes().map_err(|e| RenderError::Pdf(e.to_string()))
    }
}
