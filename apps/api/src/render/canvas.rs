//! Manual-canvas renderer: verbatim lines at an explicit cursor, no wrapping.
//!
//! Mirrors the low-level canvas approach: each source line is drawn
//! exactly as given (long lines overrun the right margin rather than
//! wrap), and the only layout decision is the page break, taken when
//! the next baseline would cross the bottom margin. Out-of-charset
//! characters degrade to `?` instead of failing the render.

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::models::GeneratedContent;
use crate::render::encoding::to_win_ansi_lossy;
use crate::render::page::{PageCursor, PageGeometry};
use crate::render::{DocumentRenderer, RenderError};

pub struct ManualCanvasRenderer {
    geometry: PageGeometry,
}

impl ManualCanvasRenderer {
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

impl Default for ManualCanvasRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits source lines into pages of at most `lines_per_page` lines.
///
/// Pure so the break arithmetic is testable without touching a PDF:
/// the result always has `geometry.pages_required(lines.len())` pages.
pub fn paginate<'a>(lines: &[&'a str], geometry: &PageGeometry) -> Vec<Vec<&'a str>> {
    let per_page = geometry.lines_per_page().max(1);
    if lines.is_empty() {
        return vec![Vec::new()];
    }
    lines.chunks(per_page).map(|chunk| chunk.to_vec()).collect()
}

impl DocumentRenderer for ManualCanvasRenderer {
    fn style_name(&self) -> &'static str {
        "canvas"
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

        let lossy = to_win_ansi_lossy(text);
        let lines: Vec<&str> = lossy.lines().collect();
        let pages = paginate(&lines, &geo);

        let (doc, first_page, first_layer) =
            PdfDocument::new(title, Mm(geo.width_mm), Mm(geo.height_mm), "text");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        for (idx, page_lines) in pages.iter().enumerate() {
            let layer = if idx == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, page_layer) = doc.add_page(Mm(geo.width_mm), Mm(geo.height_mm), "text");
                doc.get_page(page).get_layer(page_layer)
            };

            let mut cursor = PageCursor::top(geo);
            for line in page_lines {
                let y = cursor.take_line().ok_or_else(|| {
                    RenderError::Geometry("page cannot hold a single line".to_string())
                })?;
                if !line.is_empty() {
                    layer.use_text(*line, geo.font_size_pt, Mm(geo.margin_mm), Mm(y), &font);
                }
            }
        }

        doc.save_to_bytes().map_err(|e| RenderError::Pdf(e.to_string()))
    }
}
