//! Page geometry and vertical cursor bookkeeping shared by the renderers.
//!
//! The defaults mirror the classic recruiter layout: A4, 11 pt body
//! text on a 6 mm line, 15 mm margins, page break when the next
//! baseline would cross the bottom margin.

/// A4 portrait, in millimetres.
pub const A4_PORTRAIT: (f32, f32) = (210.0, 297.0);
/// A4 landscape, in millimetres.
pub const A4_LANDSCAPE: (f32, f32) = (297.0, 210.0);

pub const DEFAULT_FONT_SIZE_PT: f32 = 11.0;
pub const DEFAULT_LINE_HEIGHT_MM: f32 = 6.0;
pub const DEFAULT_MARGIN_MM: f32 = 15.0;

/// Layout constants for one page style.
///
/// Carried as data rather than hardcoded in the draw loops so tests can
/// shrink the page and force break behavior with a handful of lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    /// One margin, applied on all four sides.
    pub margin_mm: f32,
    pub font_size_pt: f32,
    pub line_height_mm: f32,
}

impl PageGeometry {
    pub fn a4_portrait() -> Self {
        Self {
            width_mm: A4_PORTRAIT.0,
            height_mm: A4_PORTRAIT.1,
            margin_mm: DEFAULT_MARGIN_MM,
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            line_height_mm: DEFAULT_LINE_HEIGHT_MM,
        }
    }

    pub fn a4_landscape() -> Self {
        Self {
            width_mm: A4_LANDSCAPE.0,
            height_mm: A4_LANDSCAPE.1,
            ..Self::a4_portrait()
        }
    }

    /// Usable text width between the side margins.
    pub fn text_width_mm(&self) -> f32 {
        self.width_mm - 2.0 * self.margin_mm
    }

    /// Whole text lines that fit between the top and bottom margins.
    /// Zero means the geometry cannot hold any text at all.
    pub fn lines_per_page(&self) -> usize {
        let usable = self.height_mm - 2.0 * self.margin_mm;
        if usable <= 0.0 || self.line_height_mm <= 0.0 {
            return 0;
        }
        (usable / self.line_height_mm).floor() as usize
    }

    /// Pages needed for `line_count` lines at this geometry.
    /// Zero lines still produce one (empty) page.
    pub fn pages_required(&self, line_count: usize) -> usize {
        let per_page = self.lines_per_page().max(1);
        if line_count == 0 {
            1
        } else {
            (line_count + per_page - 1) / per_page
        }
    }
}

/// Tracks the next text baseline while filling a page top to bottom.
///
/// PDF user space puts the origin at the bottom-left corner, so the
/// cursor starts at `height - margin` and steps DOWN one line height
/// per line. `take_line` hands out the next baseline, or `None` once
/// the line would cross the bottom margin; the caller then opens a new
/// page and calls `reset`.
#[derive(Debug, Clone, Copy)]
pub struct PageCursor {
    y_mm: f32,
    geometry: PageGeometry,
}

impl PageCursor {
    pub fn top(geometry: PageGeometry) -> Self {
        Self {
            y_mm: geometry.height_mm - geometry.margin_mm,
            geometry,
        }
    }

    /// Claims the next baseline, or `None` when the page is full.
    pub fn take_line(&mut self) -> Option<f32> {
        let next = self.y_mm - self.geometry.line_height_mm;
        if next < self.geometry.margin_mm {
            return None;
        }
        self.y_mm = next;
        Some(next)
    }

    pub fn reset(&mut self) {
        self.y_mm = self.geometry.height_mm - self.geometry.margin_mm;
    }
}
