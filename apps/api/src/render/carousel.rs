//! Branded carousel renderer: landscape pages topped by the brand
//! image, one slide per page with a bold title and wrapped body.
//!
//! The brand image is read from disk on every render so a swapped file
//! shows up without a restart; a missing file is a typed error. Slide
//! bodies longer than one page clip at the bottom margin; the prompt's
//! per-line word caps keep real content well inside it. Out-of-charset
//! characters degrade to `?` (bilingual Japanese bodies degrade too;
//! a CJK-capable face would need an embedded font file).

use std::path::PathBuf;

use printpdf::image_crate::{self, GenericImageView};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfLayerReference,
};

use crate::models::{CarouselContent, GeneratedContent};
use crate::render::encoding::to_win_ansi_lossy;
use crate::render::metrics::{get_metrics, FontFace};
use crate::render::page::PageGeometry;
use crate::render::{DocumentRenderer, RenderError};

/// Height the brand image is scaled to at the top of each page.
const BRAND_HEIGHT_MM: f32 = 18.0;
/// Resolution the image transform is anchored to.
const IMAGE_DPI: f32 = 300.0;
const TITLE_FONT_SIZE_PT: f32 = 20.0;
/// Brand image bottom to title baseline.
const TITLE_GAP_MM: f32 = 14.0;
/// Title baseline (or brand image bottom, for plain posts) to the
/// first body baseline.
const BODY_GAP_MM: f32 = 10.0;

pub struct BrandedCarouselRenderer {
    geometry: PageGeometry,
    brand_image_path: PathBuf,
}

impl BrandedCarouselRenderer {
    pub fn new(brand_image_path: impl Into<PathBuf>) -> Self {
        Self {
            geometry: PageGeometry::a4_landscape(),
            brand_image_path: brand_image_path.into(),
        }
    }

    /// Custom geometry, used by tests to hit the header-fit guard.
    #[allow(dead_code)]
    pub fn with_geometry(brand_image_path: impl Into<PathBuf>, geometry: PageGeometry) -> Self {
        Self {
            geometry,
            brand_image_path: brand_image_path.into(),
        }
    }

    fn load_brand_image(&self) -> Result<image_crate::DynamicImage, RenderError> {
        if !self.brand_image_path.exists() {
            return Err(RenderError::MissingAsset {
                path: self.brand_image_path.display().to_string(),
            });
        }
        image_crate::open(&self.brand_image_path)
            .map_err(|e| RenderError::Pdf(format!("brand image decode failed: {e}")))
    }

    /// Places the brand image in the top-left corner, scaled to
    /// `BRAND_HEIGHT_MM` with the aspect ratio preserved.
    fn place_brand_image(&self, layer: &PdfLayerReference, brand: &image_crate::DynamicImage) {
        let (_, px_h) = brand.dimensions();
        let native_h_mm = px_h as f32 * 25.4 / IMAGE_DPI;
        let scale = BRAND_HEIGHT_MM / native_h_mm;
        let top = self.geometry.height_mm - self.geometry.margin_mm;

        Image::from_dynamic_image(brand).add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(self.geometry.margin_mm)),
                translate_y: Some(Mm(top - BRAND_HEIGHT_MM)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(IMAGE_DPI),
                ..ImageTransform::default()
            },
        );
    }

    fn render_slides(
        &self,
        content: &CarouselContent,
        title: &str,
        brand: &image_crate::DynamicImage,
    ) -> Result<Vec<u8>, RenderError> {
        let geo = self.geometry;
        let (doc, first_page, first_layer) =
            PdfDocument::new(title, Mm(geo.width_mm), Mm(geo.height_mm), "slide");
        let body_font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let title_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        for (idx, (slide_title, body)) in content.slides().into_iter().enumerate() {
            let layer = if idx == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, page_layer) = doc.add_page(Mm(geo.width_mm), Mm(geo.height_mm), "slide");
                doc.get_page(page).get_layer(page_layer)
            };
            self.draw_slide(&layer, brand, slide_title, body, &title_font, &body_font)?;
        }

        doc.save_to_bytes().map_err(|e| RenderError::Pdf(e.to_string()))
    }

    fn draw_slide(
        &self,
        layer: &PdfLayerReference,
        brand: &image_crate::DynamicImage,
        slide_title: &str,
        body: &str,
        title_font: &IndirectFontRef,
        body_font: &IndirectFontRef,
    ) -> Result<(), RenderError> {
        let geo = self.geometry;
        self.place_brand_image(layer, brand);

        let top = geo.height_mm - geo.margin_mm;
        let title_y = top - BRAND_HEIGHT_MM - TITLE_GAP_MM;
        if title_y < geo.margin_mm {
            return Err(RenderError::Geometry(
                "page too small for the branded header".to_string(),
            ));
        }

        // Center the title; fall back to the left margin if a narrow
        // custom geometry cannot hold it.
        let title_width = get_metrics(FontFace::HelveticaBold)
            .text_width_mm(slide_title, TITLE_FONT_SIZE_PT);
        let title_x = ((geo.width_mm - title_width) / 2.0).max(geo.margin_mm);
        layer.use_text(
            slide_title,
            TITLE_FONT_SIZE_PT,
            Mm(title_x),
            Mm(title_y),
            title_font,
        );

        let metrics = get_metrics(FontFace::Helvetica);
        let max_width = geo.text_width_mm();
        let clean = to_win_ansi_lossy(body);
        let mut y = title_y - BODY_GAP_MM;

        'body: for raw in clean.lines() {
            let wrapped = metrics.wrap(raw, geo.font_size_pt, max_width);
            if wrapped.is_empty() {
                y -= geo.line_height_mm;
                continue;
            }
            for line in wrapped {
                if y < geo.margin_mm {
                    // Body longer than the slide: clip at the bottom margin.
                    break 'body;
                }
                layer.use_text(line.as_str(), geo.font_size_pt, Mm(geo.margin_mm), Mm(y), body_font);
                y -= geo.line_height_mm;
            }
        }

        Ok(())
    }

    /// Plain-post content under the branded style: the brand header
    /// tops every page and the body flows below it.
    fn render_branded_post(
        &self,
        text: &str,
        title: &str,
        brand: &image_crate::DynamicImage,
    ) -> Result<Vec<u8>, RenderError> {
        let geo = self.geometry;
        let body_top = geo.height_mm - geo.margin_mm - BRAND_HEIGHT_MM - BODY_GAP_MM;
        if body_top < geo.margin_mm {
            return Err(RenderError::Geometry(
                "page too small for the branded header".to_string(),
            ));
        }

        let metrics = get_metrics(FontFace::Helvetica);
        let max_width = geo.text_width_mm();
        let clean = to_win_ansi_lossy(text);

        let mut lines: Vec<String> = Vec::new();
        for raw in clean.lines() {
            let wrapped = metrics.wrap(raw, geo.font_size_pt, max_width);
            if wrapped.is_empty() {
                lines.push(String::new());
            } else {
                lines.extend(wrapped);
            }
        }

        let (doc, first_page, first_layer) =
            PdfDocument::new(title, Mm(geo.width_mm), Mm(geo.height_mm), "body");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        self.place_brand_image(&layer, brand);
        let mut y = body_top;

        for line in &lines {
            if y < geo.margin_mm {
                let (page, page_layer) = doc.add_page(Mm(geo.width_mm), Mm(geo.height_mm), "body");
                layer = doc.get_page(page).get_layer(page_layer);
                self.place_brand_image(&layer, brand);
                y = body_top;
            }
            if !line.is_empty() {
                layer.use_text(line.as_str(), geo.font_size_pt, Mm(geo.margin_mm), Mm(y), &font);
            }
            y -= geo.line_height_mm;
        }

        doc.save_to_bytes().map_err(|e| RenderError::Pdf(e.to_string()))
    }
}

impl DocumentRenderer for BrandedCarouselRenderer {
    fn style_name(&self) -> &'static str {
        "branded"
    }

    fn render(&self, content: &GeneratedContent, title: &str) -> Result<Vec<u8>, RenderError> {
        let brand = self.load_brand_image()?;
        match content {
            GeneratedContent::Carousel(slides) => self.render_slides(slides, title, &brand),
            GeneratedContent::Post(text) => self.render_branded_post(text, title, &brand),
        }
    }
}
