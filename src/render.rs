//! Rasterisation of laid out pages.
//!
//! The renderer draws a page's background scaled to the page raster, then writes each
//! line of text glyph by glyph: glyph outlines come from the [`Typeface`], are placed
//! on the line's baseline and filled with the pen's ink. The pen advances by each
//! character's width plus the letter spacing, the same way
//! [`FontMeasurer`] measures text, so rendered lines match the widths layout used.

use crate::colour::{colours, Colour};
use crate::font::Typeface;
use crate::layout::{baseline_offset, FontMeasurer};
use crate::page::Page;
use crate::params::LayoutParameters;
use crate::units::Px;
use crate::HandwritingError;
use owned_ttf_parser::OutlineBuilder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tiny_skia::{FillRule, Paint, Pixmap, Transform};

/// How the pen writes: ink and the effects that make text look less mechanical.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PenStyle {
    pub ink: Colour,
    /// Ink opacity, from 0.0 (invisible) to 1.0 (solid)
    pub opacity: f32,
    /// Furthest a glyph may drift above or below its baseline
    pub jitter: Px,
    /// Horizontal shear of every glyph; positive values lean to the right
    pub slant: f32,
    /// Seed for the baseline drift, so the same page always renders the same way
    pub seed: u64,
}

impl Default for PenStyle {
    fn default() -> Self {
        PenStyle {
            ink: colours::BLUE_INK,
            opacity: 0.92,
            jitter: Px(0.8),
            slant: 0.0,
            seed: 0x5eed,
        }
    }
}

/// Draws pages with one typeface, one set of layout parameters and one pen.
pub struct PageRenderer<'a> {
    face: &'a dyn Typeface,
    params: &'a LayoutParameters,
    pen: PenStyle,
}

impl<'a> PageRenderer<'a> {
    pub fn new(
        face: &'a dyn Typeface,
        params: &'a LayoutParameters,
        pen: PenStyle,
    ) -> Result<PageRenderer<'a>, HandwritingError> {
        params.validate()?;
        Ok(PageRenderer { face, params, pen })
    }

    /// Size of the rasters this renderer produces, in whole pixels
    pub fn raster_size(&self) -> (u32, u32) {
        let (width, height) = self.params.page_size;
        (width.0.round() as u32, height.0.round() as u32)
    }

    /// Render one page. `page_index` only seeds the pen effects, so that consecutive
    /// pages don't wobble identically.
    pub fn render(&self, page: &Page, page_index: usize) -> Result<Pixmap, HandwritingError> {
        let (width, height) = self.raster_size();
        let mut pixmap =
            Pixmap::new(width, height).ok_or(HandwritingError::Raster { width, height })?;
        page.background().draw(&mut pixmap, self.params)?;

        let size = self.params.font_size;
        let measurer = FontMeasurer::for_params(self.face, self.params);
        let scale = self.face.scaling(size);
        let left = self.params.margins.left + self.params.horizontal_offset;
        let first_baseline =
            self.params.margins.top + self.params.vertical_offset + baseline_offset(self.face, size);
        let advance = self.params.line_advance();

        let mut paint = Paint::default();
        paint.set_color(self.pen.ink.to_skia(self.pen.opacity));
        paint.anti_alias = true;

        let mut jitter = Jitter::new(self.pen.seed, page_index);
        let mut glyphs = 0usize;
        for (row, line) in page.lines().iter().enumerate() {
            let baseline = first_baseline + advance * row as f32;
            let mut x = left;
            for ch in line.chars() {
                let drift = self.pen.jitter * jitter.sample();
                let mut outline = GlyphOutline::new(scale, x, baseline + drift, self.pen.slant);
                if self.face.outline_glyph(ch, &mut outline) {
                    if let Some(path) = outline.finish() {
                        pixmap.fill_path(
                            &path,
                            &paint,
                            FillRule::Winding,
                            Transform::identity(),
                            None,
                        );
                        glyphs += 1;
                    }
                }
                x += measurer.char_advance(ch);
            }
        }

        log::debug!(
            "rendered page {} ({} lines, {} glyphs) at {}x{}",
            page_index + 1,
            page.lines().len(),
            glyphs,
            width,
            height
        );
        Ok(pixmap)
    }

    /// Render every page, in order
    pub fn render_all(&self, pages: &[Page]) -> Result<Vec<Pixmap>, HandwritingError> {
        pages
            .iter()
            .enumerate()
            .map(|(index, page)| self.render(page, index))
            .collect()
    }
}

/// Deterministic noise for the pen's baseline drift
struct Jitter {
    rng: StdRng,
}

impl Jitter {
    fn new(seed: u64, page_index: usize) -> Jitter {
        let seed = seed ^ (page_index as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Jitter {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A value in [-1, 1)
    fn sample(&mut self) -> f32 {
        self.rng.gen_range(-1.0..1.0)
    }
}

/// Converts font-unit glyph outlines (y up) into a tiny-skia path in page pixels
/// (y down), positioned on a baseline and optionally slanted.
struct GlyphOutline {
    builder: tiny_skia::PathBuilder,
    scale: f32,
    origin_x: f32,
    baseline: f32,
    slant: f32,
}

impl GlyphOutline {
    fn new(scale: f32, origin_x: Px, baseline: Px, slant: f32) -> GlyphOutline {
        GlyphOutline {
            builder: tiny_skia::PathBuilder::new(),
            scale,
            origin_x: origin_x.0,
            baseline: baseline.0,
            slant,
        }
    }

    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.origin_x + (x + self.slant * y) * self.scale,
            self.baseline - y * self.scale,
        )
    }

    fn finish(self) -> Option<tiny_skia::Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for GlyphOutline {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x, y) = self.point(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.point(x1, y1);
        let (x2, y2) = self.point(x2, y2);
        let (x, y) = self.point(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
