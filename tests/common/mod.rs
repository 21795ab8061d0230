#![allow(dead_code)]

use handwriting_pages::layout::Margins;
use handwriting_pages::{LayoutParameters, Px, Typeface};
use owned_ttf_parser::OutlineBuilder;

/// Every character, whitespace included, is this many pixels wide
pub const CHAR_WIDTH: f32 = 10.0;

pub fn fixed_width(text: &str) -> Px {
    Px(CHAR_WIDTH * text.chars().count() as f32)
}

/// Parameters for a bare `width` x `height` content box with no margins, no offsets
/// and lines `advance` pixels apart.
pub fn content_box(width: f32, height: f32, advance: f32) -> LayoutParameters {
    LayoutParameters {
        font_size: Px(advance),
        line_height: 1.0,
        vertical_offset: Px(0.0),
        page_size: (Px(width), Px(height)),
        margins: Margins::empty(),
        ..Default::default()
    }
}

/// A monospaced typeface whose glyphs are filled squares, 1000 units per em
pub struct SquareFace;

impl Typeface for SquareFace {
    fn units_per_em(&self) -> u16 {
        1000
    }

    fn ascender(&self) -> i16 {
        800
    }

    fn descender(&self) -> i16 {
        -200
    }

    fn glyph_advance(&self, _ch: char) -> u16 {
        500
    }

    fn outline_glyph(&self, ch: char, builder: &mut dyn OutlineBuilder) -> bool {
        if ch.is_whitespace() {
            return false;
        }
        builder.move_to(50.0, 0.0);
        builder.line_to(450.0, 0.0);
        builder.line_to(450.0, 600.0);
        builder.line_to(50.0, 600.0);
        builder.close();
        true
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
