use crate::font::Typeface;
use owned_ttf_parser::OutlineBuilder;

/// A synthetic typeface for tests: every visible character is a solid block half an
/// em wide, whitespace is a quarter em wide and has no outline. 1024 units per em
/// keeps the pixel metrics exact at the sizes tests use.
pub(crate) struct BlockFace;

impl Typeface for BlockFace {
    fn units_per_em(&self) -> u16 {
        1024
    }

    fn ascender(&self) -> i16 {
        768
    }

    fn descender(&self) -> i16 {
        -256
    }

    fn glyph_advance(&self, ch: char) -> u16 {
        if ch.is_whitespace() {
            256
        } else {
            512
        }
    }

    fn outline_glyph(&self, ch: char, builder: &mut dyn OutlineBuilder) -> bool {
        if ch.is_whitespace() {
            return false;
        }
        builder.move_to(64.0, 0.0);
        builder.line_to(448.0, 0.0);
        builder.line_to(448.0, 704.0);
        builder.line_to(64.0, 704.0);
        builder.close();
        true
    }
}
