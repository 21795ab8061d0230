use crate::font::Typeface;
use crate::params::LayoutParameters;
use crate::units::Px;

/// Measures the rendered width of a string of text under the active font, font size
/// and letter spacing.
///
/// Layout assumes that measurement always succeeds and returns a non-negative width:
/// fonts are resolved (see [`FontBook::resolve`](crate::FontBook::resolve)) before
/// a measurer is ever built. Any `Fn(&str) -> Px` closure is a measurer, which is
/// handy for fixed-pitch layouts and for tests.
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> Px;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str) -> Px,
{
    fn measure(&self, text: &str) -> Px {
        self(text)
    }
}

/// A [`TextMeasurer`] bound to a typeface at a given size and letter spacing.
///
/// Letter spacing is applied after every character, exactly as the page renderer
/// advances its pen, so a line that measures within the content width also renders
/// within it.
#[derive(Clone, Copy)]
pub struct FontMeasurer<'a> {
    pub face: &'a dyn Typeface,
    pub size: Px,
    pub letter_spacing: Px,
}

impl<'a> FontMeasurer<'a> {
    pub fn new(face: &'a dyn Typeface, size: Px, letter_spacing: Px) -> FontMeasurer<'a> {
        FontMeasurer {
            face,
            size,
            letter_spacing,
        }
    }

    /// A measurer for the font size and letter spacing in `params`
    pub fn for_params(face: &'a dyn Typeface, params: &LayoutParameters) -> FontMeasurer<'a> {
        FontMeasurer::new(face, params.font_size, params.letter_spacing)
    }

    /// How far the pen moves after drawing `ch`
    pub fn char_advance(&self, ch: char) -> Px {
        self.face.advance(ch, self.size) + self.letter_spacing
    }
}

impl TextMeasurer for FontMeasurer<'_> {
    fn measure(&self, text: &str) -> Px {
        text.chars().map(|ch| self.char_advance(ch)).sum()
    }
}

/// Calculates the vertical offset from the top of a line to the font's baseline, i.e.
/// the font's ascent at the given size. Lines are positioned by their top edge, while
/// glyphs are drawn from their baseline.
pub fn baseline_offset(face: &dyn Typeface, size: Px) -> Px {
    face.ascent(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::BlockFace;

    #[test]
    fn closures_measure() {
        let fixed = |text: &str| Px(10.0 * text.chars().count() as f32);
        assert_eq!(fixed.measure("abc"), Px(30.0));
        assert_eq!(fixed.measure(""), Px(0.0));
    }

    #[test]
    fn letter_spacing_is_added_per_character() {
        let face = BlockFace;
        let plain = FontMeasurer::new(&face, Px(20.0), Px(0.0));
        let spaced = FontMeasurer::new(&face, Px(20.0), Px(2.0));

        // block glyphs advance half an em, spaces a quarter
        assert_eq!(plain.measure("ab"), Px(20.0));
        assert_eq!(plain.measure("a b"), Px(25.0));
        assert_eq!(spaced.measure("a b"), Px(31.0));
        assert_eq!(spaced.char_advance('a'), Px(12.0));
    }

    #[test]
    fn baseline_sits_one_ascent_below_the_line_top() {
        assert_eq!(baseline_offset(&BlockFace, Px(20.0)), Px(15.0));
    }
}
