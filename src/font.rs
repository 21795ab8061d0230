use crate::{units::Px, HandwritingError};
use id_arena::{Arena, Id};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OutlineBuilder, OwnedFace};
use std::collections::HashMap;

/// The glyph metrics and outlines the layout engine and the page renderer need from
/// a font. All values are in font units; [`Typeface::scaling`] converts them to
/// pixels for a given font size.
///
/// [`Font`] is the implementation backed by a real TrueType / OpenType file.
pub trait Typeface {
    /// Number of font units per em
    fn units_per_em(&self) -> u16;

    /// Distance from the baseline to the top of the font, in font units
    fn ascender(&self) -> i16;

    /// Distance from the baseline to the bottom of the font, in font units. Usually negative.
    fn descender(&self) -> i16;

    /// Horizontal advance of the glyph for `ch`, in font units
    fn glyph_advance(&self, ch: char) -> u16;

    /// Feed the outline of the glyph for `ch` to `builder`, in font units with the
    /// y axis pointing up. Returns `false` if the glyph has no outline (e.g. a space).
    fn outline_glyph(&self, ch: char, builder: &mut dyn OutlineBuilder) -> bool;

    /// Pixels per font unit at the given font size
    fn scaling(&self, size: Px) -> f32 {
        size.0 / self.units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    fn ascent(&self, size: Px) -> Px {
        Px(self.scaling(size) * self.ascender() as f32)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    fn descent(&self, size: Px) -> Px {
        Px(self.scaling(size) * self.descender() as f32)
    }

    /// Horizontal advance of `ch` at the given font size
    fn advance(&self, ch: char, size: Px) -> Px {
        Px(self.scaling(size) * self.glyph_advance(ch) as f32)
    }
}

/// A parsed font object. Fonts can be TTF or OTF fonts.
///
/// Characters that the font has no glyph for are drawn (and measured) with the
/// font's replacement glyph, falling back to `?` and then to the `.notdef` glyph.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, HandwritingError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Load a font file from disk
    pub fn load_from_disk<P: AsRef<std::path::Path>>(path: P) -> Result<Font, HandwritingError> {
        Font::load(std::fs::read(path)?)
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// Obtain the full name of the font, if the font carries one
    pub fn name(&self) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the family name of the font, if the font carries one
    pub fn family(&self) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// The distinct non-whitespace characters of `text` this font has no glyph for,
    /// in order of first appearance. They are measured and drawn with the
    /// replacement glyph.
    pub fn missing_chars(&self, text: &str) -> Vec<char> {
        let mut missing = Vec::new();
        for ch in text.chars().filter(|ch| !ch.is_whitespace()) {
            if self.face().glyph_index(ch).is_none() && !missing.contains(&ch) {
                missing.push(ch);
            }
        }
        missing
    }

    fn glyph_or_fallback(&self, ch: char) -> GlyphId {
        self.face().glyph_index(ch).unwrap_or_else(|| {
            log::trace!("no glyph for {ch:?}, using a replacement glyph");
            self.replacement_glyph_id()
                .or_else(|| self.glyph_id('?'))
                .map(GlyphId)
                .unwrap_or(GlyphId(0))
        })
    }
}

impl Typeface for Font {
    fn units_per_em(&self) -> u16 {
        self.face().units_per_em()
    }

    fn ascender(&self) -> i16 {
        self.face().ascender()
    }

    fn descender(&self) -> i16 {
        self.face().descender()
    }

    fn glyph_advance(&self, ch: char) -> u16 {
        let gid = self.glyph_or_fallback(ch);
        self.face().glyph_hor_advance(gid).unwrap_or_default()
    }

    fn outline_glyph(&self, ch: char, builder: &mut dyn OutlineBuilder) -> bool {
        let gid = self.glyph_or_fallback(ch);
        self.face().outline_glyph(gid, builder).is_some()
    }
}

/// The set of fonts that text can be written in, keyed by family name.
///
/// Layout never measures text with a font that isn't loaded: looking up a family
/// that was never registered fails with [`HandwritingError::FontUnavailable`] rather
/// than silently measuring with something else. Family names are matched
/// case-insensitively.
#[derive(Default)]
pub struct FontBook {
    pub fonts: Arena<Font>,
    families: HashMap<String, Id<Font>>,
}

impl FontBook {
    pub fn new() -> FontBook {
        FontBook::default()
    }

    /// Add a font under its own family name. Fonts without a family name can only be
    /// added with [`FontBook::add_as`].
    pub fn add(&mut self, font: Font) -> Option<Id<Font>> {
        let family = font.family()?;
        Some(self.add_as(family, font))
    }

    /// Add a font under an explicit family name, replacing any font previously
    /// registered under that name. The returned id stays valid for the lifetime
    /// of the book.
    pub fn add_as<S: AsRef<str>>(&mut self, family: S, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        let key = family.as_ref().trim().to_lowercase();
        log::debug!("registered font family `{key}`");
        self.families.insert(key, id);
        id
    }

    /// Find the font registered for `family`
    pub fn resolve(&self, family: &str) -> Result<&Font, HandwritingError> {
        self.families
            .get(&family.trim().to_lowercase())
            .and_then(|&id| self.fonts.get(id))
            .ok_or_else(|| HandwritingError::FontUnavailable {
                family: family.to_string(),
            })
    }

    pub fn get(&self, id: Id<Font>) -> Option<&Font> {
        self.fonts.get(id)
    }

    /// The registered family names, in no particular order
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    pub fn contains(&self, family: &str) -> bool {
        self.families.contains_key(&family.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_not_a_font() {
        let err = Font::load(b"definitely not a font".to_vec())
            .err()
            .expect("parsing fails");
        assert!(matches!(err, HandwritingError::FaceParsingError(_)));
    }

    #[test]
    fn unknown_family_fails_closed() {
        let book = FontBook::new();
        assert!(!book.contains("Caveat"));
        match book.resolve("Caveat") {
            Err(HandwritingError::FontUnavailable { family }) => assert_eq!(family, "Caveat"),
            other => panic!("expected FontUnavailable, got {:?}", other.err()),
        }
    }
}
