mod common;

use common::init_logging;
use handwriting_pages::layout::{FontMeasurer, TextMeasurer};
use handwriting_pages::{
    Background, Document, Font, FontBook, LayoutParameters, PenStyle, Px, Typeface,
};
use std::sync::Arc;

const DEJAVU_SANS_MONO: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

fn dejavu() -> Font {
    Font::load(DEJAVU_SANS_MONO.to_vec()).expect("can load font")
}

#[test]
fn reads_names_and_metrics() {
    let font = dejavu();
    assert_eq!(font.family().as_deref(), Some("DejaVu Sans Mono"));
    assert_eq!(font.units_per_em(), 2048);
    assert!(font.ascent(Px(24.0)) > Px(0.0));
    assert!(font.descent(Px(24.0)) < Px(0.0));
    // at 2048px per em one font unit is one pixel; every glyph is 1233 units wide
    assert_eq!(font.advance('W', Px(2048.0)), Px(1233.0));
}

#[test]
fn missing_glyphs_fall_back_to_a_replacement() {
    let font = dejavu();
    assert_eq!(font.missing_chars("a漢b\n漢 é"), vec!['漢']);

    let measurer = FontMeasurer::new(&font, Px(2048.0), Px(0.0));
    assert_eq!(measurer.measure("a漢"), Px(2466.0));

    struct Count(usize);
    impl owned_ttf_parser::OutlineBuilder for Count {
        fn move_to(&mut self, _: f32, _: f32) {
            self.0 += 1;
        }
        fn line_to(&mut self, _: f32, _: f32) {}
        fn quad_to(&mut self, _: f32, _: f32, _: f32, _: f32) {}
        fn curve_to(&mut self, _: f32, _: f32, _: f32, _: f32, _: f32, _: f32) {}
        fn close(&mut self) {}
    }
    let mut contours = Count(0);
    assert!(font.outline_glyph('漢', &mut contours));
    assert!(contours.0 > 0);
    assert!(!font.outline_glyph(' ', &mut Count(0)));
}

#[test]
fn font_book_resolves_registered_families() {
    let mut book = FontBook::new();
    assert!(book.add(dejavu()).is_some());
    book.add_as("Caveat", dejavu());

    assert!(book.resolve("dejavu sans mono").is_ok());
    assert!(book.resolve(" CAVEAT ").is_ok());
    assert!(book.contains("caveat"));
    let mut families: Vec<&str> = book.families().collect();
    families.sort_unstable();
    assert_eq!(families, ["caveat", "dejavu sans mono"]);
}

#[test]
fn lays_out_and_renders_with_a_registered_font() {
    init_logging();
    let mut book = FontBook::new();
    book.add_as("Caveat", dejavu());

    // defaults: 24px text on A4 at 96 DPI, 694px wide lines
    let params = LayoutParameters::default();
    let doc = Document::layout_with_fonts(
        &lipsum::lipsum(900),
        &params,
        &book,
        Arc::new(Background::default()),
    )
    .expect("font is registered");
    assert!(doc.page_count() > 1);

    // 48 characters of 1233/2048 * 24px fit in 694px, 49 don't
    for line in doc.pages().iter().flat_map(|page| page.lines()) {
        assert!(line.chars().count() <= 48 || !line.contains(' '), "{line:?}");
    }

    let font = book.resolve("Caveat").expect("font is registered");
    let pixmap = doc
        .render_page(0, font, PenStyle::default())
        .expect("can render")
        .expect("page exists");
    let inked = pixmap
        .pixels()
        .iter()
        .filter(|p| p.demultiply().red() < 128)
        .count();
    assert!(inked > 1000, "only {inked} inked pixels");
}
