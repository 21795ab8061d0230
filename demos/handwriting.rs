use handwriting_pages::layout::Margins;
use handwriting_pages::{
    colours, Background, Document, Font, FontBook, Info, LayoutParameters, PaperStyle, PenStyle,
    Px, StillFormat,
};
use std::fs::File;
use std::io::BufWriter;
use std::sync::Arc;

fn main() {
    env_logger::init();

    let dejavu = include_bytes!("../assets/DejaVuSansMono.ttf");
    let dejavu = Font::load(dejavu.to_vec()).expect("can load font");

    let mut fonts = FontBook::new();
    fonts.add_as("DejaVu Sans Mono", dejavu);

    let params = LayoutParameters {
        font_family: "DejaVu Sans Mono".to_string(),
        font_size: Px(20.0),
        line_height: 1.6,
        letter_spacing: Px(0.5),
        horizontal_offset: Px(8.0),
        margins: Margins::trbl(Px(80.0), Px(50.0), Px(60.0), Px(90.0)),
        honor_line_breaks: true,
        ..Default::default()
    };

    let text = format!(
        "{}\n\n{}\n\n{}",
        lipsum::lipsum(6),
        lipsum::lipsum(250),
        lipsum::lipsum(400)
    );

    let mut doc = Document::layout_with_fonts(
        &text,
        &params,
        &fonts,
        Arc::new(Background::Paper(PaperStyle::Ruled)),
    )
    .expect("can lay out text");
    doc.set_info(
        Info::new()
            .title("Lorem Ipsum, Handwritten")
            .subject("Development Test / Example")
            .clone(),
    );
    println!("laid out {} pages", doc.page_count());

    let font = fonts.resolve(&params.font_family).expect("font is registered");
    let pen = PenStyle {
        ink: colours::BLUE_INK,
        slant: 0.12,
        jitter: Px(1.2),
        ..Default::default()
    };

    let mut png = BufWriter::new(File::create("handwriting-page-1.png").expect("can create file"));
    doc.write_page(0, font, pen, StillFormat::Png, &mut png)
        .expect("can write page");

    let pdf = BufWriter::new(File::create("handwriting.pdf").expect("can create file"));
    doc.write_pdf(font, pen, pdf).expect("can write pdf");
}
