//! The two ways rendered pages leave the crate: a single page as a still image, or
//! every page as one multi-page PDF.

use crate::info::Info;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Px;
use crate::HandwritingError;
use image::{DynamicImage, ImageOutputFormat, RgbImage, RgbaImage};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref};
use std::io::{Seek, Write};
use tiny_skia::Pixmap;

/// Encoding used for still image export
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum StillFormat {
    #[default]
    Png,
    /// JPEG with a quality from 1 to 100. JPEG has no alpha channel, so any
    /// transparency in the page is dropped.
    Jpeg { quality: u8 },
}

/// Convert a premultiplied tiny-skia raster into a straight-alpha RGBA image
pub fn to_rgba_image(pixmap: &Pixmap) -> Result<RgbaImage, HandwritingError> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    RgbaImage::from_raw(width, height, data).ok_or(HandwritingError::Raster { width, height })
}

/// Write one rendered page as a still image
pub fn write_still<W: Write + Seek>(
    pixmap: &Pixmap,
    format: StillFormat,
    w: &mut W,
) -> Result<(), HandwritingError> {
    let image = DynamicImage::ImageRgba8(to_rgba_image(pixmap)?);
    match format {
        StillFormat::Png => image.write_to(w, ImageOutputFormat::Png)?,
        StillFormat::Jpeg { quality } => DynamicImage::ImageRgb8(image.to_rgb8())
            .write_to(w, ImageOutputFormat::Jpeg(quality.clamp(1, 100)))?,
    }
    log::debug!(
        "wrote {}x{} page as {:?}",
        pixmap.width(),
        pixmap.height(),
        format
    );
    Ok(())
}

/// Flatten a page onto white and return its raw RGB samples, ready for embedding
fn flatten_rgb(pixmap: &Pixmap) -> Result<RgbImage, HandwritingError> {
    let rgba = to_rgba_image(pixmap)?;
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in rgb.pixels_mut().zip(rgba.pixels()) {
        let [r, g, b, a] = src.0;
        let a = a as u16;
        let over_white = |c: u8| ((c as u16 * a + 255 * (255 - a)) / 255) as u8;
        dst.0 = [over_white(r), over_white(g), over_white(b)];
    }
    Ok(rgb)
}

/// Write every page as one PDF, each page holding its raster as a full-page image.
///
/// Pages are given a physical size from their pixel size and `dpi`, so a page
/// rendered at 96 DPI from an A4 raster prints as A4. Until the whole document has
/// been assembled nothing is written to `w`.
pub fn write_pdf<W: Write>(
    pages: &[Pixmap],
    dpi: f32,
    info: Option<&Info>,
    mut w: W,
) -> Result<(), HandwritingError> {
    let mut refs = ObjectReferences::new();

    let catalog_id = refs.gen(RefType::Catalog);
    let page_tree_id = refs.gen(RefType::PageTree);

    let mut writer = Pdf::new();
    if let Some(info) = info {
        info.write(&mut refs, &mut writer);
    }

    let page_refs: Vec<Ref> = (0..pages.len())
        .map(|i| refs.gen(RefType::Page(i)))
        .collect();

    writer
        .pages(page_tree_id)
        .count(page_refs.len() as i32)
        .kids(page_refs.iter().copied());

    let level = CompressionLevel::DefaultLevel as u8;
    for (page_index, pixmap) in pages.iter().enumerate() {
        let image_id = refs.gen(RefType::PageImage(page_index));
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let rgb = flatten_rgb(pixmap)?;
        let bytes = compress_to_vec_zlib(rgb.as_raw(), level);
        let mut image = writer.image_xobject(image_id, bytes.as_slice());
        image.filter(Filter::FlateDecode);
        image.width(pixmap.width() as i32);
        image.height(pixmap.height() as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        image.finish();

        let width = Px(pixmap.width() as f32).to_pt(dpi);
        let height = Px(pixmap.height() as f32).to_pt(dpi);

        let mut content = Content::new();
        content.save_state();
        content.transform([width, 0.0, 0.0, height, 0.0, 0.0]);
        content.x_object(Name(b"P0"));
        content.restore_state();
        writer.stream(content_id, &content.finish());

        let mut page = writer.page(page_refs[page_index]);
        page.media_box(Rect::new(0.0, 0.0, width, height));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources().x_objects().pair(Name(b"P0"), image_id);
        page.finish();
    }

    writer.catalog(catalog_id).pages(page_tree_id);

    log::debug!("wrote {} page PDF", pages.len());
    w.write_all(writer.finish().as_slice()).map_err(Into::into)
}
