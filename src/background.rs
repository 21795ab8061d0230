use crate::params::LayoutParameters;
use crate::HandwritingError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::{imageops::FilterType, DynamicImage};
use std::path::Path;
use tiny_skia::{Color, ColorU8, Paint, Pixmap, Rect, Transform};

/// The paper styles that ship with the crate. They are drawn procedurally at
/// whatever size the page raster is, so they never need scaling.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PaperStyle {
    /// Plain white paper
    #[default]
    Blank,
    /// Notebook paper: a rule under every line of text and a red margin rule
    Ruled,
    /// Squared paper with one square per line of text
    Grid,
}

/// What is drawn beneath the text of a page.
#[derive(Debug, Clone)]
pub enum Background {
    Paper(PaperStyle),
    /// A user supplied image, stretched to cover the whole page
    Image(DynamicImage),
}

impl Default for Background {
    fn default() -> Self {
        Background::Paper(PaperStyle::Blank)
    }
}

impl From<PaperStyle> for Background {
    fn from(style: PaperStyle) -> Self {
        Background::Paper(style)
    }
}

const RULE_COLOUR: [u8; 4] = [160, 190, 230, 255];
const MARGIN_RULE_COLOUR: [u8; 4] = [230, 120, 120, 255];
const GRID_COLOUR: [u8; 4] = [200, 205, 210, 255];

impl Background {
    /// Load a background image from disk. The format is guessed from the file
    /// contents, except for TGA files which are recognised by their extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Background, HandwritingError> {
        let path = path.as_ref();
        let is_tga = if let Some(ext) = path.extension() {
            ext.to_ascii_lowercase() == std::ffi::OsString::from("tga")
        } else {
            false
        };

        let data = std::fs::read(path)?;

        let format = if is_tga {
            image::ImageFormat::Tga
        } else {
            image::guess_format(&data)?
        };
        let image = image::load_from_memory_with_format(&data, format)?;
        Ok(Background::Image(image))
    }

    /// Decode a background image from its encoded bytes (PNG, JPEG, ...)
    pub fn from_bytes(data: &[u8]) -> Result<Background, HandwritingError> {
        Ok(Background::Image(image::load_from_memory(data)?))
    }

    /// Decode a background image from a `data:image/...;base64,...` URI, the form
    /// uploaded images arrive in from a browser file picker
    pub fn from_data_uri(uri: &str) -> Result<Background, HandwritingError> {
        let rest = uri
            .trim()
            .strip_prefix("data:")
            .ok_or(HandwritingError::InvalidDataUri("missing `data:` scheme"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or(HandwritingError::InvalidDataUri("missing `,` before the payload"))?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or(HandwritingError::InvalidDataUri("payload is not base64 encoded"))?;
        if !mime.is_empty() && !mime.starts_with("image/") {
            return Err(HandwritingError::InvalidDataUri("payload is not an image"));
        }

        let data = BASE64.decode(payload.trim())?;
        log::debug!("decoded {} byte background from data URI", data.len());
        Background::from_bytes(&data)
    }

    /// Paint the background over the whole of `pixmap`
    pub(crate) fn draw(
        &self,
        pixmap: &mut Pixmap,
        params: &LayoutParameters,
    ) -> Result<(), HandwritingError> {
        match self {
            Background::Paper(style) => {
                pixmap.fill(Color::WHITE);
                draw_paper(*style, pixmap, params);
            }
            Background::Image(image) => {
                let scaled = image
                    .resize_exact(pixmap.width(), pixmap.height(), FilterType::Triangle)
                    .to_rgba8();
                for (dst, src) in pixmap.pixels_mut().iter_mut().zip(scaled.pixels()) {
                    let [r, g, b, a] = src.0;
                    *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
                }
            }
        }
        Ok(())
    }
}

fn draw_paper(style: PaperStyle, pixmap: &mut Pixmap, params: &LayoutParameters) {
    let width = pixmap.width() as f32;
    let height = pixmap.height() as f32;
    let advance = params.line_advance().0;
    let top = (params.margins.top + params.vertical_offset).0;

    match style {
        PaperStyle::Blank => {}
        PaperStyle::Ruled => {
            // a rule along the bottom of every line slot, the same slots the text uses
            let mut y = top + advance;
            while y < height {
                fill(pixmap, Rect::from_xywh(0.0, y, width, 1.0), RULE_COLOUR);
                y += advance;
            }
            let x = params.margins.left.0 * 0.8;
            fill(pixmap, Rect::from_xywh(x, 0.0, 1.5, height), MARGIN_RULE_COLOUR);
        }
        PaperStyle::Grid => {
            let mut y = top % advance;
            while y < height {
                fill(pixmap, Rect::from_xywh(0.0, y, width, 1.0), GRID_COLOUR);
                y += advance;
            }
            let mut x = params.margins.left.0 % advance;
            while x < width {
                fill(pixmap, Rect::from_xywh(x, 0.0, 1.0, height), GRID_COLOUR);
                x += advance;
            }
        }
    }
}

fn fill(pixmap: &mut Pixmap, rect: Option<Rect>, [r, g, b, a]: [u8; 4]) {
    let Some(rect) = rect else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    pixmap.fill_rect(rect, &paint, Transform::identity(), None);
}
