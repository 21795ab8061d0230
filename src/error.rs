use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum HandwritingError {
    #[error("invalid layout parameters: {0}")]
    /// The layout parameters violate one of their invariants
    Config(#[from] ConfigError),

    #[error("font family `{family}` is not available")]
    /// The requested font family was never registered, so text cannot be measured
    FontUnavailable { family: String },

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode or encode an image
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// The payload of a `data:` URI was not valid base64
    Base64(#[from] base64::DecodeError),

    #[error("malformed data URI: {0}")]
    /// A background was supplied as a `data:` URI that isn't a base64 encoded image
    InvalidDataUri(&'static str),

    #[error(transparent)]
    /// Layout parameters could not be deserialized
    Json(#[from] serde_json::Error),

    #[error("unable to allocate a {width}x{height} raster")]
    /// The page raster could not be created (zero sized or too large)
    Raster { width: u32, height: u32 },
}

/// A layout parameter that is outside of its valid range. These are caught before any
/// layout work starts, so a bad configuration can never make the wrapper loop or
/// produce garbage pages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("font size must be a positive number of pixels, got {0}")]
    FontSize(f32),

    #[error("line height multiplier must be positive, got {0}")]
    LineHeight(f32),

    #[error("letter spacing must be a finite number of pixels, got {0}")]
    LetterSpacing(f32),

    #[error("{name} offset must be a finite, non-negative number of pixels, got {value}")]
    Offset { name: &'static str, value: f32 },

    #[error("page content width must be positive, got {0}")]
    ContentWidth(f32),

    #[error("page content height must be positive, got {0}")]
    ContentHeight(f32),

    #[error("a {advance}px line starting {offset}px down doesn't fit in a content height of {height}")]
    NoRoomForFirstLine { offset: f32, advance: f32, height: f32 },

    #[error("resolution must be a positive number of dots per inch, got {0}")]
    Dpi(f32),

    #[error("font family must not be empty")]
    EmptyFontFamily,
}
