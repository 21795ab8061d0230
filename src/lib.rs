//! Lays plain text out into pages of handwriting and renders them.
//!
//! Text is wrapped greedily into lines that fit the page's content box and
//! distributed over as many pages as it needs ([`layout::paginate`]). The resulting
//! [`Document`] can then be rasterised page by page with a [`Typeface`] and a
//! [`PenStyle`], and exported as still images or one PDF.

mod background;
pub use background::*;

mod colour;
pub use colour::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod export;
pub use export::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Line wrapping and pagination of text within a page's content box
pub mod layout;

mod page;
pub use page::*;

/// Standard paper sizes
pub mod pagesize;

mod params;
pub use params::*;

pub(crate) mod refs;

mod render;
pub use render::*;

mod units;
pub use units::*;

#[cfg(test)]
mod testing;

/// Re-export tiny-skia, the raster type pages are rendered into
pub use tiny_skia;
