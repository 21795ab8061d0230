//! Pre-defined page sizes for common paper formats.
//!
//! Paper sizes are physical (inches), while pages are rasters (pixels); a [`Paper`] is
//! turned into a [`PageSize`] for a given resolution with [`Paper::at_dpi`]. All sizes
//! are provided in portrait orientation (width, height) where width ≤ height. Use the
//! [`PageOrientation`] trait to convert between portrait and landscape.
//!
//! # Example
//!
//! ```
//! use handwriting_pages::pagesize::{A4, DEFAULT_DPI, PageOrientation};
//! use handwriting_pages::Px;
//!
//! let page = A4.at_dpi(DEFAULT_DPI);
//! assert_eq!(page, (Px(794.0), Px(1123.0)));
//!
//! let landscape = page.landscape();
//! assert_eq!(landscape, (Px(1123.0), Px(794.0)));
//! ```

use crate::units::*;

/// Page raster dimensions as (width, height) in pixels.
pub type PageSize = (Px, Px);

/// The conventional screen resolution pages are rasterised at
pub const DEFAULT_DPI: f32 = 96.0;

/// A physical paper size, in inches
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Paper {
    pub width: f32,
    pub height: f32,
}

impl Paper {
    /// The raster size of this paper at the given resolution, rounded to whole pixels
    pub fn at_dpi(self, dpi: f32) -> PageSize {
        (
            Px((self.width * dpi).round()),
            Px((self.height * dpi).round()),
        )
    }
}

// north american sizes
pub const LETTER: Paper = Paper {
    width: 8.5,
    height: 11.0,
};
pub const HALF_LETTER: Paper = Paper {
    width: 5.5,
    height: 8.5,
};
pub const LEGAL: Paper = Paper {
    width: 8.5,
    height: 13.0,
};

// iso a-series (converted from mm to inches)
pub const A3: Paper = Paper {
    width: 297.0 / 25.4,
    height: 420.0 / 25.4,
};
pub const A4: Paper = Paper {
    width: 210.0 / 25.4,
    height: 297.0 / 25.4,
};
pub const A5: Paper = Paper {
    width: 148.0 / 25.4,
    height: 210.0 / 25.4,
};
pub const A6: Paper = Paper {
    width: 105.0 / 25.4,
    height: 148.0 / 25.4,
};

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}
