use crate::units::Px;
use serde::{Deserialize, Serialize};

/// Margins frame the printable content box of a page. The wrapper measures lines
/// against the width left between the left and right margins, the paginator fills
/// the height left between the top and bottom margins, and the renderer offsets the
/// first line from the top-left corner of that box.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Px>>(value: D) -> Margins {
        let value: Px = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Px, horizontal: Px) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Px(0.0))
    }

    /// Total horizontal space taken by the margins
    pub fn horizontal(&self) -> Px {
        self.left + self.right
    }

    /// Total vertical space taken by the margins
    pub fn vertical(&self) -> Px {
        self.top + self.bottom
    }
}
