use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul, MulAssign};

/// A length measured in raster pixels. Everything the layout engine and the renderer
/// deal with is expressed in pixels; conversion to physical units only happens at
/// export time, through the page DPI.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[display("{_0}px")]
#[serde(transparent)]
pub struct Px(pub f32);

impl Px {
    /// Convert to PDF points (1/72 inch) given the raster resolution in dots per inch
    pub fn to_pt(self, dpi: f32) -> f32 {
        self.0 * 72.0 / dpi
    }

    /// Build a pixel length from a physical length in inches
    pub fn from_inches(inches: f32, dpi: f32) -> Px {
        Px(inches * dpi)
    }

    /// True when the value is a finite number strictly greater than zero
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Mul<Px> for f32 {
    type Output = Px;

    fn mul(self, rhs: Px) -> Px {
        Px(self * rhs.0)
    }
}

impl MulAssign<f32> for Px {
    fn mul_assign(&mut self, rhs: f32) {
        self.0 *= rhs;
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

impl Div<Px> for Px {
    type Output = f32;

    fn div(self, rhs: Px) -> f32 {
        self.0 / rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_at_96_dpi() {
        assert_eq!(Px(96.0).to_pt(96.0), 72.0);
        assert_eq!(Px::from_inches(0.5, 96.0), Px(48.0));
    }

    #[test]
    fn arithmetic_stays_in_pixels() {
        let mut advance = Px(24.0) * 1.5;
        advance += Px(4.0);
        assert_eq!(advance, Px(40.0));
        assert_eq!(advance / Px(10.0), 4.0);
        assert_eq!([Px(1.0), Px(2.5)].into_iter().sum::<Px>(), Px(3.5));
        assert!(!Px(f32::NAN).is_positive());
        assert!(!Px(0.0).is_positive());
    }
}
