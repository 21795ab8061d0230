/// A colour, expressed in RGB, CMYK or grey colour spaces. Pages are rasterised in
/// RGB, so every colour is converted with [`Colour::to_rgb8`] before drawing.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// RGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// CMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// Grey colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the CMYK space. c, m, y, and k range from 0.0 to 1.0
    pub fn new_cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK { c, m, y, k }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Parse a `#rrggbb` or `#rgb` hex colour, as produced by colour pickers
    pub fn from_hex(hex: &str) -> Option<Colour> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let digits: Vec<u8> = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<_>>()?;
        match digits.as_slice() {
            &[r, g, b] => Some(Colour::new_rgb_bytes(r * 17, g * 17, b * 17)),
            &[r1, r2, g1, g2, b1, b2] => Some(Colour::new_rgb_bytes(
                r1 * 16 + r2,
                g1 * 16 + g2,
                b1 * 16 + b2,
            )),
            _ => None,
        }
    }

    /// Convert to 8-bit RGB channels. CMYK is converted naively, without a colour profile.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let (r, g, b) = match *self {
            Colour::RGB { r, g, b } => (r, g, b),
            Colour::CMYK { c, m, y, k } => (
                (1.0 - c) * (1.0 - k),
                (1.0 - m) * (1.0 - k),
                (1.0 - y) * (1.0 - k),
            ),
            Colour::Grey { g } => (g, g, g),
        };
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(r), byte(g), byte(b)]
    }

    /// Convert to a tiny-skia colour with the given opacity (0.0 to 1.0)
    pub(crate) fn to_skia(self, opacity: f32) -> tiny_skia::Color {
        let [r, g, b] = self.to_rgb8();
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        tiny_skia::Color::from_rgba8(r, g, b, a)
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour::RGB {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }
}

/// A list of pre-defined colour constants, including common pen inks
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Colour = Colour::RGB {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
    /// Ballpoint blue
    pub const BLUE_INK: Colour = Colour::RGB {
        r: 0.06,
        g: 0.12,
        b: 0.45,
    };
    /// Fountain pen black, slightly warm
    pub const BLACK_INK: Colour = Colour::RGB {
        r: 0.1,
        g: 0.09,
        b: 0.08,
    };
    pub const RED_INK: Colour = Colour::RGB {
        r: 0.7,
        g: 0.08,
        b: 0.1,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colours() {
        assert_eq!(Colour::from_hex("#ff8000"), Some(Colour::new_rgb_bytes(255, 128, 0)));
        assert_eq!(Colour::from_hex("fff"), Some(Colour::new_rgb_bytes(255, 255, 255)));
        assert_eq!(Colour::from_hex("#12345"), None);
        assert_eq!(Colour::from_hex("#gggggg"), None);
    }

    #[test]
    fn colour_spaces_convert_to_rgb() {
        assert_eq!(colours::BLACK.to_rgb8(), [0, 0, 0]);
        assert_eq!(Colour::new_grey(1.0).to_rgb8(), [255, 255, 255]);
        assert_eq!(Colour::new_cmyk(1.0, 0.0, 0.0, 0.0).to_rgb8(), [0, 255, 255]);
        assert_eq!(Colour::new_rgb(2.0, -1.0, 0.5).to_rgb8(), [255, 0, 128]);
    }
}
