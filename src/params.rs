use crate::error::{ConfigError, HandwritingError};
use crate::layout::Margins;
use crate::pagesize::{PageSize, A4, DEFAULT_DPI};
use crate::units::Px;
use serde::{Deserialize, Serialize};

/// The font family used when none is configured
pub const DEFAULT_FONT_FAMILY: &str = "Caveat";

/// Everything the layout pass needs to know about typography and page geometry.
///
/// A `LayoutParameters` value is treated as immutable for the duration of a layout
/// pass; changing any field means laying the whole document out again. Parameters
/// can be built in code (usually starting from [`Default`]) or deserialized from JSON
/// with [`LayoutParameters::from_json`], in which case missing fields take their
/// default values.
///
/// Vertical positions are relative to the top of the page's content box (the page
/// minus its [`Margins`]); `vertical_offset` is where the top of the first line sits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParameters {
    /// Name of the font family, resolved through a [`FontBook`](crate::FontBook)
    pub font_family: String,
    /// Font size, in pixels per em
    pub font_size: Px,
    /// Distance between consecutive lines, as a multiple of the font size
    pub line_height: f32,
    /// Extra space added after every character
    pub letter_spacing: Px,
    /// Indentation of every line from the left edge of the content box. Lines are
    /// wrapped to the width that remains.
    pub horizontal_offset: Px,
    /// Position of the top of the first line below the top edge of the content box
    pub vertical_offset: Px,
    /// Size of the page raster
    pub page_size: PageSize,
    /// Margins around the content box
    pub margins: Margins,
    /// Resolution of the page raster, used to give exported documents a physical size
    pub dpi: f32,
    /// When set, newlines in the input force a line break instead of being treated
    /// as ordinary whitespace
    pub honor_line_breaks: bool,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        LayoutParameters {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: Px(24.0),
            line_height: 1.5,
            letter_spacing: Px(0.0),
            horizontal_offset: Px(0.0),
            vertical_offset: Px(10.0),
            page_size: A4.at_dpi(DEFAULT_DPI),
            margins: Margins::symmetric(Px(60.0), Px(50.0)),
            dpi: DEFAULT_DPI,
            honor_line_breaks: false,
        }
    }
}

impl LayoutParameters {
    /// Parse parameters from a JSON object and validate them
    pub fn from_json(json: &str) -> Result<LayoutParameters, HandwritingError> {
        let params: LayoutParameters = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Width available to a line of text: the page width minus the margins and the
    /// horizontal offset every line is indented by
    pub fn content_width(&self) -> Px {
        self.page_size.0 - self.margins.horizontal() - self.horizontal_offset
    }

    /// Height available to lines of text, i.e. the page height minus the margins
    pub fn content_height(&self) -> Px {
        self.page_size.1 - self.margins.vertical()
    }

    /// Vertical distance between the tops of two consecutive lines
    pub fn line_advance(&self) -> Px {
        self.font_size * self.line_height
    }

    /// Check every invariant the layout and rendering passes rely on. Layout entry
    /// points call this before doing any work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_family.trim().is_empty() {
            return Err(ConfigError::EmptyFontFamily);
        }
        if !self.font_size.is_positive() {
            return Err(ConfigError::FontSize(self.font_size.0));
        }
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(ConfigError::LineHeight(self.line_height));
        }
        if !self.letter_spacing.is_finite() {
            return Err(ConfigError::LetterSpacing(self.letter_spacing.0));
        }
        for (name, value) in [
            ("horizontal", self.horizontal_offset),
            ("vertical", self.vertical_offset),
        ] {
            if !(value.is_finite() && value.0 >= 0.0) {
                return Err(ConfigError::Offset {
                    name,
                    value: value.0,
                });
            }
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(ConfigError::Dpi(self.dpi));
        }

        let width = self.content_width();
        if !width.is_positive() {
            return Err(ConfigError::ContentWidth(width.0));
        }
        let height = self.content_height();
        if !height.is_positive() {
            return Err(ConfigError::ContentHeight(height.0));
        }
        let first_line_bottom = self.vertical_offset + self.line_advance();
        if first_line_bottom > height {
            return Err(ConfigError::NoRoomForFirstLine {
                offset: self.vertical_offset.0,
                advance: self.line_advance().0,
                height: height.0,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = LayoutParameters::default();
        assert_eq!(params.validate(), Ok(()));
        assert_eq!(params.content_width(), Px(694.0));
        assert_eq!(params.content_height(), Px(1003.0));
        assert_eq!(params.line_advance(), Px(36.0));
    }

    #[test]
    fn rejects_non_positive_font_size() {
        let params = LayoutParameters {
            font_size: Px(0.0),
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::FontSize(0.0)));
    }

    #[test]
    fn rejects_non_positive_line_height() {
        let params = LayoutParameters {
            line_height: -1.0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::LineHeight(-1.0)));
    }

    #[test]
    fn rejects_margins_that_swallow_the_page() {
        let params = LayoutParameters {
            margins: Margins::symmetric(Px(10.0), Px(400.0)),
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::ContentWidth(-6.0)));

        let params = LayoutParameters {
            margins: Margins::symmetric(Px(600.0), Px(10.0)),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::ContentHeight(_))
        ));
    }

    #[test]
    fn first_line_must_fit_below_the_vertical_offset() {
        let params = LayoutParameters {
            vertical_offset: Px(5000.0),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NoRoomForFirstLine { .. })
        ));

        // 1003px of content: a 36px line fits exactly below 967px, but not below 968px
        let params = LayoutParameters {
            vertical_offset: Px(967.0),
            ..Default::default()
        };
        assert_eq!(params.validate(), Ok(()));
        let params = LayoutParameters {
            vertical_offset: Px(968.0),
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::NoRoomForFirstLine {
                offset: 968.0,
                advance: 36.0,
                height: 1003.0
            })
        );
    }

    #[test]
    fn horizontal_offset_narrows_the_lines() {
        let params = LayoutParameters {
            horizontal_offset: Px(94.0),
            ..Default::default()
        };
        assert_eq!(params.content_width(), Px(600.0));

        let params = LayoutParameters {
            horizontal_offset: Px(694.0),
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::ContentWidth(0.0)));
    }

    #[test]
    fn rejects_negative_offsets_and_empty_family() {
        let params = LayoutParameters {
            horizontal_offset: Px(-3.0),
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::Offset {
                name: "horizontal",
                value: -3.0
            })
        );

        let params = LayoutParameters {
            font_family: "  ".into(),
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::EmptyFontFamily));
    }

    #[test]
    fn json_fills_in_defaults() {
        let params = LayoutParameters::from_json(
            r#"{ "font_family": "Homemade Apple", "font_size": 30.0, "letter_spacing": 1.5 }"#,
        )
        .expect("valid parameters");
        assert_eq!(params.font_family, "Homemade Apple");
        assert_eq!(params.font_size, Px(30.0));
        assert_eq!(params.letter_spacing, Px(1.5));
        assert_eq!(params.line_height, 1.5);
        assert_eq!(params.page_size, A4.at_dpi(DEFAULT_DPI));
    }

    #[test]
    fn json_is_validated() {
        let err = LayoutParameters::from_json(r#"{ "font_size": -4 }"#).unwrap_err();
        assert!(matches!(
            err,
            HandwritingError::Config(ConfigError::FontSize(_))
        ));

        let err = LayoutParameters::from_json("{ not json").unwrap_err();
        assert!(matches!(err, HandwritingError::Json(_)));
    }
}
