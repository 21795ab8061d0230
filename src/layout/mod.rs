//! Greedy line wrapping and pagination.
//!
//! Text is laid out one word at a time: words are packed onto a line for as long as
//! the line measures within the page's content width, and finalized lines are stacked
//! down the page until the vertical cursor passes the content height, at which point a
//! new page begins. There is no lookahead, no hyphenation and no incremental re-layout;
//! any change to the text or the [`LayoutParameters`](crate::LayoutParameters) means
//! laying the whole document out again, which is cheap for the interactive amounts of
//! text this is meant for.
//!
//! # Layout Functions
//!
//! - [`wrap_lines`](crate::layout::wrap_lines) - wraps text into lines for a maximum width
//! - [`paginate`](crate::layout::paginate) - wraps and paginates in a single pass
//!
//! # Example
//!
//! ```
//! use handwriting_pages::layout::{paginate, Margins};
//! use handwriting_pages::{LayoutParameters, Px};
//!
//! let params = LayoutParameters {
//!     font_size: Px(10.0),
//!     line_height: 1.0,
//!     vertical_offset: Px(0.0),
//!     page_size: (Px(100.0), Px(20.0)),
//!     margins: Margins::empty(),
//!     ..Default::default()
//! };
//!
//! // every character is 10px wide
//! let measure = |text: &str| Px(10.0 * text.chars().count() as f32);
//!
//! let pages = paginate("one two three four five", &params, &measure).expect("valid parameters");
//! assert_eq!(pages.len(), 2);
//! assert_eq!(pages[0].text(), "one two\nthree four");
//! assert_eq!(pages[1].text(), "five");
//! ```

mod margins;
mod paginate;
mod text;
mod wrap;

pub use margins::*;
pub use paginate::*;
pub use text::*;
pub use wrap::*;
