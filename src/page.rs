use crate::background::Background;
use crate::layout::PageText;
use std::sync::Arc;

/// One laid out page: its wrapped lines and the background they are written on.
///
/// Pages are produced by [`Document::layout`](crate::Document::layout) and never
/// modified afterwards. All pages of a document share one background.
#[derive(Debug, Clone)]
pub struct Page {
    lines: Vec<String>,
    background: Arc<Background>,
}

impl Page {
    pub fn new(text: PageText, background: Arc<Background>) -> Page {
        Page {
            lines: text.lines,
            background,
        }
    }

    /// The wrapped lines, top to bottom
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The page content as a single newline-delimited string
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
