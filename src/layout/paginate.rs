use super::text::TextMeasurer;
use super::wrap::LineBuffer;
use crate::params::LayoutParameters;
use crate::units::Px;
use crate::HandwritingError;

/// The text of one laid out page: its wrapped lines, top to bottom.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageText {
    pub lines: Vec<String>,
}

impl PageText {
    /// The page content as a single newline-delimited string
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Tracks the vertical cursor while finalized lines are placed, and cuts pages.
///
/// The cursor is the bottom of the last line placed on the current page, relative to
/// the top of the content box (the vertical offset while the page is still empty).
/// A line that would push the cursor past the content height doesn't go on the
/// current page: the page is complete, and the line opens the next one, leaving the
/// cursor one line advance below the vertical offset.
struct Paginator {
    start: Px,
    advance: Px,
    max_height: Px,
    cursor: Px,
    lines: Vec<String>,
    pages: Vec<PageText>,
}

impl Paginator {
    fn new(params: &LayoutParameters) -> Paginator {
        Paginator {
            start: params.vertical_offset,
            advance: params.line_advance(),
            max_height: params.content_height(),
            cursor: params.vertical_offset,
            lines: Vec::new(),
            pages: Vec::new(),
        }
    }

    fn place_line(&mut self, line: String) {
        if !self.lines.is_empty() && self.cursor + self.advance > self.max_height {
            log::trace!(
                "page {} full after {} lines",
                self.pages.len() + 1,
                self.lines.len()
            );
            self.pages.push(PageText {
                lines: std::mem::take(&mut self.lines),
            });
            self.cursor = self.start;
        }

        self.lines.push(line);
        self.cursor += self.advance;
    }

    /// Emit the last, possibly partial, page. A document always has at least one
    /// page, even when there was no text at all.
    fn finish(mut self) -> Vec<PageText> {
        if !self.lines.is_empty() || self.pages.is_empty() {
            self.pages.push(PageText { lines: self.lines });
        }
        self.pages
    }
}

/// Offers every word of `text` to the line buffer, placing lines as they are
/// finalized. Returns the number of words seen.
fn place_words<M>(
    text: &str,
    max_width: Px,
    measurer: &M,
    buffer: &mut LineBuffer,
    paginator: &mut Paginator,
) -> usize
where
    M: TextMeasurer + ?Sized,
{
    let mut words = 0;
    for word in text.split_whitespace() {
        words += 1;
        if let Some(line) = buffer.push_word(word, max_width, measurer) {
            paginator.place_line(line);
        }
    }
    words
}

/// Wraps `text` into lines that fit the content width and distributes them over as
/// many pages as needed, in a single pass.
///
/// Lines are built greedily, word by word (see [`wrap_lines`](super::wrap_lines)).
/// Each finalized line advances the vertical cursor by
/// `font_size * line_height`. A line that would take the cursor past the content
/// height closes the page instead and becomes the first line of the next one, so
/// every line of every page lies inside the content box. The final page is always
/// emitted, so the result is never empty: empty input yields a single page without
/// lines.
///
/// When `params.honor_line_breaks` is set, every newline in `text` ends the current
/// line (blank lines are kept as empty lines); otherwise newlines are whitespace like
/// any other.
///
/// The parameters are validated first; invalid parameters are reported as
/// [`HandwritingError::Config`] without any layout taking place.
pub fn paginate<M>(
    text: &str,
    params: &LayoutParameters,
    measurer: &M,
) -> Result<Vec<PageText>, HandwritingError>
where
    M: TextMeasurer + ?Sized,
{
    params.validate()?;

    let max_width = params.content_width();
    let mut buffer = LineBuffer::default();
    let mut paginator = Paginator::new(params);
    let mut words = 0usize;

    if params.honor_line_breaks {
        for paragraph in text.lines() {
            words += place_words(paragraph, max_width, measurer, &mut buffer, &mut paginator);
            paginator.place_line(buffer.take_forced());
        }
    } else {
        words += place_words(text, max_width, measurer, &mut buffer, &mut paginator);
        if let Some(line) = buffer.take() {
            paginator.place_line(line);
        }
    }

    let pages = paginator.finish();
    log::debug!(
        "laid out {} words on {} page(s) ({} wide, {} tall)",
        words,
        pages.len(),
        max_width,
        params.content_height()
    );
    Ok(pages)
}
