use super::text::TextMeasurer;
use crate::units::Px;

/// The line currently being accumulated by the greedy wrapper.
///
/// Words are offered one at a time; a word either extends the line or, when the
/// extended line would be wider than the maximum width, finalizes the line and seeds
/// the next one. A word offered to an empty buffer is always accepted, which is how a
/// single word wider than the maximum ends up alone on its own line instead of being
/// split.
#[derive(Debug, Default)]
pub(crate) struct LineBuffer {
    line: String,
}

impl LineBuffer {
    /// Offer `word` to the line. Returns the finalized line if `word` didn't fit and
    /// now starts the next line instead.
    pub(crate) fn push_word<M>(&mut self, word: &str, max_width: Px, measurer: &M) -> Option<String>
    where
        M: TextMeasurer + ?Sized,
    {
        if self.line.is_empty() {
            self.line.push_str(word);
            return None;
        }

        let mut candidate = String::with_capacity(self.line.len() + 1 + word.len());
        candidate.push_str(&self.line);
        candidate.push(' ');
        candidate.push_str(word);

        if measurer.measure(&candidate) <= max_width {
            self.line = candidate;
            None
        } else {
            // the seed isn't re-measured: the next line has the same width budget, and
            // a seed that is too wide on its own gets finalized alone by the next word
            Some(std::mem::replace(&mut self.line, word.to_string()))
        }
    }

    /// Finalize whatever is in the buffer, if anything
    pub(crate) fn take(&mut self) -> Option<String> {
        if self.line.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.line))
        }
    }

    /// Finalize the buffer even if it's empty, for forced line breaks
    pub(crate) fn take_forced(&mut self) -> String {
        std::mem::take(&mut self.line)
    }
}

/// Greedily wraps `text` into lines no wider than `max_width`, breaking only between
/// words. Runs of whitespace (including newlines) collapse into a single space.
///
/// Every returned line is non-empty and the words appear in their original order.
/// The one exception to the width bound is a word that is wider than `max_width` on
/// its own: it is placed alone on a line rather than broken.
///
/// ```
/// use handwriting_pages::layout::wrap_lines;
/// use handwriting_pages::Px;
///
/// let monospace = |text: &str| Px(text.chars().count() as f32);
/// let lines = wrap_lines("the quick  brown fox", Px(10.0), &monospace);
/// assert_eq!(lines, vec!["the quick", "brown fox"]);
/// ```
pub fn wrap_lines<M>(text: &str, max_width: Px, measurer: &M) -> Vec<String>
where
    M: TextMeasurer + ?Sized,
{
    let mut buffer = LineBuffer::default();
    let mut lines: Vec<String> = text
        .split_whitespace()
        .filter_map(|word| buffer.push_word(word, max_width, measurer))
        .collect();
    lines.extend(buffer.take());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monospace(text: &str) -> Px {
        Px(text.chars().count() as f32)
    }

    #[test]
    fn everything_fits_on_one_line() {
        assert_eq!(
            wrap_lines("one two three", Px(100.0), &monospace),
            vec!["one two three"]
        );
    }

    #[test]
    fn breaks_between_words() {
        assert_eq!(
            wrap_lines("aa bb cc dd ee", Px(5.0), &monospace),
            vec!["aa bb", "cc dd", "ee"]
        );
    }

    #[test]
    fn exact_fit_does_not_break() {
        assert_eq!(wrap_lines("abc def", Px(7.0), &monospace), vec!["abc def"]);
        assert_eq!(
            wrap_lines("abc def", Px(6.0), &monospace),
            vec!["abc", "def"]
        );
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        assert_eq!(
            wrap_lines("aaaaaaaaaa", Px(4.0), &monospace),
            vec!["aaaaaaaaaa"]
        );
        assert_eq!(
            wrap_lines("hi aaaaaaaaaa yo", Px(4.0), &monospace),
            vec!["hi", "aaaaaaaaaa", "yo"]
        );
    }

    #[test]
    fn whitespace_is_normalized() {
        assert_eq!(
            wrap_lines("  one \t two\n\nthree   ", Px(100.0), &monospace),
            vec!["one two three"]
        );
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(wrap_lines("", Px(10.0), &monospace).is_empty());
        assert!(wrap_lines(" \n\t ", Px(10.0), &monospace).is_empty());
    }

    #[test]
    fn buffer_reports_finalized_lines() {
        let mut buffer = LineBuffer::default();
        assert_eq!(buffer.push_word("abc", Px(5.0), &monospace), None);
        assert_eq!(
            buffer.push_word("defgh", Px(5.0), &monospace),
            Some("abc".to_string())
        );
        assert_eq!(buffer.take(), Some("defgh".to_string()));
        assert_eq!(buffer.take(), None);
        assert_eq!(buffer.take_forced(), "");
    }
}
