use crate::{
    background::Background,
    export::{write_pdf, write_still, StillFormat},
    font::{FontBook, Typeface},
    info::Info,
    layout::{paginate, FontMeasurer, TextMeasurer},
    page::Page,
    params::LayoutParameters,
    render::{PageRenderer, PenStyle},
    HandwritingError,
};
use std::io::{Seek, Write};
use std::sync::Arc;
use tiny_skia::Pixmap;

/// A document is the full, ordered list of laid out pages for one input text,
/// together with the parameters they were laid out with.
///
/// Documents are never edited in place: when the text or any layout parameter
/// changes, lay the text out again with [`Document::layout`] and replace the old
/// document. Which page is being looked at is not the document's concern; see
/// [`PageCursor`].
#[derive(Debug, Clone)]
pub struct Document {
    pub info: Option<Info>,
    params: LayoutParameters,
    pages: Vec<Page>,
}

impl Document {
    /// Lay `text` out into pages using an arbitrary measurer. Every page is written
    /// on `background`.
    pub fn layout<M>(
        text: &str,
        params: &LayoutParameters,
        measurer: &M,
        background: Arc<Background>,
    ) -> Result<Document, HandwritingError>
    where
        M: TextMeasurer + ?Sized,
    {
        let pages = paginate(text, params, measurer)?
            .into_iter()
            .map(|page| Page::new(page, Arc::clone(&background)))
            .collect();

        Ok(Document {
            info: None,
            params: params.clone(),
            pages,
        })
    }

    /// Lay `text` out with the font named by `params.font_family`. Fails with
    /// [`HandwritingError::FontUnavailable`] before measuring anything if that family
    /// isn't in `fonts`. Characters the font can't draw are logged once, as a warning.
    pub fn layout_with_fonts(
        text: &str,
        params: &LayoutParameters,
        fonts: &FontBook,
        background: Arc<Background>,
    ) -> Result<Document, HandwritingError> {
        let font = fonts.resolve(&params.font_family)?;
        let missing = font.missing_chars(text);
        if !missing.is_empty() {
            log::warn!(
                "`{}` has no glyphs for {:?}, writing them with a replacement glyph",
                params.font_family,
                missing
            );
        }
        let measurer = FontMeasurer::for_params(font, params);
        Document::layout(text, params, &measurer, background)
    }

    /// Sets information about the document, used as metadata when exporting a PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    pub fn params(&self) -> &LayoutParameters {
        &self.params
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Get the page at the given 0-based index
    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Number of pages; always at least one
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Rasterise the page at `index`
    pub fn render_page(
        &self,
        index: usize,
        face: &dyn Typeface,
        pen: PenStyle,
    ) -> Result<Option<Pixmap>, HandwritingError> {
        let Some(page) = self.pages.get(index) else {
            return Ok(None);
        };
        let renderer = PageRenderer::new(face, &self.params, pen)?;
        renderer.render(page, index).map(Some)
    }

    /// Render the page at `index` and write it out as a single still image. Returns
    /// `false` without writing anything if there is no such page.
    pub fn write_page<W: Write + Seek>(
        &self,
        index: usize,
        face: &dyn Typeface,
        pen: PenStyle,
        format: StillFormat,
        w: &mut W,
    ) -> Result<bool, HandwritingError> {
        match self.render_page(index, face, pen)? {
            Some(pixmap) => {
                write_still(&pixmap, format, w)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Render every page and write them all out as one PDF, one page per page.
    ///
    /// Note: every page is rendered into memory before anything is written.
    pub fn write_pdf<W: Write>(
        &self,
        face: &dyn Typeface,
        pen: PenStyle,
        w: W,
    ) -> Result<(), HandwritingError> {
        let renderer = PageRenderer::new(face, &self.params, pen)?;
        let rasters = renderer.render_all(&self.pages)?;
        write_pdf(&rasters, self.params.dpi, self.info.as_ref(), w)
    }
}

/// The page currently shown to the user. Owned by the presentation layer, which
/// clamps it whenever a new layout changes the page count.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PageCursor {
    index: usize,
}

impl PageCursor {
    pub fn new() -> PageCursor {
        PageCursor::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next page, stopping at the last one. Returns whether the cursor moved.
    pub fn next(&mut self, page_count: usize) -> bool {
        if self.index + 1 < page_count {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous page, stopping at the first one. Returns whether the cursor moved.
    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `index`, clamped to the available pages
    pub fn go_to(&mut self, index: usize, page_count: usize) {
        self.index = index.min(page_count.saturating_sub(1));
    }

    /// Keep the cursor on a valid page after a new layout
    pub fn clamp(&mut self, page_count: usize) {
        self.go_to(self.index, page_count);
    }
}
