use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, Local, Offset, TimeZone, Timelike};
use pdf_writer::{Date, Pdf, TextStr};

/// Metadata written into the PDF document information dictionary on export.
#[derive(Default, Debug, Clone)]
pub struct Info {
    pub title: Option<String>,
    /// Who wrote the text; no prescribed format
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Comma separated keywords
    pub keywords: Option<String>,
    /// The application that produced the pages. Defaults to this crate's name and version.
    pub creator: Option<String>,
    /// When the pages were written. Defaults to the moment of export.
    pub created: Option<DateTime<Local>>,
}

impl Info {
    pub fn new() -> Info {
        Info::default()
    }

    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub fn creator<S: ToString>(&mut self, creator: S) -> &mut Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Pin the creation date instead of using the time of export
    pub fn created(&mut self, created: DateTime<Local>) -> &mut Self {
        self.created = Some(created);
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let mut dict = writer.document_info(refs.gen(RefType::Info));

        if let Some(title) = self.title.as_deref() {
            dict.title(TextStr(title));
        }
        if let Some(author) = self.author.as_deref() {
            dict.author(TextStr(author));
        }
        if let Some(subject) = self.subject.as_deref() {
            dict.subject(TextStr(subject));
        }
        if let Some(keywords) = self.keywords.as_deref() {
            dict.keywords(TextStr(keywords));
        }

        let default_creator = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));
        dict.creator(TextStr(self.creator.as_deref().unwrap_or(default_creator)));
        dict.creation_date(pdf_date(&self.created.unwrap_or_else(Local::now)));
    }
}

/// Convert a timestamp to a PDF date, keeping its UTC offset
fn pdf_date<Tz: TimeZone>(when: &DateTime<Tz>) -> Date {
    let offset_minutes = when.offset().fix().local_minus_utc() / 60;
    Date::new(when.year() as u16)
        .month(when.month() as u8)
        .day(when.day() as u8)
        .hour(when.hour() as u8)
        .minute(when.minute() as u8)
        .second(when.second() as u8)
        .utc_offset_hour((offset_minutes / 60) as i8)
        .utc_offset_minute((offset_minutes % 60).unsigned_abs() as u8)
}
