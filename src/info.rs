use crate::refs::{ObjKind, ObjectIds};
use chrono::{DateTime, Datelike, Local, Offset, TimeZone, Timelike};
use pdf_writer::{Date, Pdf, TextStr};

/// Descriptive metadata for the PDF's information dictionary. Every field is
/// optional; even an empty block records the producing crate and the creation
/// date when written.
#[derive(Default, Debug, Clone)]
pub struct Info {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Keywords for the document; Adobe Acrobat expects a comma separated list
    pub keywords: Option<String>,
}

impl Info {
    /// A block with every field unset
    pub fn new() -> Info {
        Info::default()
    }

    /// Attach a title to the block
    pub fn title<S: ToString>(mut self, title: S) -> Info {
        self.title = Some(title.to_string());
        self
    }

    /// Attach one or more authors to the block
    pub fn author<S: ToString>(mut self, author: S) -> Info {
        self.author = Some(author.to_string());
        self
    }

    /// Attach a subject to the block
    pub fn subject<S: ToString>(mut self, subject: S) -> Info {
        self.subject = Some(subject.to_string());
        self
    }

    /// Attach keywords to the block
    pub fn keywords<S: ToString>(mut self, keywords: S) -> Info {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectIds, writer: &mut Pdf) {
        let id = refs.gen(ObjKind::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        info.creation_date(creation_date(Local::now()));
    }
}

/// The given moment as a PDF date, timezone offset included
fn creation_date<Tz: TimeZone>(now: DateTime<Tz>) -> Date {
    let (offset_hours, offset_minutes) = offset_parts(now.offset().fix().local_minus_utc());
    Date::new(now.year() as u16)
        .month(now.month() as u8)
        .day(now.day() as u8)
        .hour(now.hour() as u8)
        .minute(now.minute() as u8)
        .second(now.second() as u8)
        .utc_offset_hour(offset_hours)
        .utc_offset_minute(offset_minutes)
}

/// Split a UTC offset in seconds into the signed whole hours and unsigned
/// remaining minutes the PDF date format wants
fn offset_parts(utc_offset_seconds: i32) -> (i8, u8) {
    let minutes = utc_offset_seconds / 60;
    ((minutes / 60) as i8, (minutes % 60).unsigned_abs() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_only_what_was_given() {
        let info = Info::new().title("a title").keywords("one, two");
        assert_eq!(info.title.as_deref(), Some("a title"));
        assert_eq!(info.keywords.as_deref(), Some("one, two"));
        assert!(info.author.is_none());
        assert!(info.subject.is_none());
    }

    #[test]
    fn utc_offsets_split_into_hours_and_minutes() {
        assert_eq!(offset_parts(0), (0, 0));
        assert_eq!(offset_parts(5 * 3600 + 30 * 60), (5, 30));
        assert_eq!(offset_parts(-(5 * 3600 + 30 * 60)), (-5, 30));
        assert_eq!(offset_parts(-3600), (-1, 0));
    }
}
