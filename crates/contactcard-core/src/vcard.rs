//! vCard export
//!
//! Serializes a [`ContactRecord`] into a fixed-structure vCard 3.0 text:
//!
//! ```text
//! BEGIN:VCARD
//! VERSION:3.0
//! FN:...
//! ORG:...
//! TITLE:...
//! EMAIL:...
//! TEL:...
//! ADR:...
//! BDAY:...
//! URL:...
//! NOTE:...
//! END:VCARD
//! ```
//!
//! By default values are written verbatim. Embedded newlines, commas and
//! semicolons are not escaped, so a value containing them produces a card
//! that other readers may split differently. [`Escaping::Rfc6350`] opts
//! into escaping reserved characters.

use serde::{Deserialize, Serialize};

use crate::types::ContactRecord;

/// File name offered for the exported card
pub const VCARD_FILE_NAME: &str = "contact.vcf";

/// Media type of the exported card
pub const VCARD_MIME: &str = "text/vcard";

/// vCard format version written into the card
pub const VCARD_VERSION: &str = "3.0";

/// How field values are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Escaping {
    /// Values copied verbatim
    #[default]
    Raw,
    /// Backslash, comma, semicolon and newlines escaped
    Rfc6350,
}

impl Escaping {
    fn apply(self, value: &str) -> std::borrow::Cow<'_, str> {
        match self {
            Escaping::Raw => value.into(),
            Escaping::Rfc6350 => {
                if !value.contains(['\\', ',', ';', '\n', '\r']) {
                    return value.into();
                }
                let mut out = String::with_capacity(value.len() + 8);
                let mut chars = value.chars().peekable();
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => out.push_str("\\\\"),
                        ',' => out.push_str("\\,"),
                        ';' => out.push_str("\\;"),
                        '\r' => {
                            if chars.peek() == Some(&'\n') {
                                chars.next();
                            }
                            out.push_str("\\n");
                        }
                        '\n' => out.push_str("\\n"),
                        other => out.push(other),
                    }
                }
                out.into()
            }
        }
    }
}

/// A file ready to be handed to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime: String,
    pub contents: Vec<u8>,
}

impl ExportFile {
    /// Contents as text, if valid UTF-8
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.contents).ok()
    }
}

/// vCard built from a record snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCard {
    record: ContactRecord,
    escaping: Escaping,
}

impl VCard {
    /// Card with verbatim values
    pub fn from_record(record: ContactRecord) -> Self {
        Self {
            record,
            escaping: Escaping::Raw,
        }
    }

    pub fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }

    /// Render the card text. Lines are joined by `\n` with no trailing newline.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(12);
        lines.push("BEGIN:VCARD".to_string());
        lines.push(format!("VERSION:{}", VCARD_VERSION));
        for (field, value) in self.record.fields() {
            if let Some(tag) = field.vcard_tag() {
                lines.push(format!("{}:{}", tag, self.escaping.apply(value)));
            }
        }
        lines.push("END:VCARD".to_string());
        lines.join("\n")
    }

    /// Package the card as `contact.vcf`
    pub fn export(&self) -> ExportFile {
        ExportFile {
            file_name: VCARD_FILE_NAME.to_string(),
            mime: VCARD_MIME.to_string(),
            contents: self.render().into_bytes(),
        }
    }
}

impl std::fmt::Display for VCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
