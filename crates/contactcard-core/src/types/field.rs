//! Form field identifiers
//!
//! Every form input is addressed by its element id. The preview mirror
//! element of a field is found by prefixing that id with `preview-`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Prefix joining a field id to its preview mirror element id
pub const PREVIEW_PREFIX: &str = "preview-";

/// One input of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    Company,
    Title,
    Email,
    Phone,
    Address,
    Birthday,
    Website,
    Notes,
    Avatar,
}

impl FieldId {
    /// All form inputs, in document order
    pub const ALL: [FieldId; 10] = [
        FieldId::Name,
        FieldId::Company,
        FieldId::Title,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address,
        FieldId::Birthday,
        FieldId::Website,
        FieldId::Notes,
        FieldId::Avatar,
    ];

    /// The nine text inputs, in export and share order
    pub const TEXT: [FieldId; 9] = [
        FieldId::Name,
        FieldId::Company,
        FieldId::Title,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address,
        FieldId::Birthday,
        FieldId::Website,
        FieldId::Notes,
    ];

    /// Element id of the input
    pub fn id(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Company => "company",
            FieldId::Title => "title",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Address => "address",
            FieldId::Birthday => "birthday",
            FieldId::Website => "website",
            FieldId::Notes => "notes",
            FieldId::Avatar => "avatar",
        }
    }

    /// Element id of the preview mirror for this input
    pub fn preview_id(&self) -> String {
        preview_id_for(self.id())
    }

    /// vCard property tag, `None` for the avatar
    pub fn vcard_tag(&self) -> Option<&'static str> {
        match self {
            FieldId::Name => Some("FN"),
            FieldId::Company => Some("ORG"),
            FieldId::Title => Some("TITLE"),
            FieldId::Email => Some("EMAIL"),
            FieldId::Phone => Some("TEL"),
            FieldId::Address => Some("ADR"),
            FieldId::Birthday => Some("BDAY"),
            FieldId::Website => Some("URL"),
            FieldId::Notes => Some("NOTE"),
            FieldId::Avatar => None,
        }
    }

    /// Query parameter name in the share link, `None` for the avatar
    pub fn share_param(&self) -> Option<&'static str> {
        match self {
            FieldId::Title => Some("job_title"),
            FieldId::Avatar => None,
            other => Some(other.id()),
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Full name",
            FieldId::Company => "Company",
            FieldId::Title => "Job title",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::Address => "Address",
            FieldId::Birthday => "Birthday",
            FieldId::Website => "Website",
            FieldId::Notes => "Notes",
            FieldId::Avatar => "Avatar",
        }
    }

    /// Whether this input holds text (everything but the avatar)
    pub fn is_text(&self) -> bool {
        !matches!(self, FieldId::Avatar)
    }
}

/// Preview element id for an arbitrary element id.
///
/// Works for ids that are not form fields; the host decides whether such
/// an element exists.
pub fn preview_id_for(element_id: &str) -> String {
    format!("{PREVIEW_PREFIX}{element_id}")
}

impl FromStr for FieldId {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.id() == s)
            .ok_or_else(|| CardError::UnknownField(s.to_string()))
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
