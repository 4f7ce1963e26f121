//! Contact form state
//!
//! The form is the single source of truth. Everything the app exports or
//! shares is derived from it at the moment of the action.

use serde::{Deserialize, Serialize};

use super::field::FieldId;
use crate::error::{CardError, CardResult};

/// Current values of the nine text inputs.
///
/// The avatar is not part of the form state: the selected file is only
/// ever rendered into the preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub birthday: String,
    pub website: String,
    pub notes: String,
}

impl ContactForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field (empty for the avatar)
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Company => &self.company,
            FieldId::Title => &self.title,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Address => &self.address,
            FieldId::Birthday => &self.birthday,
            FieldId::Website => &self.website,
            FieldId::Notes => &self.notes,
            FieldId::Avatar => "",
        }
    }

    /// Replace the value of a text field. Setting the avatar is a no-op.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::Company => &mut self.company,
            FieldId::Title => &mut self.title,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Address => &mut self.address,
            FieldId::Birthday => &mut self.birthday,
            FieldId::Website => &mut self.website,
            FieldId::Notes => &mut self.notes,
            FieldId::Avatar => return,
        };
        *slot = value.into();
    }

    /// Replace a value addressed by element id
    pub fn set_by_id(&mut self, element_id: &str, value: impl Into<String>) -> CardResult<FieldId> {
        let field: FieldId = element_id.parse()?;
        if !field.is_text() {
            return Err(CardError::UnknownField(element_id.to_string()));
        }
        self.set(field, value);
        Ok(field)
    }

    /// Builder-style setter
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Text fields with their values, in export order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        FieldId::TEXT.into_iter().map(move |field| (field, self.get(field)))
    }

    /// True when every text field is empty
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_empty())
    }

    /// Parse a form from JSON
    pub fn from_json(json: &str) -> CardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the form as pretty JSON
    pub fn to_json(&self) -> CardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = ContactForm::new();
        assert!(form.is_empty());
        assert_eq!(form.iter().count(), 9);
    }

    #[test]
    fn test_set_and_get() {
        let mut form = ContactForm::new();
        form.set(FieldId::Title, "Engineer");
        assert_eq!(form.get(FieldId::Title), "Engineer");
        assert_eq!(form.title, "Engineer");
        assert!(!form.is_empty());
    }

    #[test]
    fn test_avatar_is_ignored() {
        let mut form = ContactForm::new();
        form.set(FieldId::Avatar, "photo.png");
        assert!(form.is_empty());
        assert_eq!(form.get(FieldId::Avatar), "");
    }

    #[test]
    fn test_set_by_id() {
        let mut form = ContactForm::new();
        let field = form.set_by_id("phone", "+44 20 7946 0000").unwrap();
        assert_eq!(field, FieldId::Phone);
        assert_eq!(form.phone, "+44 20 7946 0000");

        assert!(form.set_by_id("avatar", "x").is_err());
        assert!(form.set_by_id("fax", "x").is_err());
    }

    #[test]
    fn test_json_partial() {
        let form = ContactForm::from_json(r#"{"name": "Ada", "notes": "first programmer"}"#).unwrap();
        assert_eq!(form.name, "Ada");
        assert_eq!(form.notes, "first programmer");
        assert_eq!(form.email, "");
    }
}
