//! Contact record snapshot

use serde::Serialize;

use super::field::FieldId;
use super::form::ContactForm;

/// Field values captured from the form at the instant of an action.
///
/// Records are never cached; each export or share captures a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    values: [String; 9],
}

impl ContactRecord {
    /// Snapshot the current form
    pub fn capture(form: &ContactForm) -> Self {
        Self {
            values: FieldId::TEXT.map(|field| form.get(field).to_string()),
        }
    }

    /// Captured value of a text field (empty for the avatar)
    pub fn value(&self, field: FieldId) -> &str {
        FieldId::TEXT
            .iter()
            .position(|f| *f == field)
            .map(|idx| self.values[idx].as_str())
            .unwrap_or("")
    }

    /// Fields and values in export order
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        FieldId::TEXT
            .iter()
            .zip(self.values.iter())
            .map(|(field, value)| (*field, value.as_str()))
    }

    pub fn name(&self) -> &str {
        self.value(FieldId::Name)
    }

    pub fn company(&self) -> &str {
        self.value(FieldId::Company)
    }

    pub fn title(&self) -> &str {
        self.value(FieldId::Title)
    }
}

impl From<&ContactForm> for ContactRecord {
    fn from(form: &ContactForm) -> Self {
        Self::capture(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_is_a_snapshot() {
        let mut form = ContactForm::new().with(FieldId::Name, "Ada Lovelace");
        let record = ContactRecord::capture(&form);
        form.set(FieldId::Name, "Charles Babbage");

        assert_eq!(record.name(), "Ada Lovelace");
        assert_eq!(ContactRecord::capture(&form).name(), "Charles Babbage");
    }

    #[test]
    fn test_fields_order() {
        let form = ContactForm::new()
            .with(FieldId::Notes, "last")
            .with(FieldId::Name, "first");
        let record = ContactRecord::from(&form);
        let fields: Vec<_> = record.fields().collect();
        assert_eq!(fields.len(), 9);
        assert_eq!(fields[0], (FieldId::Name, "first"));
        assert_eq!(fields[8], (FieldId::Notes, "last"));
        assert_eq!(record.value(FieldId::Avatar), "");
    }
}
