//! Input Field Components
//!
//! Labelled inputs bound to contact form fields. Each input carries its
//! field's element id, so the form can address it the same way the
//! controller does.

use contactcard_core::FieldId;
use dioxus::prelude::*;

/// HTML input type for a text field
pub fn input_type(field: FieldId) -> &'static str {
    match field {
        FieldId::Email => "email",
        FieldId::Phone => "tel",
        FieldId::Birthday => "date",
        FieldId::Website => "url",
        FieldId::Avatar => "file",
        _ => "text",
    }
}

/// Whether a field is edited in a multi-line textarea
pub fn is_multiline(field: FieldId) -> bool {
    matches!(field, FieldId::Address | FieldId::Notes)
}

/// Placeholder shown in an empty field
pub fn placeholder(field: FieldId) -> &'static str {
    match field {
        FieldId::Name => "Ada Lovelace",
        FieldId::Company => "Analytical Engines",
        FieldId::Title => "Mathematician",
        FieldId::Email => "ada@example.com",
        FieldId::Phone => "+44 20 7946 0000",
        FieldId::Address => "12 St James's Square, London",
        FieldId::Birthday => "1815-12-10",
        FieldId::Website => "https://example.com",
        FieldId::Notes => "anything else worth remembering",
        FieldId::Avatar => "",
    }
}

/// Properties for the FieldInput component
#[derive(Clone, PartialEq, Props)]
pub struct FieldInputProps {
    /// Form field this input edits
    pub field: FieldId,
    /// Current value
    pub value: String,
    /// Handler called with the new value on every input event
    pub oninput: EventHandler<String>,
    /// Number of visible rows for multi-line fields
    #[props(default = 3)]
    pub rows: u32,
}

/// Labelled input for one text field of the contact form
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     FieldInput {
///         field: FieldId::Name,
///         value: name(),
///         oninput: move |s| name.set(s),
///     }
/// }
/// ```
#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let id = props.field.id();
    let label = props.field.label();
    let hint = placeholder(props.field);

    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{id}",
                "{label}"
            }
            if is_multiline(props.field) {
                textarea {
                    id: "{id}",
                    name: "{id}",
                    class: "input-field textarea",
                    rows: "{props.rows}",
                    placeholder: "{hint}",
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                }
            } else {
                input {
                    id: "{id}",
                    name: "{id}",
                    class: "input-field",
                    r#type: input_type(props.field),
                    placeholder: "{hint}",
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                }
            }
        }
    }
}
