//! Contact Form Component
//!
//! The nine text inputs, the avatar picker and the three actions. Every
//! input event updates the form first, then goes through the dispatcher so
//! the preview mirror sees the value the form already holds.

use contactcard_core::{ids, FieldId, UiEvent};
use contactcard_ui::{ActionButton, ButtonVariant, FieldInput};
use dioxus::prelude::*;

use crate::components::AvatarPicker;
use crate::context::{use_dispatch, use_form, use_page};

#[component]
pub fn ContactFormPanel() -> Element {
    let mut form = use_form();
    let page = use_page();
    let dispatch = use_dispatch();

    let on_action = move |id: String| dispatch.call(UiEvent::click(id));

    rsx! {
        form {
            id: ids::FORM,
            class: "contact-form",
            onsubmit: move |e| e.prevent_default(),

            for field in FieldId::TEXT {
                FieldInput {
                    key: "{field}",
                    field: field,
                    value: form.read().get(field).to_string(),
                    oninput: move |value: String| {
                        form.write().set(field, value.clone());
                        dispatch.call(UiEvent::input(field.id(), value));
                    },
                }
            }

            AvatarPicker {}

            div { class: "form-actions",
                ActionButton {
                    id: ids::DOWNLOAD_VCF.to_string(),
                    tooltip: "Save the card as contact.vcf".to_string(),
                    onclick: on_action,
                    "Download vCard"
                }
                ActionButton {
                    id: ids::SHARE_QR.to_string(),
                    tooltip: "Show a QR code that adds this contact".to_string(),
                    onclick: on_action,
                    "Share as QR"
                }
                ActionButton {
                    id: ids::COPY_QR_LINK.to_string(),
                    variant: ButtonVariant::Secondary,
                    tooltip: "Copy the share link to the clipboard".to_string(),
                    onclick: on_action,
                    "Copy link"
                }
            }

            if let Some(path) = page.read().last_saved.clone() {
                div { class: "form-status", "Saved to {path.display()}" }
            }
            if let Some(err) = page.read().export_error.clone() {
                div { class: "form-status form-status--error", "⚠️ {err}" }
            }
        }
    }
}
