//! Preview Card Component
//!
//! Read-only echo of the form. Each line shows the text last mirrored into
//! its `preview-<field>` element.

use contactcard_core::{ids, FieldId};
use dioxus::prelude::*;

use crate::context::use_page;

#[component]
pub fn PreviewCard() -> Element {
    let page = use_page();
    let state = page.read();

    let name = state.preview(FieldId::Name).to_string();
    let title = state.preview(FieldId::Title).to_string();
    let company = state.preview(FieldId::Company).to_string();
    let details: Vec<(FieldId, String)> = [FieldId::Email, FieldId::Phone, FieldId::Website]
        .into_iter()
        .map(|field| (field, state.preview(field).to_string()))
        .collect();
    let avatar = state.avatar_src.as_ref().map(|src| src.to_string());
    drop(state);

    rsx! {
        div { class: "preview-card",
            div { class: "preview-avatar",
                if let Some(src) = avatar {
                    img { id: ids::PREVIEW_AVATAR, src: "{src}", alt: "Avatar" }
                } else {
                    div { class: "preview-avatar__placeholder", "👤" }
                }
            }
            h2 { id: FieldId::Name.preview_id(), class: "preview-name", "{name}" }
            p { id: FieldId::Title.preview_id(), class: "preview-title", "{title}" }
            p { id: FieldId::Company.preview_id(), class: "preview-company", "{company}" }
            ul { class: "preview-details",
                for (field, value) in details {
                    li { key: "{field}", id: field.preview_id(), "{value}" }
                }
            }
        }
    }
}
