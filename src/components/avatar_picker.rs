//! Avatar Picker Component
//!
//! Native file picker for the avatar. The selection is routed as a change
//! event on the avatar input; cancelling the dialog selects nothing.

use contactcard_core::{ids, FieldId, UiEvent};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::use_dispatch;

#[component]
pub fn AvatarPicker() -> Element {
    let dispatch = use_dispatch();
    let mut picking = use_signal(|| false);

    let pick = move |_| {
        picking.set(true);

        spawn(async move {
            // Blocking dialog, off the UI thread
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "gif", "webp"])
                    .set_title("Select Avatar")
                    .pick_file()
            })
            .await;

            let files = match picked {
                Ok(file) => file.into_iter().collect(),
                Err(e) => {
                    tracing::error!("File picker error: {:?}", e);
                    Vec::new()
                }
            };
            picking.set(false);
            dispatch.call(UiEvent::change(ids::AVATAR, files));
        });
    };

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: ids::AVATAR, "{FieldId::Avatar.label()}" }
            button {
                id: ids::AVATAR,
                class: "btn-ghost",
                r#type: "button",
                disabled: picking(),
                onclick: pick,
                if picking() { "Choosing..." } else { "📷 Choose image" }
            }
        }
    }
}
