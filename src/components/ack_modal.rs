//! Acknowledgment modal, shown after a successful link copy.

use dioxus::prelude::*;

use crate::context::use_page;

#[component]
pub fn AckModal() -> Element {
    let mut page = use_page();
    let message = page.read().ack.clone();

    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        div { class: "ack-overlay",
            div {
                class: "ack-content",
                role: "alertdialog",
                p { class: "ack-message", "{message}" }
                button {
                    class: "btn-primary",
                    autofocus: true,
                    onclick: move |_| page.write().ack = None,
                    "OK"
                }
            }
        }
    }
}
