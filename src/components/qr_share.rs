//! QR Share Box Component
//!
//! Hidden until the first share. Shows the single rendered QR image; every
//! share replaces it.

use contactcard_core::ids;
use dioxus::prelude::*;

use crate::context::use_page;

#[component]
pub fn QrShareBox() -> Element {
    let page = use_page();
    let state = page.read();
    let visible = state.qr.is_visible();
    let svg = state.qr.image().map(|image| image.svg().to_string());
    let size = state.qr.image().map(|image| image.size()).unwrap_or_default();
    drop(state);

    rsx! {
        div {
            id: ids::QR_CODE_BOX,
            class: "qr-box",
            style: if visible { "display: block" } else { "display: none" },
            p { class: "qr-box__hint", "Scan to add this contact" }
            div {
                id: ids::QR_CODE,
                class: "qr-code",
                style: "width: {size}px; height: {size}px",
                if let Some(svg) = svg {
                    div { dangerous_inner_html: "{svg}" }
                }
            }
        }
    }
}
