use dioxus::prelude::*;

use crate::components::{AckModal, ContactFormPanel, PreviewCard, QrShareBox};
use crate::context::use_card_provider;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the form/page/dispatch contexts, then lays
/// out the form next to its live preview.
#[component]
pub fn App() -> Element {
    use_card_provider();

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "card-editor",
            section { class: "card-editor__form",
                h1 { class: "page-title", "Contact Card" }
                ContactFormPanel {}
            }
            section { class: "card-editor__preview",
                PreviewCard {}
                QrShareBox {}
            }
        }
        AckModal {}
    }
}
