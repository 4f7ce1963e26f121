//! Page state and context hooks for the contact card editor.
//!
//! The form is the source of truth; [`PageState`] is what the user sees
//! (preview text, avatar, QR box, acknowledgments). Both live in signals
//! provided at the root, next to a dispatch callback that routes UI events
//! through the core controller.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let form = use_form();
//! let page = use_page();
//! let dispatch = use_dispatch();
//!
//! dispatch.call(UiEvent::click(ids::SHARE_QR));
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

use contactcard_core::{
    apply, avatar::AvatarLoads, ids, resolve, CardConfig, CardError, CardResult, ClipboardWriter, ContactForm,
    Controller, DataUrl, DirectorySink, DownloadSink, Effect, ExportFile, FieldId, Host, QrImage,
    QrPanel, UiEvent,
};
use dioxus::prelude::*;

/// Get the session config.
pub fn get_config() -> CardConfig {
    crate::get_config()
}

/// Fields with a text mirror on the preview card
pub const MIRRORED: [FieldId; 6] = [
    FieldId::Name,
    FieldId::Title,
    FieldId::Company,
    FieldId::Email,
    FieldId::Phone,
    FieldId::Website,
];

/// What the page currently shows
#[derive(Debug)]
pub struct PageState {
    /// Preview element id -> text
    previews: BTreeMap<String, String>,
    /// Avatar preview image source
    pub avatar_src: Option<DataUrl>,
    /// QR container and box
    pub qr: QrPanel,
    /// Pending acknowledgment, shown as a modal until dismissed
    pub ack: Option<String>,
    /// Last exported file
    pub last_saved: Option<PathBuf>,
    /// Last export error
    pub export_error: Option<String>,
    sink: DirectorySink,
}

impl PageState {
    pub fn new(config: &CardConfig) -> Self {
        Self {
            previews: MIRRORED
                .iter()
                .map(|field| (field.preview_id(), String::new()))
                .collect(),
            avatar_src: None,
            qr: QrPanel::new(),
            ack: None,
            last_saved: None,
            export_error: None,
            sink: DirectorySink::new(config.download_dir.clone()),
        }
    }

    /// Preview text for a field ("" if it has no mirror)
    pub fn preview(&self, field: FieldId) -> &str {
        self.previews
            .get(&field.preview_id())
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl Host for PageState {
    fn has_element(&self, element_id: &str) -> bool {
        self.previews.contains_key(element_id)
    }

    fn set_text(&mut self, element_id: &str, text: &str) {
        if let Some(slot) = self.previews.get_mut(element_id) {
            *slot = text.to_string();
        }
    }

    fn set_image_source(&mut self, element_id: &str, src: &DataUrl) {
        if element_id == ids::PREVIEW_AVATAR {
            self.avatar_src = Some(src.clone());
        }
    }

    fn download(&mut self, file: &ExportFile) -> CardResult<()> {
        match self.sink.deliver(file) {
            Ok(path) => {
                self.last_saved = Some(path);
                self.export_error = None;
                Ok(())
            }
            Err(e) => {
                self.export_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn clear_qr(&mut self) {
        self.qr.clear();
    }

    fn render_qr(&mut self, image: &QrImage) {
        self.qr.render(image.clone());
    }

    fn show_qr_box(&mut self) {
        self.qr.show();
    }

    fn acknowledge(&mut self, message: &str) {
        self.ack = Some(message.to_string());
    }
}

/// System clipboard via arboard
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> CardResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| CardError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| CardError::Clipboard(e.to_string()))
    }
}

/// Provide form, page and dispatch contexts. Call once, in the root.
pub fn use_card_provider() {
    let config = use_hook(get_config);
    let form = use_context_provider(|| Signal::new(ContactForm::new()));
    let mut page = use_context_provider(|| Signal::new(PageState::new(&config)));

    let controller = use_hook(|| Controller::new(config.clone()));
    let avatar_loads = use_hook(|| Rc::new(AvatarLoads::new()));
    let dispatch = use_callback(move |event: UiEvent| {
        let pending = controller.dispatch(&event, &form.read(), &mut *page.write());
        for effect in pending {
            let seq = matches!(effect, Effect::LoadAvatar { .. }).then(|| avatar_loads.begin());
            let avatar_loads = avatar_loads.clone();
            spawn(async move {
                let follow_up = resolve(effect, &mut SystemClipboard).await;
                if let Some(seq) = seq {
                    avatar_loads.finish(seq);
                }
                apply(&mut *page.write(), follow_up);
            });
        }
    });
    use_context_provider(|| dispatch);
}

/// Hook to access the contact form.
pub fn use_form() -> Signal<ContactForm> {
    use_context::<Signal<ContactForm>>()
}

/// Hook to access the page state.
pub fn use_page() -> Signal<PageState> {
    use_context::<Signal<PageState>>()
}

/// Hook to route a UI event through the controller.
pub fn use_dispatch() -> Callback<UiEvent> {
    use_context::<Callback<UiEvent>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_mirrors_only_known_previews() {
        let mut page = PageState::new(&CardConfig::default());
        assert!(page.has_element("preview-name"));
        assert!(!page.has_element("preview-notes"));

        page.set_text("preview-name", "Ada");
        page.set_text("preview-notes", "ignored");
        assert_eq!(page.preview(FieldId::Name), "Ada");
        assert_eq!(page.preview(FieldId::Notes), "");
    }

    #[test]
    fn test_page_download_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = CardConfig {
            download_dir: dir.path().to_path_buf(),
            ..CardConfig::default()
        };
        let mut page = PageState::new(&config);
        let form = ContactForm::new().with(FieldId::Name, "Ada");

        let pending = Controller::new(config).dispatch(&UiEvent::click(ids::DOWNLOAD_VCF), &form, &mut page);
        assert!(pending.is_empty());
        assert_eq!(page.last_saved, Some(dir.path().join("contact.vcf")));
    }
}
