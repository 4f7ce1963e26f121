//! Form-sync controller
//!
//! Wires UI events to the three outputs of the contact form: the preview
//! mirror, the vCard export and the share link / QR code.
//!
//! ## Flow
//!
//! ```text
//! UiEvent ──► DISPATCH ──► handler (pure) ──► Vec<Effect> ──► apply(host)
//!                                                  │
//!                                                  └─► async effects ──► resolve ──► apply(host)
//! ```
//!
//! Handlers only read the form and return effects; every side effect goes
//! through the injected [`Host`]. Avatar reads and clipboard writes are
//! asynchronous: [`apply`] hands them back to the caller, which runs them
//! through [`resolve`] and applies the follow-up effects when they finish.

use std::path::PathBuf;

use crate::avatar;
use crate::clipboard::{self, ClipboardWriter, COPY_ACK};
use crate::config::CardConfig;
use crate::error::CardResult;
use crate::qr::QrImage;
use crate::share::ShareLink;
use crate::types::{preview_id_for, ContactForm, ContactRecord, DataUrl, FieldId};
use crate::vcard::{ExportFile, VCard};

/// Element ids the controller knows about
pub mod ids {
    pub const FORM: &str = "vcard-form";
    pub const AVATAR: &str = "avatar";
    pub const PREVIEW_AVATAR: &str = "preview-avatar";
    pub const DOWNLOAD_VCF: &str = "download-vcf";
    pub const SHARE_QR: &str = "share-qr";
    pub const COPY_QR_LINK: &str = "copy-qr-link";
    pub const QR_CODE: &str = "qr-code";
    pub const QR_CODE_BOX: &str = "qr-code-box";
}

/// Kind of UI event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Input,
    Change,
    Click,
}

/// Event raised by the form, addressed by element id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A form input changed its value
    Input { target: String, value: String },
    /// A file input changed its selection
    Change { target: String, files: Vec<PathBuf> },
    /// A button was clicked
    Click { target: String },
}

impl UiEvent {
    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        UiEvent::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn change(target: impl Into<String>, files: Vec<PathBuf>) -> Self {
        UiEvent::Change {
            target: target.into(),
            files,
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        UiEvent::Click {
            target: target.into(),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::Input { .. } => EventKind::Input,
            UiEvent::Change { .. } => EventKind::Change,
            UiEvent::Click { .. } => EventKind::Click,
        }
    }

    pub fn target(&self) -> &str {
        match self {
            UiEvent::Input { target, .. }
            | UiEvent::Change { target, .. }
            | UiEvent::Click { target } => target,
        }
    }
}

/// Side effect requested by a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Set the visible text of an element, if it exists
    SetText { element_id: String, text: String },
    /// Read a file for the avatar preview (async)
    LoadAvatar { path: PathBuf },
    /// Set an image element's source
    SetImageSource { element_id: String, src: DataUrl },
    /// Offer a file for download
    Download(ExportFile),
    /// Remove any rendered QR image
    ClearQr,
    /// Render a QR image into the QR container
    RenderQr(QrImage),
    /// Make the QR box visible
    ShowQrBox,
    /// Write text to the clipboard (async)
    CopyToClipboard(String),
    /// Blocking acknowledgment for the user
    Acknowledge(String),
}

impl Effect {
    /// Whether the effect has to go through [`resolve`]
    pub fn is_async(&self) -> bool {
        matches!(self, Effect::LoadAvatar { .. } | Effect::CopyToClipboard(_))
    }
}

/// The document the controller drives
pub trait Host {
    fn has_element(&self, element_id: &str) -> bool;
    fn set_text(&mut self, element_id: &str, text: &str);
    fn set_image_source(&mut self, element_id: &str, src: &DataUrl);
    fn download(&mut self, file: &ExportFile) -> CardResult<()>;
    fn clear_qr(&mut self);
    fn render_qr(&mut self, image: &QrImage);
    fn show_qr_box(&mut self);
    fn acknowledge(&mut self, message: &str);
}

/// Which targets a route matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Any,
    Element(&'static str),
}

impl Target {
    fn matches(&self, target: &str) -> bool {
        match self {
            Target::Any => true,
            Target::Element(id) => *id == target,
        }
    }
}

type Handler = fn(&Controller, &UiEvent, &ContactForm) -> Vec<Effect>;

/// One row of the dispatch table
#[derive(Clone, Copy)]
pub struct Route {
    pub kind: EventKind,
    pub target: Target,
    pub name: &'static str,
    handler: Handler,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("kind", &self.kind)
            .field("target", &self.target)
            .field("name", &self.name)
            .finish()
    }
}

/// Event routing. The first matching row wins.
pub const DISPATCH: &[Route] = &[
    Route {
        kind: EventKind::Input,
        target: Target::Any,
        name: "mirror",
        handler: Controller::mirror_field,
    },
    Route {
        kind: EventKind::Change,
        target: Target::Element(ids::AVATAR),
        name: "avatar",
        handler: Controller::select_avatar,
    },
    Route {
        kind: EventKind::Click,
        target: Target::Element(ids::DOWNLOAD_VCF),
        name: "export",
        handler: Controller::export_contact,
    },
    Route {
        kind: EventKind::Click,
        target: Target::Element(ids::SHARE_QR),
        name: "share",
        handler: Controller::share_qr,
    },
    Route {
        kind: EventKind::Click,
        target: Target::Element(ids::COPY_QR_LINK),
        name: "copy-link",
        handler: Controller::copy_link,
    },
];

/// Find the route for an event
pub fn route(event: &UiEvent) -> Option<&'static Route> {
    DISPATCH
        .iter()
        .find(|route| route.kind == event.kind() && route.target.matches(event.target()))
}

/// Turns events into effects
#[derive(Debug, Clone, Default)]
pub struct Controller {
    config: CardConfig,
}

impl Controller {
    pub fn new(config: CardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Effects for an event. Pure: reads the form, touches nothing.
    pub fn handle(&self, event: &UiEvent, form: &ContactForm) -> Vec<Effect> {
        match route(event) {
            Some(route) => {
                tracing::debug!(route = route.name, target = event.target(), "Dispatch");
                (route.handler)(self, event, form)
            }
            None => {
                tracing::trace!(kind = ?event.kind(), target = event.target(), "Unrouted event");
                Vec::new()
            }
        }
    }

    /// Handle an event and apply its synchronous effects.
    ///
    /// Returns the asynchronous effects still to be resolved.
    pub fn dispatch<H: Host + ?Sized>(
        &self,
        event: &UiEvent,
        form: &ContactForm,
        host: &mut H,
    ) -> Vec<Effect> {
        apply(host, self.handle(event, form))
    }

    /// Current share link for the form
    pub fn share_link(&self, form: &ContactForm) -> ShareLink {
        ShareLink::build(&self.config.endpoint, &ContactRecord::capture(form))
    }

    /// Current vCard for the form
    pub fn vcard(&self, form: &ContactForm) -> VCard {
        VCard::from_record(ContactRecord::capture(form)).with_escaping(self.config.escaping)
    }

    fn mirror_field(&self, event: &UiEvent, _form: &ContactForm) -> Vec<Effect> {
        let UiEvent::Input { target, value } = event else {
            return Vec::new();
        };
        // The avatar preview is an image, handled on change.
        if target == FieldId::Avatar.id() {
            return Vec::new();
        }
        vec![Effect::SetText {
            element_id: preview_id_for(target),
            text: value.clone(),
        }]
    }

    fn select_avatar(&self, event: &UiEvent, _form: &ContactForm) -> Vec<Effect> {
        let UiEvent::Change { files, .. } = event else {
            return Vec::new();
        };
        avatar::first_selected(files)
            .map(|path| Effect::LoadAvatar {
                path: path.to_path_buf(),
            })
            .into_iter()
            .collect()
    }

    fn export_contact(&self, _event: &UiEvent, form: &ContactForm) -> Vec<Effect> {
        let file = self.vcard(form).export();
        tracing::info!(bytes = file.contents.len(), "Exporting {}", file.file_name);
        vec![Effect::Download(file)]
    }

    fn share_qr(&self, _event: &UiEvent, form: &ContactForm) -> Vec<Effect> {
        let link = self.share_link(form);
        match QrImage::render(link.as_str(), self.config.qr_size) {
            Ok(image) => {
                tracing::info!(len = link.as_str().len(), "Rendered share QR");
                vec![Effect::ClearQr, Effect::RenderQr(image), Effect::ShowQrBox]
            }
            Err(e) => {
                tracing::error!("Failed to generate QR code: {}", e);
                Vec::new()
            }
        }
    }

    fn copy_link(&self, _event: &UiEvent, form: &ContactForm) -> Vec<Effect> {
        vec![Effect::CopyToClipboard(self.share_link(form).into_string())]
    }
}

/// Apply synchronous effects to the host; return the asynchronous ones
pub fn apply<H: Host + ?Sized>(host: &mut H, effects: Vec<Effect>) -> Vec<Effect> {
    let mut pending = Vec::new();
    for effect in effects {
        match effect {
            Effect::SetText { element_id, text } => {
                if host.has_element(&element_id) {
                    host.set_text(&element_id, &text);
                }
            }
            Effect::SetImageSource { element_id, src } => host.set_image_source(&element_id, &src),
            Effect::Download(file) => {
                if let Err(e) = host.download(&file) {
                    tracing::error!("Failed to deliver {}: {}", file.file_name, e);
                }
            }
            Effect::ClearQr => host.clear_qr(),
            Effect::RenderQr(image) => host.render_qr(&image),
            Effect::ShowQrBox => host.show_qr_box(),
            Effect::Acknowledge(message) => host.acknowledge(&message),
            Effect::LoadAvatar { .. } | Effect::CopyToClipboard(_) => pending.push(effect),
        }
    }
    pending
}

/// Run one asynchronous effect and return its follow-up effects.
///
/// Synchronous effects are passed through unchanged. A failed avatar read
/// leaves the preview as it was; a failed clipboard write produces no
/// acknowledgment.
pub async fn resolve(effect: Effect, clipboard: &mut dyn ClipboardWriter) -> Vec<Effect> {
    match effect {
        Effect::LoadAvatar { path } => match avatar::load_data_url(&path).await {
            Ok(src) => vec![Effect::SetImageSource {
                element_id: ids::PREVIEW_AVATAR.to_string(),
                src,
            }],
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to read avatar: {}", e);
                Vec::new()
            }
        },
        Effect::CopyToClipboard(text) => {
            if clipboard::copy_text(clipboard, &text) {
                vec![Effect::Acknowledge(COPY_ACK.to_string())]
            } else {
                Vec::new()
            }
        }
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> ContactForm {
        ContactForm::new()
            .with(FieldId::Name, "Ada Lovelace")
            .with(FieldId::Company, "Analytical Engines")
    }

    #[test]
    fn test_routes() {
        assert_eq!(route(&UiEvent::input("name", "x")).map(|r| r.name), Some("mirror"));
        assert_eq!(route(&UiEvent::input("anything", "x")).map(|r| r.name), Some("mirror"));
        assert_eq!(route(&UiEvent::change("avatar", vec![])).map(|r| r.name), Some("avatar"));
        assert_eq!(route(&UiEvent::click("download-vcf")).map(|r| r.name), Some("export"));
        assert_eq!(route(&UiEvent::click("share-qr")).map(|r| r.name), Some("share"));
        assert_eq!(route(&UiEvent::click("copy-qr-link")).map(|r| r.name), Some("copy-link"));
        assert!(route(&UiEvent::click("name")).is_none());
        assert!(route(&UiEvent::change("name", vec![])).is_none());
    }

    #[test]
    fn test_mirror_effect() {
        let controller = Controller::default();
        let effects = controller.handle(&UiEvent::input("title", "Countess"), &ContactForm::new());
        assert_eq!(
            effects,
            vec![Effect::SetText {
                element_id: "preview-title".to_string(),
                text: "Countess".to_string(),
            }]
        );
    }

    #[test]
    fn test_avatar_input_is_not_mirrored() {
        let controller = Controller::default();
        let effects = controller.handle(&UiEvent::input("avatar", "C:\\fakepath\\me.png"), &ContactForm::new());
        assert!(effects.is_empty());
    }

    #[test]
    fn test_avatar_selection() {
        let controller = Controller::default();
        assert!(controller
            .handle(&UiEvent::change("avatar", vec![]), &ContactForm::new())
            .is_empty());

        let files = vec![PathBuf::from("first.png"), PathBuf::from("second.png")];
        let effects = controller.handle(&UiEvent::change("avatar", files), &ContactForm::new());
        assert_eq!(
            effects,
            vec![Effect::LoadAvatar {
                path: PathBuf::from("first.png")
            }]
        );
        assert!(effects[0].is_async());
    }

    #[test]
    fn test_share_effects_order() {
        let controller = Controller::default();
        let effects = controller.handle(&UiEvent::click("share-qr"), &ada());
        assert_eq!(effects.len(), 3);
        assert_eq!(effects[0], Effect::ClearQr);
        assert!(matches!(&effects[1], Effect::RenderQr(image) if image.size() == 256
            && image.text().starts_with("https://contacts.google.com/new?name=Ada%20Lovelace&")));
        assert_eq!(effects[2], Effect::ShowQrBox);
    }

    #[test]
    fn test_copy_matches_share() {
        let controller = Controller::default();
        let form = ada();
        let share = controller.handle(&UiEvent::click("share-qr"), &form);
        let copy = controller.handle(&UiEvent::click("copy-qr-link"), &form);
        let Effect::RenderQr(image) = &share[1] else {
            panic!("expected QR render");
        };
        assert_eq!(copy, vec![Effect::CopyToClipboard(image.text().to_string())]);
    }

    #[test]
    fn test_export_uses_configured_escaping() {
        let controller = Controller::new(CardConfig {
            escaping: crate::vcard::Escaping::Rfc6350,
            ..CardConfig::default()
        });
        let form = ContactForm::new().with(FieldId::Company, "Engines, Ltd");
        let effects = controller.handle(&UiEvent::click("download-vcf"), &form);
        let [Effect::Download(file)] = effects.as_slice() else {
            panic!("expected one download");
        };
        assert!(file.text().unwrap().contains("ORG:Engines\\, Ltd\n"));
    }

    #[tokio::test]
    async fn test_resolve_passes_sync_effects_through() {
        struct Unused;
        impl ClipboardWriter for Unused {
            fn write_text(&mut self, _text: &str) -> CardResult<()> {
                unreachable!("clipboard must not be touched")
            }
        }
        let out = resolve(Effect::ShowQrBox, &mut Unused).await;
        assert_eq!(out, vec![Effect::ShowQrBox]);
    }
}
