//! Contact Card Core Library
//!
//! Turns a contact form into a live preview, a vCard file and a shareable
//! deep link rendered as a QR code.
//!
//! ## Overview
//!
//! The form is the single source of truth. Every derived value (the vCard,
//! the share link, the QR image) is a pure function of the form state,
//! recomputed at the instant of the action. The [`Controller`] maps UI
//! events to [`Effect`]s through an explicit dispatch table; a [`Host`]
//! applies them.
//!
//! ## Quick Start
//!
//! ```
//! use contactcard_core::{ContactForm, Controller, FieldId};
//!
//! let form = ContactForm::new()
//!     .with(FieldId::Name, "Ada Lovelace")
//!     .with(FieldId::Email, "ada@example.com");
//!
//! let controller = Controller::default();
//! let card = controller.vcard(&form).render();
//! assert!(card.contains("FN:Ada Lovelace"));
//!
//! let link = controller.share_link(&form);
//! assert!(link.as_str().starts_with("https://contacts.google.com/new?name=Ada%20Lovelace&"));
//! ```

pub mod avatar;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod download;
pub mod error;
pub mod qr;
pub mod share;
pub mod types;
pub mod vcard;

// Re-exports
pub use clipboard::{ClipboardWriter, COPY_ACK};
pub use config::CardConfig;
pub use controller::{apply, ids, resolve, route, Controller, Effect, EventKind, Host, UiEvent, DISPATCH};
pub use download::{DirectorySink, DownloadSink};
pub use error::{CardError, CardResult};
pub use qr::{QrImage, QrPanel, DEFAULT_QR_SIZE};
pub use share::{ShareEndpoint, ShareLink, DEFAULT_ENDPOINT};
pub use types::*;
pub use vcard::{Escaping, ExportFile, VCard, VCARD_FILE_NAME, VCARD_MIME};
