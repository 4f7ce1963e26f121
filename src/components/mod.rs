//! UI Components for the contact card editor.

mod ack_modal;
mod avatar_picker;
mod contact_form;
mod preview_card;
mod qr_share;

pub use ack_modal::AckModal;
pub use avatar_picker::AvatarPicker;
pub use contact_form::ContactFormPanel;
pub use preview_card::PreviewCard;
pub use qr_share::QrShareBox;
