//! Core types for contact cards

pub mod data_url;
pub mod field;
pub mod form;
pub mod record;

pub use data_url::DataUrl;
pub use field::{preview_id_for, FieldId, PREVIEW_PREFIX};
pub use form::ContactForm;
pub use record::ContactRecord;
