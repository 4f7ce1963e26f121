//! Contact Card UI Components
//!
//! Dioxus components for the contact card editor: labelled inputs bound to
//! form fields and action buttons with tooltips.

pub mod components;

pub use components::*;
