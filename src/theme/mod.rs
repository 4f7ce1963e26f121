//! Theme for the contact card editor.

mod styles;

pub use styles::GLOBAL_STYLES;
