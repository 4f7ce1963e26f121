//! Reusable UI components for the contact card editor

mod button;
mod input;

pub use button::*;
pub use input::*;
