//! Button Components
//!
//! Action buttons for the contact card editor:
//! - Primary: main actions (download, share)
//! - Secondary: follow-up actions (copy link)
//! - Ghost: subtle actions (clear, pick avatar)

use dioxus::prelude::*;

/// Attribute marking an element for tooltip display
pub const TOOLTIP_TOGGLE: &str = "tooltip";

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the ActionButton component
#[derive(Clone, PartialEq, Props)]
pub struct ActionButtonProps {
    /// Element id; the controller routes clicks by it
    pub id: String,
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Tooltip text, shown on hover
    #[props(default)]
    pub tooltip: Option<String>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Click handler, called with the element id
    pub onclick: EventHandler<String>,
    /// Button content
    pub children: Element,
}

/// Styled button addressed by element id
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ActionButton {
///         id: "download-vcf".to_string(),
///         tooltip: "Save the card as contact.vcf".to_string(),
///         onclick: move |id| dispatch(UiEvent::click(id)),
///         "Download vCard"
///     }
/// }
/// ```
#[component]
pub fn ActionButton(props: ActionButtonProps) -> Element {
    let class = props.variant.class();
    let id = props.id.clone();

    rsx! {
        button {
            id: "{props.id}",
            class: "{class}",
            r#type: "button",
            disabled: props.disabled,
            title: props.tooltip.clone().unwrap_or_default(),
            "data-bs-toggle": if props.tooltip.is_some() { TOOLTIP_TOGGLE } else { "" },
            onclick: move |_| props.onclick.call(id.clone()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn-secondary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
