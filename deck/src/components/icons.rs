//! Inline outline icons.
//!
//! Path data lives next to the copy that uses it (see [`crate::content`]);
//! this module only knows how to draw a 24×24 stroke icon.

use leptos::prelude::*;

/// Renders an inline stroke SVG icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_BOLT size="32" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Icon inside a rounded, tinted badge.
#[component]
pub fn IconBadge(path: &'static str, #[prop(default = "badge-accent")] tint: &'static str) -> impl IntoView {
    let class = format!("icon-badge {tint}");
    view! {
        <div class=class>
            <Icon path=path size="32" />
        </div>
    }
}
