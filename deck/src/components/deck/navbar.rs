use leptos::prelude::*;

use crate::content::{BRAND, BRAND_ACCENT, NAV_LINKS};

/// Sticky top bar with the brand and the section anchors.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="container navbar-inner">
                <a class="brand" href="#top">
                    {BRAND}
                    <span class="tone-accent">{BRAND_ACCENT}</span>
                </a>
                <ul class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <li>
                                <a href=link.href>{link.label}</a>
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </nav>
    }
}
