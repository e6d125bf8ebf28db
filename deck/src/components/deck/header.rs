use leptos::prelude::*;

use crate::content::{HERO_TAGLINE, HERO_TITLE, HERO_TITLE_ACCENT};

/// Hero banner.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header id="top" class="hero">
            <div class="container">
                <h1 class="hero-title">
                    {HERO_TITLE}
                    <span class="hero-accent">{HERO_TITLE_ACCENT}</span>
                </h1>
                <p class="hero-tagline">{HERO_TAGLINE}</p>
            </div>
        </header>
    }
}
