use leptos::prelude::*;

use super::super::Icon;
use crate::content::ICON_ARROW_LEFT;
use crate::types::HomeLink;

/// Top bar with the "navigate home" control and the status dot.
///
/// The control is a real link so the static page works on its own; the
/// browser runtime intercepts it when the host registers a callback.
#[component]
pub fn MarketHeader(home: HomeLink) -> impl IntoView {
    view! {
        <div class="topbar">
            <div class="container topbar-inner">
                <a class="back-link" href=home.href data-role="navigate-home">
                    <Icon path=ICON_ARROW_LEFT size="20" />
                    <span>{home.label}</span>
                </a>
                <div class="status">
                    <span class="status-dot"></span>
                    <span>"Online"</span>
                </div>
            </div>
        </div>
    }
}
