//! Building blocks shared by both pages.

use leptos::prelude::*;

use super::IconBadge;
use crate::types::{FeatureCard, Rich, Run};

/// Full-width page section with a centred container.
#[component]
pub fn Section(
    /// Anchor id, target of the navbar links
    id: &'static str,
    /// Background variant
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "section".to_string()
    } else {
        format!("section {class}")
    };
    view! {
        <section id=id class=class>
            <div class="container">{children()}</div>
        </section>
    }
}

/// Centred section heading with an optional lead paragraph.
#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] lead: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title">{title}</h2>
            {lead.map(|lead| view! { <p class="section-lead">{lead}</p> })}
        </div>
    }
}

/// Rich text runs, rendered inline.
#[component]
pub fn RichText(runs: Rich) -> impl IntoView {
    runs.iter()
        .map(|run| match *run {
            Run::Text(text) => view! { {text} }.into_any(),
            Run::Strong(text, tone) => {
                view! { <strong class=tone.class()>{text}</strong> }.into_any()
            }
            Run::Link { text, href } => view! {
                <a class="inline-link" href=href target="_blank" rel="noopener noreferrer">{text}</a>
            }
            .into_any(),
        })
        .collect::<Vec<_>>()
}

/// Rich text as a paragraph.
#[component]
pub fn Paragraph(runs: Rich, #[prop(default = "")] class: &'static str) -> impl IntoView {
    view! {
        <p class=class>
            <RichText runs=runs />
        </p>
    }
}

/// Icon, heading and body in a card.
#[component]
pub fn FeatureCardView(card: FeatureCard, #[prop(default = "badge-accent")] tint: &'static str) -> impl IntoView {
    view! {
        <article class="card feature-card">
            <IconBadge path=card.icon tint=tint />
            <h3 class="card-heading">{card.title}</h3>
            <Paragraph runs=card.body class="card-body" />
        </article>
    }
}
