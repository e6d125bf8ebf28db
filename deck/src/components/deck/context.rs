use leptos::prelude::*;

use super::super::{Icon, Paragraph, Section};
use crate::content::{AGENTIC_SHIFT, CONTEXT_PARAGRAPHS};

/// "The New Frontier": market context and the shift to agentic AI.
#[component]
pub fn ContextSection() -> impl IntoView {
    view! {
        <Section id="context" class="section-dark">
            <div class="split">
                <div>
                    <h2 class="section-title align-left">"The New Frontier: Reinforcement Learning"</h2>
                    {CONTEXT_PARAGRAPHS
                        .iter()
                        .map(|runs| view! { <Paragraph runs=*runs class="body-text" /> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="card card-glass">
                    <h3 class="card-heading center">"Shift to Agentic AI"</h3>
                    <ul class="shift-list">
                        {AGENTIC_SHIFT
                            .iter()
                            .map(|(icon, caption)| view! {
                                <li>
                                    <Icon path=*icon size="32" class="tone-accent" />
                                    <span>{*caption}</span>
                                </li>
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </Section>
    }
}
