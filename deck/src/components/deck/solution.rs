use leptos::prelude::*;

use super::super::{FeatureCardView, Section, SectionTitle};
use crate::content::{RLAAS_GAINS, SOLUTION_CARDS, TRADITIONAL_RL_PAINS};

/// Product capabilities and the RL-as-a-Service comparison.
#[component]
pub fn SolutionSection() -> impl IntoView {
    view! {
        <Section id="solution" class="section-dark">
            <SectionTitle
                title="Our Solution: RewardHack AI"
                lead="A high-performance, enterprise-ready RL Platform-as-a-Service (RLaaS) designed for speed, customization, and security."
            />
            <div class="grid grid-3">
                {SOLUTION_CARDS
                    .iter()
                    .map(|card| view! { <FeatureCardView card=*card /> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="versus">
                <VersusColumn title="Traditional RL" items=TRADITIONAL_RL_PAINS positive=false />
                <div class="versus-arrow" aria-hidden="true">"→"</div>
                <VersusColumn title="RL-as-a-Service" items=RLAAS_GAINS positive=true />
            </div>
        </Section>
    }
}

#[component]
fn VersusColumn(title: &'static str, items: &'static [&'static str], positive: bool) -> impl IntoView {
    let (class, mark) = if positive {
        ("card versus-card versus-good", "✓")
    } else {
        ("card versus-card versus-bad", "✗")
    };
    view! {
        <div class=class>
            <h3 class="card-heading">{title}</h3>
            <ul>
                {items
                    .iter()
                    .map(|item| view! {
                        <li>
                            <span class="versus-mark">{mark}</span>
                            {*item}
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
