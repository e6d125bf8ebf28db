use leptos::prelude::*;

use super::super::{FeatureCardView, Section, SectionTitle};
use crate::content::PROBLEM_CARDS;

/// Why existing RL tooling falls short.
#[component]
pub fn ProblemSection() -> impl IntoView {
    view! {
        <Section id="problem">
            <SectionTitle
                title="The Problem: The Enterprise RL Gap"
                lead="Enterprises are ready to invest in RL, but the tools are failing them."
            />
            <div class="grid grid-3">
                {PROBLEM_CARDS
                    .iter()
                    .map(|card| view! { <FeatureCardView card=*card tint="badge-negative" /> })
                    .collect::<Vec<_>>()}
            </div>
        </Section>
    }
}
