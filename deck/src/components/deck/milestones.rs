use leptos::prelude::*;

use super::super::{Paragraph, Section, SectionTitle};
use crate::content::MILESTONES;

/// Three-phase roadmap; the phase in progress gets the accent border.
#[component]
pub fn MilestonesSection() -> impl IntoView {
    view! {
        <Section id="milestones" class="section-dark">
            <SectionTitle title="Milestones & Roadmap" />
            <ol class="timeline">
                {MILESTONES
                    .iter()
                    .map(|m| {
                        let class = if m.current { "timeline-item current" } else { "timeline-item" };
                        view! {
                            <li class=class>
                                <p class="timeline-phase">{m.phase}</p>
                                <h3 class="card-heading">{m.title}</h3>
                                <p class="body-text">{m.summary}</p>
                                <Paragraph runs=m.success class="timeline-success" />
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </Section>
    }
}
