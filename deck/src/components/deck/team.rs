use leptos::prelude::*;

use super::super::{Paragraph, Section, SectionTitle};
use crate::content::TEAM_STORY;

#[component]
pub fn TeamSection() -> impl IntoView {
    view! {
        <Section id="team" class="section-dark">
            <SectionTitle title="The Team: Built by the Experts" />
            <div class="card card-glass narrow">
                <Paragraph runs=TEAM_STORY class="body-text" />
            </div>
        </Section>
    }
}
