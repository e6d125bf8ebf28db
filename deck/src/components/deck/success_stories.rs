use leptos::prelude::*;

use super::super::{Paragraph, Section, SectionTitle};
use crate::content::{SUCCESS_OUTLOOK, SUCCESS_STORY};

#[component]
pub fn SuccessStoriesSection() -> impl IntoView {
    view! {
        <Section id="success-stories">
            <SectionTitle title="RL Success Stories" />
            <div class="card narrow">
                <Paragraph runs=SUCCESS_STORY class="body-text" />
                <p class="body-text muted">{SUCCESS_OUTLOOK}</p>
            </div>
        </Section>
    }
}
