use leptos::prelude::*;

use super::super::{Section, SectionTitle};
use crate::content::{COMPARISON_ROWS, COMPETITORS};

/// Competitor comparison table. Our column is the last one and is highlighted.
#[component]
pub fn AdvantageSection() -> impl IntoView {
    let ours = COMPETITORS.len().saturating_sub(1);

    view! {
        <Section id="advantage">
            <SectionTitle
                title="Our Competitive Advantage"
                lead="We are building the platform we always wanted. Here's how we stack up."
            />
            <div class="table-wrap">
                <table class="comparison">
                    <thead>
                        <tr>
                            <th class="feature-col">"Feature"</th>
                            {COMPETITORS
                                .iter()
                                .enumerate()
                                .map(|(idx, c)| {
                                    let class = if idx == ours { "ours" } else { "" };
                                    view! {
                                        <th class=class>
                                            {c.name}
                                            {(!c.kind.is_empty()).then(|| view! {
                                                <span class="col-kind">{format!("({})", c.kind)}</span>
                                            })}
                                        </th>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tr>
                    </thead>
                    <tbody>
                        {COMPARISON_ROWS
                            .iter()
                            .map(|row| view! {
                                <tr>
                                    <td class="feature-col">{row.feature}</td>
                                    {row.ratings
                                        .iter()
                                        .enumerate()
                                        .map(|(idx, rating)| {
                                            let class = if idx == ours {
                                                format!("ours {}", rating.tone().class())
                                            } else {
                                                rating.tone().class().to_string()
                                            };
                                            view! { <td class=class>{rating.label()}</td> }
                                        })
                                        .collect::<Vec<_>>()}
                                </tr>
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </Section>
    }
}
