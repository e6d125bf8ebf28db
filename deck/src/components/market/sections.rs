//! Narrative sections of the market-sizing page.

use leptos::prelude::*;

use super::ChartWidget;
use crate::charts::ChartConfig;
use crate::content::{
    DETECTION_STUDIES, MARKET_PAGE_INTRO, MARKET_PAGE_TITLE, MARKET_TIERS, SUMMARY_CARDS,
    VALUE_PROPOSITION,
};

#[component]
pub fn IntroSection() -> impl IntoView {
    view! {
        <section id="intro" class="intro">
            <h1 class="intro-title">{MARKET_PAGE_TITLE}</h1>
            <p class="intro-lead">{MARKET_PAGE_INTRO}</p>
        </section>
    }
}

/// TL;DR cards plus the market size card derived from the tiers.
#[component]
pub fn SummarySection(market_chart: ChartConfig) -> impl IntoView {
    let formatter = market_chart.formatter;

    view! {
        <section id="summary" class="panel panel-tint">
            <h2 class="panel-title">"TL;DR Summary"</h2>
            <div class="summary-grid">
                {SUMMARY_CARDS
                    .iter()
                    .map(|card| view! {
                        <div class="summary-card">
                            <h3>{format!("{} {}", card.icon, card.title)}</h3>
                            <ul>
                                {card.items.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    })
                    .collect::<Vec<_>>()}
                <div class="summary-card">
                    <h3>"📈 Estimated Market Size"</h3>
                    <dl class="tier-list">
                        {MARKET_TIERS
                            .iter()
                            .map(|tier| view! {
                                <div class="tier-row">
                                    <dt>{format!("{}:", tier.title())}</dt>
                                    <dd>{tier.size_long(formatter)}</dd>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </dl>
                </div>
            </div>
        </section>
    }
}

/// Cost burden with the business cost chart.
#[component]
pub fn BurdenSection(chart: ChartConfig) -> impl IntoView {
    view! {
        <section id="problem" class="panel">
            <div class="panel-header">
                <h2 class="panel-title">"The Chronic Disease Burden on Business"</h2>
                <p>
                    "For private insurers and employers, chronic conditions are the single largest driver of cost. "
                    "Six in 10 Americans have at least one chronic disease, accounting for 81% of hospital admissions and 91% of all prescriptions."
                </p>
            </div>
            <h3 class="chart-title">"Annual Costs to U.S. Businesses"</h3>
            <p class="chart-lead">
                "The financial impact is twofold: direct costs paid by private health insurance and indirect costs to employers from lost productivity."
            </p>
            <ChartWidget config=chart />
        </section>
    }
}

#[component]
pub fn FeasibilitySection() -> impl IntoView {
    view! {
        <section id="solution" class="plain">
            <div class="panel-header">
                <h2 class="panel-title">"AI's Proven Feasibility in Early Detection"</h2>
                <p>
                    "AI can analyze complex health data to forecast disease risk years before symptoms emerge, "
                    "creating a new window for cost-saving preventative action."
                </p>
            </div>
            <div class="panel narrow table-wrap">
                <table class="studies">
                    <thead>
                        <tr>
                            <th>"Disease"</th>
                            <th>"AI Accuracy"</th>
                            <th>"Value Creation (Key Finding)"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {DETECTION_STUDIES
                            .iter()
                            .map(|s| view! {
                                <tr>
                                    <td class="study-disease">{s.disease}</td>
                                    <td class="study-accuracy">{s.accuracy}</td>
                                    <td>{s.finding}</td>
                                </tr>
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

/// Market size chart and the methodology link.
#[component]
pub fn OpportunitySection(chart: ChartConfig) -> impl IntoView {
    view! {
        <section id="opportunity" class="panel">
            <div class="panel-header">
                <h2 class="panel-title">"The Preventative AI Market Size"</h2>
                <p>
                    "The potential for AI to reduce healthcare costs creates a multi-billion dollar market for these preventative technologies."
                </p>
            </div>
            <ChartWidget config=chart />
            <p class="center">
                <a class="inline-link" href="#methodology">"See Our Sizing Methodology"</a>
            </p>
        </section>
    }
}

#[component]
pub fn ConclusionSection() -> impl IntoView {
    view! {
        <section id="conclusion" class="panel panel-gradient">
            <h2 class="panel-title">"The Value Proposition"</h2>
            <p class="intro-lead">{VALUE_PROPOSITION}</p>
        </section>
    }
}

/// TAM / SAM / SOM definitions; headings reuse the chart's value formatter.
#[component]
pub fn MethodologySection(market_chart: ChartConfig) -> impl IntoView {
    let formatter = market_chart.formatter;

    view! {
        <section id="methodology" class="panel">
            <div class="panel-header">
                <h2 class="panel-title">"Market Sizing Methodology"</h2>
                <p>
                    "The market size estimates are derived from a systematic analysis of healthcare spending data and AI feasibility."
                </p>
            </div>
            <div class="methodology">
                {MARKET_TIERS
                    .iter()
                    .map(|tier| {
                        let style = format!("color:{}", tier.color);
                        view! {
                            <div class="tier">
                                <h3 style=style>{format!("{}: {}", tier.title(), tier.size_long(formatter))}</h3>
                                <p>{tier.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
