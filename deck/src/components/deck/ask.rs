use leptos::prelude::*;

use super::super::Section;
use crate::charts::format_usd;
use crate::content::{CONTACT_EMAIL, FUND_ALLOCATIONS, PRE_SEED_ASK_USD};

/// Pre-seed ask, use of funds and contact.
#[component]
pub fn AskSection() -> impl IntoView {
    let mailto = format!("mailto:{CONTACT_EMAIL}");

    view! {
        <Section id="ask" class="section-ask">
            <div class="ask">
                <h2 class="section-title">"The Ask"</h2>
                <p class="section-lead">"We are raising a pre-seed round of"</p>
                <p class="ask-amount">{format_usd(PRE_SEED_ASK_USD)}</p>
                <div class="card card-glass narrow">
                    <h3 class="card-heading">"Use of Funds"</h3>
                    <ul class="funds">
                        {FUND_ALLOCATIONS
                            .iter()
                            .map(|f| view! {
                                <li>
                                    <span>{f.purpose}</span>
                                    <span class="funds-amount">{format_usd(f.amount_usd)}</span>
                                </li>
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <a class="button" href=mailto>"Contact Us"</a>
            </div>
        </Section>
    }
}
