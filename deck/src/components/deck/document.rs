//! Page A: the pitch deck document.

use leptos::prelude::*;

use super::{
    AdvantageSection, AskSection, ContextSection, FinancialsSection, Header, MilestonesSection,
    Navbar, ProblemSection, SolutionSection, SuccessStoriesSection, TeamSection,
};
use crate::styles::{BASE_CSS, CSP, DECK_CSS};

/// The complete pitch deck page.
#[component]
pub fn DeckDocument(title: String) -> impl IntoView {
    let css = format!("{BASE_CSS}{DECK_CSS}");

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{css}</style>
            </head>
            <body class="deck">
                <Navbar />
                <Header />
                <main>
                    <ContextSection />
                    <ProblemSection />
                    <SolutionSection />
                    <AdvantageSection />
                    <TeamSection />
                    <SuccessStoriesSection />
                    <MilestonesSection />
                    <FinancialsSection />
                    <AskSection />
                </main>
            </body>
        </html>
    }
}
