//! Page B: the market-sizing document.

use leptos::prelude::*;

use super::{
    BurdenSection, ConclusionSection, FeasibilitySection, IntroSection, MarketHeader,
    MethodologySection, OpportunitySection, SummarySection,
};
use crate::charts::market_page_charts;
use crate::styles::{BASE_CSS, CSP, MARKET_CSS};
use crate::types::HomeLink;

/// ES module that loads the chart runtime; its start hook mounts the charts.
///
/// `src` becomes a JSON string literal with every `<` escaped, so no URL can
/// end the surrounding `<script>` element.
pub fn runtime_bootstrap(src: &str) -> String {
    let literal = serde_json::to_string(src)
        .unwrap_or_else(|_| String::from("\"\""))
        .replace('<', "\\u003c");
    format!("import init from {literal};\ninit();\n")
}

/// The complete market page. `runtime_js` is the URL of the chart runtime
/// loader (`wasm-bindgen --target web` output); without it the page shows
/// the static overlay only.
#[component]
pub fn MarketDocument(
    title: String,
    home: HomeLink,
    #[prop(default = None)] runtime_js: Option<String>,
) -> impl IntoView {
    let [cost_chart, market_chart] = market_page_charts();
    let css = format!("{BASE_CSS}{MARKET_CSS}");

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <style>{css}</style>
            </head>
            <body class="market">
                <MarketHeader home=home />
                <main class="container">
                    <IntroSection />
                    <SummarySection market_chart=market_chart.clone() />
                    <BurdenSection chart=cost_chart />
                    <FeasibilitySection />
                    <OpportunitySection chart=market_chart.clone() />
                    <ConclusionSection />
                    <MethodologySection market_chart=market_chart />
                </main>
                {runtime_js.map(|src| view! { <script type="module">{runtime_bootstrap(&src)}</script> })}
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bootstrap_imports_runtime() {
        assert_eq!(
            runtime_bootstrap("/pkg/pitch_deck_wasm.js"),
            "import init from \"/pkg/pitch_deck_wasm.js\";\ninit();\n"
        );
    }

    #[test]
    fn bootstrap_escapes_hostile_url() {
        let js = runtime_bootstrap("x.js\"</script><script>alert(1)//");
        assert!(!js.contains("</script>"));
        assert!(!js.contains('<'));
        assert!(js.starts_with("import init from \"x.js\\\"\\u003c/script>"));
    }
}
