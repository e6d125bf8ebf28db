//! CSS for both pages.
//!
//! Styles are inlined into each document so the site is a pair of
//! self-contained HTML files. [`BASE_CSS`] is shared; [`DECK_CSS`] and
//! [`MARKET_CSS`] carry the page themes (dark deck, light market page).
//!
//! Stylesheets are emitted as text nodes, so they avoid characters that
//! HTML-escape (child combinators, ampersands).

/// Reset, typography, layout primitives and the card/table look.
pub const BASE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: 'Inter', system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    -webkit-font-smoothing: antialiased;
}

h1, h2, h3, p, ul, ol, dl, figure {
    margin: 0;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 24px;
}

.center { text-align: center; }
.narrow { max-width: 56rem; margin-left: auto; margin-right: auto; }

.section {
    padding: 96px 0;
    scroll-margin-top: 64px;
}

.section-header {
    text-align: center;
    margin-bottom: 56px;
}

.section-title {
    font-size: clamp(1.9rem, 4vw, 2.6rem);
    font-weight: 800;
    letter-spacing: -0.02em;
}

.section-title.align-left { text-align: left; margin-bottom: 24px; }

.section-lead {
    margin-top: 12px;
    max-width: 48rem;
    margin-left: auto;
    margin-right: auto;
    font-size: 1.125rem;
}

.grid { display: grid; gap: 32px; }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }

.split {
    display: grid;
    gap: 48px;
    align-items: center;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
}

.card {
    border-radius: 16px;
    padding: 32px;
}

.card-heading {
    font-size: 1.25rem;
    font-weight: 700;
    margin-bottom: 8px;
}

.body-text { margin-bottom: 16px; }

.icon-badge {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 56px;
    height: 56px;
    border-radius: 999px;
    margin-bottom: 16px;
}

.table-wrap { overflow-x: auto; }

table {
    width: 100%;
    border-collapse: collapse;
    text-align: left;
}

th, td { padding: 14px 16px; }

th { font-size: 0.875rem; font-weight: 600; }

.inline-link {
    font-weight: 600;
    text-decoration: underline;
}

.tone-bright { font-weight: 700; }
.tone-positive { color: #22c55e; font-weight: 600; }
.tone-negative { color: #ef4444; font-weight: 600; }
.tone-caution { color: #eab308; font-weight: 600; }
"#;

/// Dark theme of the pitch deck.
pub const DECK_CSS: &str = r#"
body.deck {
    background: #030712;
    color: #d1d5db;
}

.tone-accent { color: #60a5fa; }
.tone-bright { color: #ffffff; }
.muted { color: #9ca3af; }

.section-dark { background: #111827; }
.section-title { color: #ffffff; }
.section-lead { color: #9ca3af; }

.navbar {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(3, 7, 18, 0.8);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid #1f2937;
}

.navbar-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 64px;
}

.brand {
    font-size: 1.5rem;
    font-weight: 800;
    color: #ffffff;
    text-decoration: none;
}

.nav-links {
    display: flex;
    gap: 28px;
    list-style: none;
    padding: 0;
}

.nav-links a {
    color: #d1d5db;
    text-decoration: none;
    transition: color 0.2s;
}

.nav-links a:hover { color: #60a5fa; }

@media (max-width: 900px) {
    .nav-links { display: none; }
}

.hero {
    padding: 128px 0 112px;
    text-align: center;
    background: radial-gradient(circle at top, rgba(37, 99, 235, 0.25), transparent 60%);
}

.hero-title {
    font-size: clamp(2.4rem, 6vw, 4.2rem);
    font-weight: 900;
    line-height: 1.1;
    color: #ffffff;
    letter-spacing: -0.03em;
}

.hero-accent {
    display: block;
    background: linear-gradient(90deg, #60a5fa, #a78bfa);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-tagline {
    margin: 28px auto 0;
    max-width: 52rem;
    font-size: 1.2rem;
    color: #9ca3af;
}

.card { background: #1f2937; border: 1px solid #374151; }
.card-glass { background: rgba(31, 41, 55, 0.6); backdrop-filter: blur(6px); }
.card-heading { color: #ffffff; }
.card-heading.center { text-align: center; margin-bottom: 24px; }
.card-body { color: #9ca3af; }

.feature-card { transition: transform 0.2s, border-color 0.2s; }
.feature-card:hover { transform: translateY(-4px); border-color: #3b82f6; }

.badge-accent { background: rgba(59, 130, 246, 0.15); color: #60a5fa; }
.badge-negative { background: rgba(239, 68, 68, 0.15); color: #f87171; }

.shift-list {
    list-style: none;
    padding: 0;
    display: grid;
    gap: 20px;
}

.shift-list li {
    display: flex;
    align-items: center;
    gap: 16px;
    font-size: 1.1rem;
    color: #e5e7eb;
}

.versus {
    margin-top: 64px;
    display: grid;
    gap: 24px;
    align-items: center;
    grid-template-columns: 1fr auto 1fr;
}

.versus ul { list-style: none; padding: 0; display: grid; gap: 10px; }
.versus-arrow { font-size: 2.5rem; color: #60a5fa; }
.versus-mark { display: inline-block; width: 1.5em; font-weight: 700; }
.versus-bad .versus-mark { color: #f87171; }
.versus-good { border-color: #3b82f6; }
.versus-good .versus-mark { color: #22c55e; }

@media (max-width: 720px) {
    .versus { grid-template-columns: 1fr; }
    .versus-arrow { transform: rotate(90deg); justify-self: center; }
}

.comparison { background: #111827; border-radius: 12px; }
.comparison th { color: #9ca3af; border-bottom: 2px solid #374151; text-align: center; }
.comparison td { border-bottom: 1px solid #1f2937; text-align: center; }
.comparison .feature-col { text-align: left; color: #ffffff; font-weight: 600; }
.comparison .ours { background: rgba(37, 99, 235, 0.15); }
.comparison th.ours { color: #60a5fa; }
.col-kind { display: block; font-size: 0.75rem; font-weight: 400; }

.timeline {
    list-style: none;
    padding: 0 0 0 28px;
    border-left: 2px solid #374151;
    display: grid;
    gap: 40px;
    max-width: 48rem;
    margin: 0 auto;
}

.timeline-item { position: relative; }

.timeline-item::before {
    content: '';
    position: absolute;
    left: -37px;
    top: 6px;
    width: 16px;
    height: 16px;
    border-radius: 999px;
    background: #374151;
}

.timeline-item.current::before {
    background: #3b82f6;
    box-shadow: 0 0 0 6px rgba(59, 130, 246, 0.25);
}

.timeline-phase { color: #60a5fa; font-weight: 600; font-size: 0.9rem; }
.timeline-success { color: #9ca3af; font-style: italic; }

.projection { background: #1f2937; border-radius: 12px; }
.projection th { color: #9ca3af; border-bottom: 2px solid #374151; }
.projection td { border-bottom: 1px solid #374151; color: #e5e7eb; }

.revenue-chart {
    display: flex;
    gap: 16px;
    align-items: flex-end;
    padding: 24px;
    background: #1f2937;
    border-radius: 16px;
}

.revenue-axis {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    font-size: 0.75rem;
    color: #6b7280;
    text-align: right;
}

.revenue-bars {
    flex: 1;
    display: flex;
    align-items: flex-end;
    justify-content: space-around;
    border-left: 1px solid #374151;
    border-bottom: 1px solid #374151;
}

.revenue-col {
    display: flex;
    flex-direction: column;
    align-items: center;
    width: 25%;
}

.revenue-bar {
    position: relative;
    width: 100%;
    border-radius: 8px 8px 0 0;
    background: linear-gradient(180deg, #60a5fa, #2563eb);
}

.revenue-value {
    position: absolute;
    top: -24px;
    left: 0;
    right: 0;
    text-align: center;
    font-weight: 700;
    color: #ffffff;
}

.revenue-year { margin-top: 8px; font-size: 0.85rem; color: #9ca3af; }

.section-ask {
    background: linear-gradient(135deg, #1e3a8a, #111827);
    text-align: center;
}

.ask-amount {
    margin: 16px 0 40px;
    font-size: clamp(3rem, 8vw, 5rem);
    font-weight: 900;
    color: #ffffff;
}

.funds { list-style: none; padding: 0; text-align: left; }

.funds li {
    display: flex;
    justify-content: space-between;
    padding: 12px 0;
    border-bottom: 1px solid #374151;
}

.funds-amount { font-weight: 700; color: #ffffff; }

.button {
    display: inline-block;
    margin-top: 40px;
    padding: 14px 36px;
    border-radius: 999px;
    background: #2563eb;
    color: #ffffff;
    font-weight: 700;
    text-decoration: none;
    transition: background 0.2s;
}

.button:hover { background: #1d4ed8; }
.inline-link { color: #60a5fa; }
"#;

/// Light theme of the market page, including the chart widgets.
pub const MARKET_CSS: &str = r#"
body.market {
    background: #f9fafb;
    color: #1e293b;
}

.topbar {
    background: #ffffff;
    border-bottom: 1px solid #e5e7eb;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.topbar-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 64px;
}

.back-link {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    color: #4b5563;
    text-decoration: none;
    transition: color 0.2s;
}

.back-link:hover { color: #111827; }

.status {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    font-size: 0.875rem;
    color: #4b5563;
}

.status-dot {
    width: 8px;
    height: 8px;
    border-radius: 999px;
    background: #22c55e;
}

main.container { padding-top: 16px; padding-bottom: 32px; }

.intro { text-align: center; padding: 48px 0; }

.intro-title {
    font-size: clamp(2.2rem, 6vw, 3.75rem);
    font-weight: 900;
    color: #0044cc;
    letter-spacing: -0.02em;
}

.intro-lead {
    margin: 16px auto 0;
    max-width: 48rem;
    font-size: 1.15rem;
    color: #475569;
}

.panel {
    background: #ffffff;
    border-radius: 16px;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    padding: 40px;
    margin: 32px 0;
    scroll-margin-top: 16px;
}

.plain { margin: 32px 0; }

.panel-tint { background: linear-gradient(135deg, #eff6ff, #eef2ff); }

.panel-gradient {
    background: linear-gradient(135deg, #0044cc, #0077ff);
    color: #ffffff;
    text-align: center;
}

.panel-gradient .intro-lead { color: rgba(255, 255, 255, 0.9); }

.panel-header { text-align: center; margin-bottom: 32px; }
.panel-header p { margin: 12px auto 0; max-width: 48rem; color: #475569; }

.panel-title {
    font-size: clamp(1.7rem, 4vw, 2.25rem);
    font-weight: 800;
    color: #0f172a;
}

.panel-tint .panel-title { color: #0044cc; margin-bottom: 24px; text-align: center; }
.panel-gradient .panel-title { color: #ffffff; }

.summary-grid {
    display: grid;
    gap: 24px;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
}

.summary-card {
    background: #ffffff;
    border-radius: 12px;
    padding: 20px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.summary-card h3 { font-size: 1rem; font-weight: 700; color: #111827; margin-bottom: 8px; }
.summary-card ul { padding-left: 18px; color: #4b5563; font-size: 0.9rem; }

.tier-row {
    display: flex;
    justify-content: space-between;
    gap: 12px;
    font-size: 0.9rem;
    padding: 4px 0;
}

.tier-row dt { color: #4b5563; }
.tier-row dd { margin: 0; font-weight: 700; color: #0044cc; white-space: nowrap; }

.studies thead { border-bottom: 2px solid #e2e8f0; }
.studies th { color: #64748b; }
.studies tbody tr { border-bottom: 1px solid #f1f5f9; }
.studies td { color: #475569; }
.study-disease { font-weight: 700; color: #1e293b; }
.study-accuracy { font-weight: 700; color: #0044cc; }

.chart-title { text-align: center; font-size: 1.25rem; font-weight: 700; margin: 48px 0 8px; }
.chart-lead { text-align: center; color: #475569; margin-bottom: 16px; }

.chart { margin: 0 auto; max-width: 600px; }

.chart-container {
    position: relative;
    width: 100%;
}

.chart-vertical { height: 400px; }
.chart-horizontal { height: 350px; }

.chart-canvas {
    display: block;
    width: 100%;
    height: 100%;
}

.chart-overlay {
    position: absolute;
    inset: 0;
    pointer-events: none;
}

.bar-label {
    position: absolute;
    font-weight: 700;
    white-space: nowrap;
}

.bar-label-inside {
    transform: translate(-50%, -50%);
    color: #ffffff;
    font-size: 1rem;
}

.bar-label-badge {
    transform: translateY(-50%);
    padding: 2px 8px;
    border-radius: 6px;
    background: rgba(255, 255, 255, 0.9);
    color: #1e293b;
    font-size: 0.85rem;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.15);
}

.chart-caption {
    margin-top: 8px;
    text-align: center;
    font-size: 0.875rem;
    color: #6b7280;
}

.methodology { display: grid; gap: 32px; max-width: 56rem; margin: 0 auto; }
.tier h3 { font-size: 1.4rem; font-weight: 700; }
.tier p { margin-top: 8px; color: #475569; line-height: 1.7; }

.inline-link { color: #4f46e5; }
.inline-link:hover { color: #3730a3; }
"#;

/// Content Security Policy for both pages. The market page instantiates the
/// chart runtime's WebAssembly module.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval'; connect-src 'self'; font-src 'self' data:;";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheets_survive_text_escaping() {
        for css in [BASE_CSS, DECK_CSS, MARKET_CSS] {
            assert!(!css.contains('>'));
            assert!(!css.contains('&'));
            assert!(!css.contains('<'));
        }
    }

    #[test]
    fn chart_heights_match_nominal_surface() {
        use crate::charts::Orientation;
        use crate::components::market::nominal_surface;

        assert_eq!(nominal_surface(Orientation::Vertical).1, 400.0);
        assert_eq!(nominal_surface(Orientation::Horizontal).1, 350.0);
        assert!(MARKET_CSS.contains(".chart-vertical { height: 400px; }"));
        assert!(MARKET_CSS.contains(".chart-horizontal { height: 350px; }"));
    }
}
