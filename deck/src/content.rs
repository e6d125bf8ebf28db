//! Page copy and figures.
//!
//! Everything the two pages say lives here as typed constants; components
//! only decide layout.

use crate::types::{
    Competitor, ComparisonRow, DetectionStudy, FeatureCard, FundAllocation, MarketTier,
    Milestone, NavLink, Rating, RevenueProjection, Run, SummaryCard, Tone,
};

// ============================================================================
// Brand
// ============================================================================

pub const BRAND: &str = "RewardHack";
pub const BRAND_ACCENT: &str = "AI";
pub const CONTACT_EMAIL: &str = "invest@rewardhack.ai";
pub const LLAMARL_PAPER_URL: &str = "https://arxiv.org/abs/2405.20325";

// ============================================================================
// Heroicons (outline, 24×24), stroke paths
// ============================================================================

pub const ICON_FIRE: &str = "M17.657 18.657A8 8 0 016.343 7.343S7 9 9 10c0-2 .5-5 2.986-7.014A8.003 8.003 0 0117.657 18.657z M9.879 16.121A3 3 0 1014.12 11.88l-4.242 4.242z";
pub const ICON_CUBE: &str = "M14 10l-2 1m0 0l-2-1m2 1v2.5M20 7l-2 1m2-1l-2-1m2 1v2.5M12 21v-2.5m0 0l-2-1m2 1l2-1M4 7l2 1M4 7l2-1M4 7v2.5m16 4l-2-1m2 1l-2 1m-2-1V12m-2 6.5V12m0 0l-2-1m2 1l2-1";
pub const ICON_GLOBE: &str = "M21 12a9 9 0 01-9 9m9-9a9 9 0 00-9-9m9 9H3m9 9a9 9 0 01-9-9m9 9V3m-9 9h18";
pub const ICON_LOCK: &str = "M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z";
pub const ICON_CLOCK: &str = "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z";
pub const ICON_WARNING: &str = "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z";
pub const ICON_BEAKER: &str = "M9.75 3.104v5.714a2.25 2.25 0 01-.659 1.591L5 14.5M9.75 3.104c.621.202 1.25.405 1.887.622a21.74 21.74 0 017.243 4.095M9.75 3.104a21.74 21.74 0 00-7.243 4.095m14.486 0L14.25 14.5m5.086-6.282a21.72 21.72 0 01-7.243 4.095m7.243-4.095c.621.202 1.25.405 1.887.622m-1.887-.622a21.74 21.74 0 00-1.887-.622m0 0L14.25 14.5M3 14.5h18M3 14.5a2.25 2.25 0 00-2.25 2.25v1.5a2.25 2.25 0 002.25 2.25h18a2.25 2.25 0 002.25-2.25v-1.5a2.25 2.25 0 00-2.25-2.25H3z";
pub const ICON_SLIDERS: &str = "M10.5 6h9.75M10.5 6a1.5 1.5 0 11-3 0m3 0a1.5 1.5 0 10-3 0M3.75 6H7.5m3 12h9.75m-9.75 0a1.5 1.5 0 01-3 0m3 0a1.5 1.5 0 00-3 0m-3.75 0H7.5m9-6h3.75m-3.75 0a1.5 1.5 0 01-3 0m3 0a1.5 1.5 0 00-3 0m-9.75 0h9.75";
pub const ICON_CLIPBOARD_CHECK: &str = "M10.125 2.25h-4.5c-.621 0-1.125.504-1.125 1.125v17.25c0 .621.504 1.125 1.125 1.125h12.75c.621 0 1.125-.504 1.125-1.125v-9M10.125 2.25h.375a9 9 0 019 9v.375M10.125 2.25A3.375 3.375 0 0113.5 5.625v1.5c0 .621.504 1.125 1.125 1.125h1.5a3.375 3.375 0 013.375 3.375M9 15l2.25 2.25L15 12";
pub const ICON_BOLT: &str = "M13 10V3L4 14h7v7l9-11h-7z";
pub const ICON_SEARCH: &str = "M15.75 15.75l-2.489-2.489m0 0a3.375 3.375 0 10-4.773-4.773 3.375 3.375 0 004.774 4.774zM21 12a9 9 0 11-18 0 9 9 0 0118 0z";
pub const ICON_SHIELD: &str = "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z";
pub const ICON_ARROW_LEFT: &str = "M10 19l-7-7m0 0l7-7m-7 7h18";

// ============================================================================
// Page A: pitch deck
// ============================================================================

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#context", label: "Context" },
    NavLink { href: "#problem", label: "Problem" },
    NavLink { href: "#solution", label: "Solution" },
    NavLink { href: "#advantage", label: "Advantage" },
    NavLink { href: "#team", label: "The Team" },
    NavLink { href: "#success-stories", label: "Success Stories" },
    NavLink { href: "#milestones", label: "Milestones" },
    NavLink { href: "#financials", label: "Financials" },
];

pub const HERO_TITLE: &str = "Unlocking Enterprise AI with ";
pub const HERO_TITLE_ACCENT: &str = "High-Performance Reinforcement Learning";
pub const HERO_TAGLINE: &str = "The future of your industry is autonomous. We provide the high-speed RL engine to build, train, and deploy your custom agents that tailored to your domain-specific needs, with the top-notch enterprise-grade security, data safety, and on-premise support.";

pub const CONTEXT_PARAGRAPHS: &[&[Run]] = &[
    &[
        Run::Text("The race to deploy meaningful AI is on. "),
        Run::Strong("83% of companies", Tone::Bright),
        Run::Text(" now state that AI is a top priority. While LLMs have captured the public imagination, the true frontier of enterprise value lies in "),
        Run::Strong("Reinforcement Learning (RL)", Tone::Bright),
        Run::Text("."),
    ],
    &[Run::Text(
        "RL has evolved beyond simple model alignment (RLHF). Today, it's the key to unlocking new capabilities, like advanced reasoning and agentic behavior, in a world of increasingly scarce, high-quality training data. The recent trend and focus is on the power of intelligent, self-learning agents that can move beyond simple prediction to complex, goal-oriented action.",
    )],
    &[Run::Text(
        "This isn't a future trend; it's happening now. Industry leaders in robotics, finance, and manufacturing are already leveraging RL to gain a competitive edge. The demand for powerful, scalable, and secure RL solutions is about to explode.",
    )],
];

/// Icon + caption rows of the "Shift to Agentic AI" card.
pub const AGENTIC_SHIFT: &[(&str, &str)] = &[
    (ICON_FIRE, "Advanced Reasoning & Coding"),
    (ICON_CUBE, "Multi-Turn, Multi-Agent Interaction"),
    (ICON_GLOBE, "Deep Domain Specialization"),
];

pub const PROBLEM_CARDS: &[FeatureCard] = &[
    FeatureCard {
        icon: ICON_LOCK,
        title: "Open Source Isn't Enterprise-Ready",
        body: &[Run::Text(
            "Lacks enterprise-grade data protection, privacy, observability, and on-premise support. Inflexible for custom, domain-specific environments.",
        )],
    },
    FeatureCard {
        icon: ICON_CLOCK,
        title: "Paid Solutions are Legacy Tech",
        body: &[Run::Text(
            "Incumbents are inefficient, with low training speeds and poor support for large models, advanced parallelism, and multi-agent scaling.",
        )],
    },
    FeatureCard {
        icon: ICON_WARNING,
        title: "The Crippling Bottleneck: Training Speed",
        body: &[
            Run::Text("Training long-generation models can take "),
            Run::Strong(
                "27-216 days per iteration (40 to 160 min per step) in the RL/RLHF stage",
                Tone::Negative,
            ),
            Run::Text(" with existing tools. This is simply unacceptable."),
        ],
    },
];

pub const SOLUTION_CARDS: &[FeatureCard] = &[
    FeatureCard {
        icon: ICON_BEAKER,
        title: "Tailored Environment & 100+ Training Gyms",
        body: &[Run::Text(
            "Build custom environments integrating with your domain-specific tools. You own your proprietary simulations, tailoring every element to your unique needs and locking in strategic differentiation.",
        )],
    },
    FeatureCard {
        icon: ICON_SLIDERS,
        title: "Custom RL Pipeline",
        body: &[Run::Text(
            "We support complex multi-step, multi-reward RL pipelines tailored to your domain, enabling agents to learn sophisticated, long-horizon tasks.",
        )],
    },
    FeatureCard {
        icon: ICON_CLIPBOARD_CHECK,
        title: "Specialized Evaluation Service",
        body: &[Run::Text(
            "Measure your agents against proprietary and open-source benchmarks using our specialized evaluation environments to validate performance and ROI.",
        )],
    },
    FeatureCard {
        icon: ICON_BOLT,
        title: "Radical Efficiency",
        body: &[
            Run::Text("Our async framework is "),
            Run::Strong("4x faster", Tone::Positive),
            Run::Text(" for Llama 70B and "),
            Run::Strong("6x faster", Tone::Positive),
            Run::Text(" for 405B models than open-source baselines, slashing training times from months to days."),
        ],
    },
    FeatureCard {
        icon: ICON_SEARCH,
        title: "Advanced Context Engineering",
        body: &[Run::Text(
            "Our SDK learns from your existing data, dynamically assembling relevant context to ensure your agent makes the most informed decision at every step.",
        )],
    },
    FeatureCard {
        icon: ICON_SHIELD,
        title: "Enterprise-Grade Security",
        body: &[Run::Text(
            "Ironclad security, data encryption, privacy compliance, and granular governance are built-in, not bolted on.",
        )],
    },
];

pub const TRADITIONAL_RL_PAINS: &[&str] = &[
    "Complex Infra",
    "Reward Tuning",
    "Simulation Setups",
    "Costly Iteration Cycles",
];

pub const RLAAS_GAINS: &[&str] = &[
    "Pay-as-you-go",
    "Ready-to-train Agents",
    "Deployment-ready APIs",
    "Faster Experimentation",
];

/// Comparison columns; the last one is us.
pub const COMPETITORS: &[Competitor] = &[
    Competitor { name: "VeRL", kind: "Open Source" },
    Competitor { name: "TRL", kind: "Open Source" },
    Competitor { name: "OpenRLHF", kind: "Open Source" },
    Competitor { name: "Ray/Anyscale", kind: "Paid" },
    Competitor { name: "RewardHack AI", kind: "" },
];

pub const COMPARISON_ROWS: &[ComparisonRow] = {
    use Rating::*;
    &[
        ComparisonRow {
            feature: "Training Speed (Larger Models)",
            ratings: &[Medium, Low, Low, Low, High],
        },
        ComparisonRow {
            feature: "Training Speed (Longer Generation)",
            ratings: &[Low, Low, Low, Low, High],
        },
        ComparisonRow {
            feature: "Domain-specific Custom Environment",
            ratings: &[Hard, No, No, No, Yes],
        },
        ComparisonRow {
            feature: "Async Training Support",
            ratings: &[Wip, No, Yes, No, Yes],
        },
        ComparisonRow {
            feature: "Multi-agent Policy Scaling",
            ratings: &[Yes, No, No, No, Yes],
        },
        ComparisonRow {
            feature: "Data Safety & Privacy Compliance",
            ratings: &[No, No, No, Yes, Yes],
        },
        ComparisonRow {
            feature: "Enterprise Security & On-Prem",
            ratings: &[No, No, No, Yes, Yes],
        },
    ]
};

pub const TEAM_STORY: &[Run] = &[
    Run::Text("We are the first and last authors of the groundbreaking "),
    Run::Link {
        text: "Async LlamaRL framework",
        href: LLAMARL_PAPER_URL,
    },
    Run::Text(", a novel approach that achieved "),
    Run::Strong("20x-40x training speed improvements", Tone::Positive),
    Run::Text(" for Llama 3 and 4. This deep, firsthand experience in building and optimizing large-scale RL systems from the ground up is our core competitive advantage. We don't just use the tools; we build them."),
];

pub const SUCCESS_STORY: &[Run] = &[
    Run::Text("The real-world impact of the RL-for-LLM ecosystem is exemplified by a case from "),
    Run::Strong("Veris AI", Tone::Accent),
    Run::Text(": an agent trained with RL to automate the complex, hours-long process of supplier negotiations. By training on realistic simulations of Slack and email conversations, complete with sensitive data, the agent learns optimal tone, questions to ask, and search strategies, dramatically outperforming prompt chaining or one-shot LLM attempts."),
];

pub const SUCCESS_OUTLOOK: &str = "This is just one of many early success stories emerging in vertical domains such as robotics, finance, industrial control, manufacturing and logistics, automotive, and gaming.";

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        phase: "Phase 1 (~3 Months)",
        title: "Seed Phase",
        summary: "Build the core RewardHack AI platform and benchmark its performance against all major alternatives.",
        success: &[
            Run::Text("Success: Prove competitive advantage in training speed, agent & environment customizability, and "),
            Run::Strong("real delta value-add", Tone::Positive),
            Run::Text(" for business KPIs."),
        ],
        current: true,
    },
    Milestone {
        phase: "Phase 2 (~6-9 Months)",
        title: "Pilot Phase",
        summary: "Acquire 1-2 early adopter customers in key verticals and run Proof of Concept pilot.",
        success: &[Run::Text("Success: Demonstrate clear ROI for our partners.")],
        current: false,
    },
    Milestone {
        phase: "Phase 3 (12+ Months)",
        title: "Scaling Phase",
        summary: "Leverage successful pilots and proven ROI to aggressively scale sales and marketing efforts.",
        success: &[Run::Text("Success: Rapidly expand customer base across all targeted verticals.")],
        current: false,
    },
];

pub const REVENUE_PROJECTIONS: &[RevenueProjection] = &[
    RevenueProjection {
        year: "Year 1",
        phase: "Seed to Pilot",
        customers: "5",
        arr_millions: 30.0,
    },
    RevenueProjection {
        year: "Year 2",
        phase: "Growth",
        customers: "10",
        arr_millions: 60.0,
    },
    RevenueProjection {
        year: "Year 3",
        phase: "Scaling",
        customers: "50 - 100",
        arr_millions: 210.0,
    },
];

/// Top of the revenue chart's axis, in millions.
pub const REVENUE_AXIS_MAX_MILLIONS: f64 = 300.0;
/// Gap between revenue axis labels, in millions.
pub const REVENUE_AXIS_STEP_MILLIONS: f64 = 50.0;
/// Pixel height of the revenue chart's bar track.
pub const REVENUE_TRACK_PX: f64 = 384.0;

pub const PRE_SEED_ASK_USD: u64 = 615_000;

pub const FUND_ALLOCATIONS: &[FundAllocation] = &[
    FundAllocation {
        purpose: "Training & Benchmark Costs",
        amount_usd: 400_000,
    },
    FundAllocation {
        purpose: "Core Engineering Team Salaries",
        amount_usd: 200_000,
    },
    FundAllocation {
        purpose: "Marketing & Business Development",
        amount_usd: 10_000,
    },
    FundAllocation {
        purpose: "Infrastructure & Storage Costs",
        amount_usd: 5_000,
    },
];

// ============================================================================
// Page B: market sizing
// ============================================================================

pub const MARKET_PAGE_TITLE: &str = "Lyso AI: 10x opportunity to prevent chronic diseases";
pub const MARKET_PAGE_INTRO: &str = "Chronic disease creates a multi-trillion dollar liability for the U.S. economy. This is a data-driven look at the specific costs to businesses and the quantifiable opportunity for AI to mitigate this risk through early detection.";

pub const SUMMARY_CARDS: &[SummaryCard] = &[
    SummaryCard {
        icon: "📊",
        title: "Disease Prevalence",
        items: &[
            "6 in 10 Americans have at least one chronic disease",
            "4 in 10 have two or more chronic diseases",
            "Accounts for 81% of all hospital admissions",
            "Accounts for 91% of all prescriptions",
            "Accounts for 76% of all doctor visits",
        ],
    },
    SummaryCard {
        icon: "💰",
        title: "Financial Impact",
        items: &[
            "Private health insurance costs: $1.46 trillion annually",
            "Indirect employer costs (lost productivity): $153 billion",
        ],
    },
    SummaryCard {
        icon: "🤖",
        title: "High AI Feasibility",
        items: &[
            "AI can analyze vast, complex unstructured health data",
            "Predicts type 2 diabetes up to a decade in advance",
            "Predicts lung cancer 1-6 years in advance (80-95% accuracy)",
            "Many other early-stage chronic disease detection examples",
        ],
    },
];

pub const DETECTION_STUDIES: &[DetectionStudy] = &[
    DetectionStudy {
        disease: "Lung Cancer",
        accuracy: "80-95%",
        finding: "Forecasts future risk 1-6 years in advance from a single CT scan, before nodules are human-visible.",
    },
    DetectionStudy {
        disease: "Cardiovascular Events",
        accuracy: "AUC 0.70-0.87",
        finding: "Predicts future heart attack/stroke risk from a non-invasive retinal scan with accuracy comparable to a heart CT.",
    },
    DetectionStudy {
        disease: "Type 1 Diabetes",
        accuracy: "80-92% Sensitivity",
        finding: "Identifies high-risk individuals up to 12 months before clinical diagnosis using EHR data.",
    },
    DetectionStudy {
        disease: "Alzheimer's Disease",
        accuracy: ">78%",
        finding: "Predicts progression from mild cognitive impairment within 6 years using speech pattern analysis.",
    },
    DetectionStudy {
        disease: "Breast Cancer",
        accuracy: "AUC 0.70",
        finding: "Predicts 5-year cancer risk from mammograms more accurately than standard models, especially for diverse populations.",
    },
];

pub const MARKET_TIERS: &[MarketTier] = &[
    MarketTier {
        code: "TAM",
        name: "Total Addressable Market",
        value_billions: 1500.0,
        color: "#66aaff",
        description: "The TAM represents the total annual direct medical costs for major chronic diseases in the U.S., including both direct healthcare costs and indirect productivity losses. This comprehensive figure reflects the full economic impact of chronic diseases on the U.S. healthcare system and economy.",
    },
    MarketTier {
        code: "SAM",
        name: "Serviceable Addressable Market",
        value_billions: 731.0,
        color: "#0077ff",
        description: "The SAM is the segment of the TAM that can be realistically targeted by current and near-future AI technologies. This figure includes diseases where AI models have demonstrated high, validated accuracy for early detection (>78%), covering the most impactful chronic conditions that drive healthcare costs.",
    },
    MarketTier {
        code: "SOM",
        name: "Serviceable Obtainable Market",
        value_billions: 7.3,
        color: "#0044cc",
        description: "The SOM is the portion of the SAM that can realistically be captured as revenue by all competing AI companies in the near-to-medium term. This represents the immediate market opportunity for AI-powered preventative healthcare solutions, calculated based on current adoption rates and value capture potential.",
    },
];

pub const VALUE_PROPOSITION: &str = "By identifying high-risk individuals years earlier, preventative AI enables targeted, low-cost interventions that can prevent or delay the onset of high-cost chronic diseases, representing a multi-billion dollar opportunity to reduce claims and improve workforce health.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartConfig;

    #[test]
    fn funds_add_up_to_the_ask() {
        let total: u64 = FUND_ALLOCATIONS.iter().map(|f| f.amount_usd).sum();
        assert_eq!(total, PRE_SEED_ASK_USD);
    }

    #[test]
    fn comparison_rows_rate_every_competitor() {
        for row in COMPARISON_ROWS {
            assert_eq!(row.ratings.len(), COMPETITORS.len(), "{}", row.feature);
            // our column always wins
            assert!(matches!(
                row.ratings.last(),
                Some(Rating::Yes | Rating::High)
            ));
        }
    }

    #[test]
    fn market_tiers_match_market_chart() {
        let chart = ChartConfig::market_size();
        let tiers: Vec<f64> = MARKET_TIERS.iter().map(|t| t.value_billions).collect();
        assert_eq!(tiers, chart.values);
        let colors: Vec<&str> = MARKET_TIERS.iter().map(|t| t.color).collect();
        assert_eq!(colors, chart.fill_colors);
    }

    #[test]
    fn revenue_fits_axis() {
        for p in REVENUE_PROJECTIONS {
            assert!(p.arr_millions <= REVENUE_AXIS_MAX_MILLIONS);
        }
    }

    #[test]
    fn exactly_one_current_milestone() {
        assert_eq!(MILESTONES.iter().filter(|m| m.current).count(), 1);
    }
}
