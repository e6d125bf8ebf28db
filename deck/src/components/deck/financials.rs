use leptos::prelude::*;

use super::super::{Section, SectionTitle};
use crate::charts::format_millions;
use crate::content::{
    REVENUE_AXIS_MAX_MILLIONS, REVENUE_AXIS_STEP_MILLIONS, REVENUE_PROJECTIONS, REVENUE_TRACK_PX,
};

/// Bar height in pixels for an ARR value on the revenue chart.
pub fn revenue_bar_height_px(arr_millions: f64) -> u32 {
    let share = (arr_millions / REVENUE_AXIS_MAX_MILLIONS).clamp(0.0, 1.0);
    (share * REVENUE_TRACK_PX).round() as u32
}

/// Axis labels from the top of the chart down to zero.
fn axis_labels() -> Vec<String> {
    let steps = (REVENUE_AXIS_MAX_MILLIONS / REVENUE_AXIS_STEP_MILLIONS).round() as u32;
    (0..=steps)
        .rev()
        .map(|i| format_millions(f64::from(i) * REVENUE_AXIS_STEP_MILLIONS))
        .collect()
}

/// Revenue projection table and bar chart.
#[component]
pub fn FinancialsSection() -> impl IntoView {
    let track = format!("height:{REVENUE_TRACK_PX}px");

    view! {
        <Section id="financials">
            <SectionTitle
                title="Financial Projections"
                lead="Target customers and average annual recurring revenue (ARR) over the first three years."
            />
            <div class="split">
                <div class="table-wrap">
                    <table class="projection">
                        <thead>
                            <tr>
                                <th>"Year"</th>
                                <th>"Phase"</th>
                                <th>"Target Customers"</th>
                                <th>"Avg. ARR"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {REVENUE_PROJECTIONS
                                .iter()
                                .map(|p| view! {
                                    <tr>
                                        <td>{p.year}</td>
                                        <td>{p.phase}</td>
                                        <td>{p.customers}</td>
                                        <td class="tone-positive">{format_millions(p.arr_millions)}</td>
                                    </tr>
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </div>
                <div class="revenue-chart" role="img" aria-label="Projected ARR by year">
                    <div class="revenue-axis" style=track.clone()>
                        {axis_labels()
                            .into_iter()
                            .map(|label| view! { <span>{label}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="revenue-bars" style=track>
                        {REVENUE_PROJECTIONS
                            .iter()
                            .map(|p| {
                                let style = format!("height:{}px", revenue_bar_height_px(p.arr_millions));
                                view! {
                                    <div class="revenue-col">
                                        <div class="revenue-bar" style=style>
                                            <span class="revenue-value">{format_millions(p.arr_millions)}</span>
                                        </div>
                                        <span class="revenue-year">{p.year}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_heights_scale_to_track() {
        let heights: Vec<u32> = REVENUE_PROJECTIONS
            .iter()
            .map(|p| revenue_bar_height_px(p.arr_millions))
            .collect();
        assert_eq!(heights, vec![38, 77, 269]);
        assert_eq!(revenue_bar_height_px(REVENUE_AXIS_MAX_MILLIONS), 384);
        assert_eq!(revenue_bar_height_px(-5.0), 0);
    }

    #[test]
    fn axis_runs_top_down() {
        let labels = axis_labels();
        assert_eq!(labels.first().map(String::as_str), Some("$300M"));
        assert_eq!(labels.last().map(String::as_str), Some("$0M"));
        assert_eq!(labels.len(), 7);
    }
}
