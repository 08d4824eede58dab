//! Stacked bar chart of vendor settlement per division.
//!
//! Each division gets up to two bars (warranty, out of warranty), each split
//! into settled and pending segments. Segments grow in one after another
//! following [`reveal_schedule`].

use crate::shared::config::use_settings;
use contracts::dashboards::d400_vendor_status::{
    group_by_division, needs_replay, reveal_schedule, BarWidth, DashboardData, DivisionStatus,
    RevealState, Segment,
};
use contracts::shared::settings::ChartTiming;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq)]
struct TooltipState {
    x: i32,
    y: i32,
    label: &'static str,
    percent: f64,
    count: u64,
}

fn segment_class(segment: Segment) -> &'static str {
    match segment {
        Segment::WarrantySettled => "chart__segment chart__segment--warranty-settled",
        Segment::WarrantyPending => "chart__segment chart__segment--warranty-pending",
        Segment::OutWarrantySettled => "chart__segment chart__segment--outwarranty-settled",
        Segment::OutWarrantyPending => "chart__segment chart__segment--outwarranty-pending",
    }
}

fn segment_style(revealed: bool, percent: f64) -> String {
    if revealed {
        format!("height: {}%", percent)
    } else {
        "height: 0".to_string()
    }
}

fn bar_class(width: BarWidth) -> &'static str {
    match width {
        BarWidth::Wide => "chart__bar chart__bar--wide",
        BarWidth::Narrow => "chart__bar chart__bar--narrow",
    }
}

/// Plays the reveal schedule for `divisions`. A newer run (higher
/// generation) stops an older one.
fn play_reveal(
    divisions: usize,
    timing: &ChartTiming,
    reveal: RwSignal<RevealState>,
    generation: StoredValue<u64>,
) {
    generation.update_value(|g| *g += 1);
    let run = generation.get_value();
    reveal.set(RevealState::hidden(divisions));

    let steps = reveal_schedule(divisions, timing);
    spawn_local(async move {
        let mut elapsed = 0;
        for step in steps {
            if step.at_ms > elapsed {
                TimeoutFuture::new(step.at_ms - elapsed).await;
                elapsed = step.at_ms;
            }
            if generation.get_value() != run {
                return;
            }
            reveal.update(|state| state.apply(&step));
        }
    });
}

fn bar(
    index: usize,
    division: DivisionStatus,
    segments: [Segment; 2],
    reveal: RwSignal<RevealState>,
    tooltip: RwSignal<Option<TooltipState>>,
) -> impl IntoView {
    let class = bar_class(division.bar_width());
    let parts = segments
        .into_iter()
        .map(|segment| {
            let percent = division.percent(segment);
            let count = division.count(segment);
            view! {
                <div
                    class=segment_class(segment)
                    style=move || segment_style(reveal.with(|r| r.is_revealed(index, segment)), percent)
                    on:mouseover=move |ev| {
                        tooltip.set(Some(TooltipState {
                            x: ev.client_x(),
                            y: ev.client_y(),
                            label: segment.label(),
                            percent,
                            count,
                        }))
                    }
                    on:mouseout=move |_| tooltip.set(None)
                ></div>
            }
        })
        .collect_view();

    view! { <div class=class>{parts}</div> }
}

#[component]
pub fn VendorStatusChart(#[prop(into)] data: Signal<DashboardData>) -> impl IntoView {
    let grouped = Memo::new(move |_| data.with(|d| group_by_division(d.status_rows())));
    let total_vendors = Memo::new(move |_| data.with(DashboardData::total_vendors));

    let timing = use_settings().chart;
    let reveal = RwSignal::new(RevealState::default());
    let generation = StoredValue::new(0u64);
    let tooltip = RwSignal::new(None::<TooltipState>);

    Effect::new(move |previous: Option<Vec<DivisionStatus>>| {
        let current = grouped.get();
        if needs_replay(previous.as_deref(), &current) {
            play_reveal(current.len(), &timing, reveal, generation);
        }
        current
    });

    view! {
        <div class="chart">
            {move || total_vendors.get().map(|total| view! {
                <div class="chart__counter">
                    <span class="chart__counter-value">{format!("{} +", total)}</span>
                    <span class="chart__counter-label">"Products Challaned"</span>
                </div>
            })}

            {move || tooltip.get().map(|t| view! {
                <div
                    class="chart__tooltip"
                    style=format!("left: {}px; top: {}px", t.x + 12, t.y + 12)
                >
                    <div class="chart__tooltip-label">{t.label}</div>
                    <div class="chart__tooltip-value">
                        {format!("{}%", t.percent)}
                        <span class="chart__tooltip-count">{format!(" ({})", t.count)}</span>
                    </div>
                </div>
            })}

            <div class="chart__divisions">
                {move || {
                    grouped
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, division)| {
                            let name = division.division.clone();
                            let warranty = division.shows_warranty().then(|| bar(
                                index,
                                division.clone(),
                                [Segment::WarrantySettled, Segment::WarrantyPending],
                                reveal,
                                tooltip,
                            ));
                            let outwarranty = division.shows_outwarranty().then(|| bar(
                                index,
                                division.clone(),
                                [Segment::OutWarrantySettled, Segment::OutWarrantyPending],
                                reveal,
                                tooltip,
                            ));
                            view! {
                                <div class="chart__division">
                                    <div class="chart__bars">{warranty}{outwarranty}</div>
                                    <span class="chart__division-label" title=name.clone()>{name.clone()}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_height_follows_reveal() {
        assert_eq!(segment_style(false, 75.0), "height: 0");
        assert_eq!(segment_style(true, 75.0), "height: 75%");
        assert_eq!(segment_style(true, 33.3), "height: 33.3%");
    }

    #[test]
    fn test_segment_classes_are_distinct() {
        let classes: std::collections::HashSet<&str> =
            Segment::ALL.into_iter().map(segment_class).collect();
        assert_eq!(classes.len(), 4);
    }

    #[test]
    fn test_bar_class() {
        assert!(bar_class(BarWidth::Wide).ends_with("--wide"));
        assert!(bar_class(BarWidth::Narrow).ends_with("--narrow"));
    }
}
