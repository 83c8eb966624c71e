//! 集計グラフコンポーネント
//!
//! 棒の長さは系列内の最大値に対する割合で決める。

use leptos::prelude::*;
use trademark_search_common::{ChartOutcome, ChartSeries};
use crate::app::use_result_view;

#[component]
pub fn Charts() -> impl IntoView {
    let result_view = use_result_view();

    move || match result_view.with(|v| v.charts.clone()) {
        ChartOutcome::NoData => ().into_any(),
        ChartOutcome::Failed(message) => view! {
            <section class="charts charts-error">
                <p>{message}</p>
            </section>
        }
        .into_any(),
        ChartOutcome::Ready(data) => view! {
            <section class="charts">
                <BarChart series=data.status />
                <BarChart series=data.owners />
                <BarChart series=data.timeline />
            </section>
        }
        .into_any(),
    }
}

#[component]
fn BarChart(series: ChartSeries) -> impl IntoView {
    let max = series.max().max(1);

    let rows = series
        .points()
        .map(|(label, count)| {
            let width = count * 100 / max;
            view! {
                <div class="bar-row">
                    <span class="bar-label">{label.to_string()}</span>
                    <div class="bar-track">
                        <div class="bar-fill" style=format!("width: {}%", width) />
                    </div>
                    <span class="bar-count">{count}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <h4>{series.title.clone()}</h4>
            {rows}
        </div>
    }
}
