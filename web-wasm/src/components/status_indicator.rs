//! 検索状態の表示

use leptos::prelude::*;
use trademark_search_common::status_view;
use crate::app::SearchContext;

#[component]
pub fn StatusIndicator() -> impl IntoView {
    let ctx = expect_context::<SearchContext>();

    let state = move || {
        ctx.store.with(|s| {
            let view = status_view(s.status(), s.error(), s.total_results());
            (s.status().as_str(), view)
        })
    };

    view! {
        {move || {
            let (class, view) = state();
            view! {
                <div class=format!("status-indicator status-{}", class)>
                    <h2>{view.title}</h2>
                    <p>{view.message}</p>
                </div>
            }
        }}
    }
}
