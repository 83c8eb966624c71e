//! 検索結果一覧コンポーネント

use leptos::prelude::*;
use web_sys::MouseEvent;
use trademark_search_common::{SearchResult, SortKey, SortOrder};
use crate::app::{use_result_view, SearchContext};

#[component]
pub fn ResultList() -> impl IntoView {
    let ctx = expect_context::<SearchContext>();
    let result_view = use_result_view();

    let has_results = move || ctx.store.with(|s| !s.results().is_empty());

    view! {
        <Show when=has_results>
            <section class="result-list">
                <div class="result-toolbar">
                    <input
                        type="text"
                        placeholder="Narrow results..."
                        prop:value=move || ctx.search_input.get()
                        on:input=move |ev| ctx.search_input.set(event_target_value(&ev))
                    />
                    <div class="sort-buttons">
                        {SortKey::ALL.into_iter().map(|key| view! { <SortButton sort_key=key /> }).collect_view()}
                    </div>
                </div>
                <p class="result-count">
                    {move || format!("{} results", result_view.with(|v| v.len()))}
                </p>
                {move || {
                    let items = result_view.with(|v| v.items.clone());
                    if items.is_empty() {
                        view! { <p class="empty">"No trademarks match the current filters."</p> }
                            .into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|record| view! { <ResultCard record=record /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </section>
        </Show>
    }
}

#[component]
fn SortButton(sort_key: SortKey) -> impl IntoView {
    let ctx = expect_context::<SearchContext>();
    let key = sort_key;

    let label = move || {
        let spec = ctx.sort.get();
        if spec.key != key {
            return key.label().to_string();
        }
        let arrow = match spec.order {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        };
        format!("{} {}", key.label(), arrow)
    };

    view! {
        <button
            class=move || if ctx.sort.get().key == key { "btn sort active" } else { "btn sort" }
            on:click=move |_| ctx.toggle_sort(key)
        >
            {label}
        </button>
    }
}

#[component]
fn ResultCard(record: SearchResult) -> impl IntoView {
    let ctx = expect_context::<SearchContext>();

    let is_expanded = {
        let id = record.id.clone();
        move || ctx.expanded.get().as_deref() == Some(id.as_str())
    };
    let on_toggle = {
        let id = record.id.clone();
        move |_: MouseEvent| ctx.toggle_expanded(id.clone())
    };

    let status_class = format!("badge status-{}", record.status.as_str());
    let details = record.clone();

    view! {
        <article class="result-card" on:click=on_toggle>
            <header class="result-card-header">
                <h4>{record.name.clone()}</h4>
                <span class=status_class>{record.status.label()}</span>
            </header>
            <p class="owner">{record.owner.clone()}</p>
            <p class="filing-date">{format!("Filed: {}", record.filing_date)}</p>
            <Show when=is_expanded>
                <ResultDetails record=details.clone() />
            </Show>
        </article>
    }
}

#[component]
fn ResultDetails(record: SearchResult) -> impl IntoView {
    let optional = |label: &'static str, value: Option<String>| {
        value.map(|v| view! { <dt>{label}</dt><dd>{v}</dd> })
    };

    view! {
        <dl class="result-details">
            <dt>"Serial Number"</dt>
            <dd>{record.serial_number}</dd>
            <dt>"Description"</dt>
            <dd>{record.description}</dd>
            {optional("Law Firm", record.law_firm)}
            {optional("Attorney", record.attorney)}
        </dl>
        {record.image_url.map(|src| view! { <img class="mark-image" src=src alt="Trademark" /> })}
    }
}
