//! フィルタパネルコンポーネント

use leptos::prelude::*;
use trademark_search_common::filter::{status_options, value_options};
use trademark_search_common::{FilterKey, FilterValues};
use crate::app::SearchContext;

const TEXT_KEYS: [FilterKey; 3] = [FilterKey::Owner, FilterKey::LawFirm, FilterKey::Attorney];

#[component]
pub fn FiltersPanel() -> impl IntoView {
    let ctx = expect_context::<SearchContext>();

    let filters = Memo::new(move |_| ctx.store.with(|s| s.filters().clone()));

    // 1項目だけ差し替えて全体を置き換える
    let update_filter = move |key: FilterKey, value: String| {
        let mut next = filters.get_untracked();
        next.set(key, value);
        ctx.set_filters(next);
    };

    let status_choices = move || ctx.store.with(|s| status_options(s.results()));

    view! {
        <section class="filters-panel">
            <h3>"Filters"</h3>
            {TEXT_KEYS
                .into_iter()
                .map(|key| {
                    let list_id = format!("filter-{}-options", key.as_str());
                    view! {
                        <label class="filter-field">
                            <span>{key.label()}</span>
                            <input
                                type="text"
                                list=list_id.clone()
                                prop:value=move || {
                                    filters.with(|f| f.get(key).unwrap_or_default().to_string())
                                }
                                on:input=move |ev| update_filter(key, event_target_value(&ev))
                            />
                            <datalist id=list_id>
                                {move || {
                                    ctx.store
                                        .with(|s| value_options(s.results(), key))
                                        .into_iter()
                                        .map(|option| {
                                            let text = format!("{} ({})", option.label, option.count);
                                            view! { <option value=option.value>{text}</option> }
                                        })
                                        .collect_view()
                                }}
                            </datalist>
                        </label>
                    }
                })
                .collect_view()}
            <fieldset class="filter-status">
                <legend>{FilterKey::Status.label()}</legend>
                <label>
                    <input
                        type="radio"
                        name="status"
                        prop:checked=move || filters.with(|f| f.get(FilterKey::Status).is_none())
                        on:change=move |_| update_filter(FilterKey::Status, String::new())
                    />
                    "All"
                </label>
                {move || {
                    status_choices()
                        .into_iter()
                        .map(|option| {
                            let value = option.value.clone();
                            let checked_value = option.value.clone();
                            view! {
                                <label>
                                    <input
                                        type="radio"
                                        name="status"
                                        prop:checked=move || {
                                            filters.with(|f| f.get(FilterKey::Status) == Some(checked_value.as_str()))
                                        }
                                        on:change=move |_| update_filter(FilterKey::Status, value.clone())
                                    />
                                    {format!("{} ({})", option.label, option.count)}
                                </label>
                            }
                        })
                        .collect_view()
                }}
            </fieldset>
            <button class="btn" on:click=move |_| ctx.set_filters(FilterValues::new())>
                "Clear Filters"
            </button>
        </section>
    }
}
