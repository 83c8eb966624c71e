//! 検索バーコンポーネント

use leptos::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};
use crate::app::SearchContext;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = expect_context::<SearchContext>();

    // 入力欄は保存済みの検索語から始める
    let initial = ctx.store.with_untracked(|s| s.query().to_string());
    let (draft, set_draft) = signal(initial);

    let is_busy = move || ctx.store.with(|s| s.status().is_busy());

    let submit = move || ctx.start_search(draft.get_untracked());

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        }
    };

    let on_reset = move |_: MouseEvent| {
        set_draft.set(String::new());
        ctx.reset();
    };

    view! {
        <section class="search-bar">
            <input
                type="text"
                placeholder="Search trademarks by name, owner, law firm or attorney"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                class="btn btn-primary"
                disabled=is_busy
                on:click=move |_| submit()
            >
                {move || if is_busy() { "Searching..." } else { "Search" }}
            </button>
            <button class="btn" on:click=move |_| ctx.show_filters.update(|v| *v = !*v)>
                {move || if ctx.show_filters.get() { "Hide Filters" } else { "Filters" }}
            </button>
            <button class="btn" on:click=move |_| ctx.show_charts.update(|v| *v = !*v)>
                {move || if ctx.show_charts.get() { "Hide Charts" } else { "Show Charts" }}
            </button>
            <button class="btn btn-secondary" on:click=on_reset>"Reset"</button>
        </section>
    }
}
