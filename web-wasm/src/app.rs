//! メインアプリケーションコンポーネント

use crate::components::{
    charts::Charts,
    filters::FiltersPanel,
    header::Header,
    result_list::ResultList,
    search_bar::SearchBar,
    status_indicator::StatusIndicator,
};
use crate::storage::LocalSnapshotStorage;
use crate::url_sync;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use trademark_search_common::{
    derive_view, FilterValues, MockSource, ResultView, SearchStore, SortKey, SortSpec,
};

/// 擬似的な検索待ち時間（ミリ秒）
pub const SEARCH_DELAY_MS: u32 = 500;

/// 画面全体で共有する状態
#[derive(Clone, Copy)]
pub struct SearchContext {
    pub store: RwSignal<SearchStore<LocalSnapshotStorage>>,
    /// 結果一覧上部の絞り込み入力（保存しない）
    pub search_input: RwSignal<String>,
    pub sort: RwSignal<SortSpec>,
    pub show_charts: RwSignal<bool>,
    pub show_filters: RwSignal<bool>,
    pub expanded: RwSignal<Option<String>>,
}

impl SearchContext {
    /// スナップショットを復元し、URLに条件があればそちらを優先する
    pub fn restore() -> Self {
        let mut store = SearchStore::open(LocalSnapshotStorage);
        let from_url = url_sync::read_location();
        if !from_url.query.is_empty() {
            store.set_query(from_url.query);
        }
        if !from_url.filters.is_empty() {
            store.set_filters(from_url.filters);
        }

        Self {
            store: RwSignal::new(store),
            search_input: RwSignal::new(String::new()),
            sort: RwSignal::new(SortSpec::default()),
            show_charts: RwSignal::new(true),
            show_filters: RwSignal::new(false),
            expanded: RwSignal::new(None),
        }
    }

    /// 検索を開始し、待ち時間の後に結果を反映する
    ///
    /// 後から開始した検索があれば、先の検索の結果は捨てる。
    pub fn start_search(&self, query: String) {
        let query = query.trim().to_string();
        if query.is_empty() {
            return;
        }

        let Some(ticket) = self.store.try_update(|s| s.begin_search()) else {
            return;
        };

        let store = self.store;
        Timeout::new(SEARCH_DELAY_MS, move || {
            let response = MockSource::sample().search(&query);
            store.update(|s| {
                if !s.is_current(ticket) {
                    return;
                }
                match response {
                    Ok(response) => {
                        s.set_query(query);
                        s.complete_search(ticket, response.results, response.total);
                    }
                    Err(e) => {
                        s.fail_search(ticket, e.to_string());
                    }
                }
            });
        })
        .forget();
    }

    pub fn set_filters(&self, filters: FilterValues) {
        self.store.update(|s| s.set_filters(filters));
    }

    pub fn toggle_sort(&self, key: SortKey) {
        self.sort.update(|spec| *spec = spec.toggle(key));
    }

    pub fn toggle_expanded(&self, id: String) {
        self.expanded.update(|current| {
            *current = if current.as_deref() == Some(id.as_str()) { None } else { Some(id) };
        });
    }

    pub fn reset(&self) {
        self.store.update(|s| s.reset());
        self.search_input.set(String::new());
        self.expanded.set(None);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let ctx = SearchContext::restore();
    provide_context(ctx);

    // 絞り込み → 並び替え → グラフ集計
    let view = Memo::new(move |_| {
        let input = ctx.search_input.get();
        let spec = ctx.sort.get();
        ctx.store
            .with(|s| derive_view(s.results(), &input, s.filters(), spec))
    });
    provide_context(view);

    // 検索条件をURLへ反映
    Effect::new(move |_| {
        let (query, filters) = ctx
            .store
            .with(|s| (s.query().to_string(), s.filters().clone()));
        url_sync::replace_location(&query, &filters);
    });

    Effect::new(move |_| {
        if let Some(message) = view.with(|v| v.charts.error().map(str::to_string)) {
            gloo::console::error!("Graph data error:", message);
        }
    });

    view! {
        <div class="app">
            <Header />
            <main class="container">
                <SearchBar />
                <Show when=move || ctx.show_filters.get()>
                    <FiltersPanel />
                </Show>
                <StatusIndicator />
                <Show when=move || ctx.show_charts.get()>
                    <Charts />
                </Show>
                <ResultList />
            </main>
        </div>
    }
}

/// 導出済みの表示用データ
pub fn use_result_view() -> Memo<ResultView> {
    expect_context::<Memo<ResultView>>()
}
