//! 表示用データの導出
//!
//! ストアの検索結果 → 絞り込み → 並び替え → グラフ集計 を1回で行う。

use crate::chart::{self, ChartOutcome};
use crate::filter::{self, FilterValues};
use crate::sort::{self, SortSpec};
use crate::types::SearchResult;

/// 一覧とグラフの表示用データ
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub items: Vec<SearchResult>,
    pub charts: ChartOutcome,
}

impl ResultView {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 表示用データを作成
///
/// `search_input` は結果一覧上部の絞り込み入力。グラフの集計に失敗しても
/// 一覧はそのまま返す。
pub fn derive_view(
    results: &[SearchResult],
    search_input: &str,
    filters: &FilterValues,
    sort_spec: SortSpec,
) -> ResultView {
    let filtered = filter::filter_results(results, search_input, filters);
    let items = sort::sort_results(&filtered, sort_spec.key, sort_spec.order);
    let charts = chart::prepare_charts(&items);
    ResultView { items, charts }
}
