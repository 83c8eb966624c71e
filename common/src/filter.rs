//! フィルタ条件と絞り込み
//!
//! フリーテキスト検索と項目別フィルタ（owner/lawFirm/attorney/status）を
//! すべてAND条件で適用する。入力順は保持する。

use crate::types::{RecordStatus, SearchResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// フィルタ項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKey {
    Owner,
    LawFirm,
    Attorney,
    Status,
}

impl FilterKey {
    pub const ALL: [FilterKey; 4] = [
        FilterKey::Owner,
        FilterKey::LawFirm,
        FilterKey::Attorney,
        FilterKey::Status,
    ];

    /// URL・スナップショットで使うキー名
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Owner => "owner",
            FilterKey::LawFirm => "lawFirm",
            FilterKey::Attorney => "attorney",
            FilterKey::Status => "status",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKey::Owner => "Owner",
            FilterKey::LawFirm => "Law Firm",
            FilterKey::Attorney => "Attorney",
            FilterKey::Status => "Status",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// 項目別フィルタ値
///
/// 1項目につき1つの文字列。空文字は「未指定」と同じ扱いで保持しない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct FilterValues {
    values: BTreeMap<FilterKey, String>,
}

impl FilterValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を設定したコピーを返す（ビルダー形式）
    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// 値を設定。空文字なら項目を外す
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
    }

    pub fn remove(&mut self, key: FilterKey) {
        self.values.remove(&key);
    }

    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 有効な項目をキー順に列挙
    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for FilterValues {
    /// 未知のキーは無視する
    fn from(raw: BTreeMap<String, String>) -> Self {
        let mut filters = FilterValues::new();
        for (key, value) in raw {
            if let Some(key) = FilterKey::from_key(&key) {
                filters.set(key, value);
            }
        }
        filters
    }
}

impl From<FilterValues> for BTreeMap<String, String> {
    fn from(filters: FilterValues) -> Self {
        filters
            .values
            .into_iter()
            .map(|(k, v)| (k.as_str().to_string(), v))
            .collect()
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn optional_contains(field: Option<&str>, needle_lower: &str) -> bool {
    field.is_some_and(|value| contains_ignore_case(value, needle_lower))
}

/// 1件がクエリとフィルタをすべて満たすか
pub fn matches(result: &SearchResult, query: &str, filters: &FilterValues) -> bool {
    if !query.is_empty() {
        let q = query.to_lowercase();
        let hit = contains_ignore_case(&result.name, &q)
            || contains_ignore_case(&result.owner, &q)
            || optional_contains(result.law_firm.as_deref(), &q)
            || optional_contains(result.attorney.as_deref(), &q);
        if !hit {
            return false;
        }
    }

    filters.iter().all(|(key, value)| match key {
        // ステータスは大文字小文字を区別した完全一致
        FilterKey::Status => result.status != RecordStatus::Unknown && result.status.as_str() == value,
        FilterKey::Owner => contains_ignore_case(&result.owner, &value.to_lowercase()),
        FilterKey::LawFirm => optional_contains(result.law_firm.as_deref(), &value.to_lowercase()),
        FilterKey::Attorney => optional_contains(result.attorney.as_deref(), &value.to_lowercase()),
    })
}

/// 検索結果を絞り込む（入力順を保持）
pub fn filter_results(results: &[SearchResult], query: &str, filters: &FilterValues) -> Vec<SearchResult> {
    results
        .iter()
        .filter(|r| matches(r, query, filters))
        .cloned()
        .collect()
}

/// フィルタ選択肢（ラベルと該当件数）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub count: usize,
}

/// ステータスフィルタの選択肢を現在の結果から生成
pub fn status_options(results: &[SearchResult]) -> Vec<FilterOption> {
    RecordStatus::known()
        .into_iter()
        .map(|status| FilterOption {
            value: status.as_str().to_string(),
            label: status.label().to_string(),
            count: results.iter().filter(|r| r.status == status).count(),
        })
        .collect()
}

/// 項目値ごとの選択肢（初出順、件数付き）
///
/// ステータス以外の項目用。値を持たないレコードは数えない。
pub fn value_options(results: &[SearchResult], key: FilterKey) -> Vec<FilterOption> {
    if key == FilterKey::Status {
        return status_options(results);
    }

    let mut options: Vec<FilterOption> = Vec::new();
    for result in results {
        let value = match key {
            FilterKey::Owner => Some(result.owner.as_str()),
            FilterKey::LawFirm => result.law_firm.as_deref(),
            FilterKey::Attorney => result.attorney.as_deref(),
            FilterKey::Status => None,
        };
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            continue;
        };
        match options.iter_mut().find(|o| o.value == value) {
            Some(option) => option.count += 1,
            None => options.push(FilterOption {
                value: value.to_string(),
                label: value.to_string(),
                count: 1,
            }),
        }
    }
    options
}
