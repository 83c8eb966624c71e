//! 検索結果の並び替え

use crate::types::SearchResult;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 並び替えキー
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// 名称順
    #[default]
    Relevance,
    /// 出願日順
    FilingDate,
    /// 新着順（desc で新しい順。FilingDate と同じ並びになる）
    Recent,
}

/// 並び順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Relevance, SortKey::FilingDate, SortKey::Recent];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::FilingDate => "filingDate",
            SortKey::Recent => "recent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::FilingDate => "Filing Date",
            SortKey::Recent => "Most Recent",
        }
    }
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relevance" | "name" => Ok(SortKey::Relevance),
            "filingdate" | "filing-date" | "date" => Ok(SortKey::FilingDate),
            "recent" => Ok(SortKey::Recent),
            _ => Err(format!("Unknown sort key: {} (relevance/filingDate/recent)", s)),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Unknown sort order: {} (asc/desc)", s)),
        }
    }
}

/// 現在の並び替え設定
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// 並び替えボタン押下時の遷移
    ///
    /// 同じキーなら昇順/降順を反転、別のキーなら降順で切り替える。
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.order.toggled())
        } else {
            Self::new(key, SortOrder::Desc)
        }
    }
}

/// 照合用キー（NFD分解してアクセント記号を除き、小文字化）
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// 名称の比較
///
/// アクセントと大文字小文字を無視した比較 → 小文字での比較 → 元の文字列の順に使う。
fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// 出願日の比較。パースできない日付は最も古いものとして扱う
fn compare_filing_dates(a: &SearchResult, b: &SearchResult) -> Ordering {
    a.filing_day().cmp(&b.filing_day())
}

/// 2件を比較する
///
/// 同順位は id 昇順（並び順に関係なく固定）。
pub fn compare(a: &SearchResult, b: &SearchResult, key: SortKey, order: SortOrder) -> Ordering {
    let primary = match key {
        SortKey::Relevance => compare_names(&a.name, &b.name),
        SortKey::FilingDate | SortKey::Recent => compare_filing_dates(a, b),
    };
    let primary = match order {
        SortOrder::Asc => primary,
        SortOrder::Desc => primary.reverse(),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

/// 並び替えた新しい列を返す（入力は変更しない）
pub fn sort_results(results: &[SearchResult], key: SortKey, order: SortOrder) -> Vec<SearchResult> {
    let mut sorted = results.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key, order));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordStatus;

    fn record(id: &str, name: &str, date: &str) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            name: name.to_string(),
            owner: "Acme".to_string(),
            status: RecordStatus::Active,
            filing_date: date.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<SearchResult> {
        vec![
            record("a", "Acme Rocket", "2024-01-10"),
            record("b", "acme anvil", "2024-06-01"),
            record("c", "Globex", "2023-12-15"),
        ]
    }

    fn dates(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.filing_date.as_str()).collect()
    }

    #[test]
    fn test_filing_date_ascending() {
        let sorted = sort_results(&sample(), SortKey::FilingDate, SortOrder::Asc);
        assert_eq!(dates(&sorted), vec!["2023-12-15", "2024-01-10", "2024-06-01"]);
    }

    #[test]
    fn test_relevance_is_case_insensitive() {
        let sorted = sort_results(&sample(), SortKey::Relevance, SortOrder::Asc);
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["acme anvil", "Acme Rocket", "Globex"]);
    }

    /// アクセント付きの名称も基本文字の位置に並ぶ
    #[test]
    fn test_relevance_folds_accents() {
        let results = vec![
            record("1", "Zebra", "2024-01-01"),
            record("2", "Éclair", "2024-01-01"),
            record("3", "Apple", "2024-01-01"),
            record("4", "eclair", "2024-01-01"),
        ];
        let sorted = sort_results(&results, SortKey::Relevance, SortOrder::Asc);
        let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "eclair", "Éclair", "Zebra"]);
    }

    #[test]
    fn test_desc_reverses_asc_without_ties() {
        for key in SortKey::ALL {
            let mut asc = sort_results(&sample(), key, SortOrder::Asc);
            let desc = sort_results(&sample(), key, SortOrder::Desc);
            asc.reverse();
            assert_eq!(asc, desc, "key={}", key);
        }
    }

    #[test]
    fn test_recent_desc_matches_filing_date_desc() {
        let recent = sort_results(&sample(), SortKey::Recent, SortOrder::Desc);
        let filing = sort_results(&sample(), SortKey::FilingDate, SortOrder::Desc);
        assert_eq!(recent, filing);
        assert_eq!(dates(&recent)[0], "2024-06-01");

        let recent_asc = sort_results(&sample(), SortKey::Recent, SortOrder::Asc);
        assert_eq!(dates(&recent_asc)[0], "2023-12-15");
    }

    #[test]
    fn test_ties_fall_back_to_id_ascending() {
        let results = vec![
            record("z", "Same", "2024-01-01"),
            record("m", "Same", "2024-01-01"),
            record("a", "Same", "2024-01-01"),
        ];
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let sorted = sort_results(&results, SortKey::Relevance, order);
            let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, vec!["a", "m", "z"]);
        }
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let results = sample();
        let before = results.clone();
        let sorted = sort_results(&results, SortKey::FilingDate, SortOrder::Asc);
        assert_eq!(results, before);
        assert_eq!(sorted.len(), results.len());
    }

    #[test]
    fn test_unparsable_dates_sort_oldest() {
        let mut results = sample();
        results.push(record("x", "Broken", "n/a"));
        let sorted = sort_results(&results, SortKey::FilingDate, SortOrder::Asc);
        assert_eq!(sorted[0].id, "x");
    }

    #[test]
    fn test_toggle_sort() {
        let spec = SortSpec::default();
        assert_eq!(spec, SortSpec::new(SortKey::Relevance, SortOrder::Desc));

        let spec = spec.toggle(SortKey::Relevance);
        assert_eq!(spec.order, SortOrder::Asc);

        let spec = spec.toggle(SortKey::FilingDate);
        assert_eq!(spec, SortSpec::new(SortKey::FilingDate, SortOrder::Desc));
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("filingDate".parse::<SortKey>(), Ok(SortKey::FilingDate));
        assert_eq!("RECENT".parse::<SortKey>(), Ok(SortKey::Recent));
        assert!("size".parse::<SortKey>().is_err());
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
    }
}
