//! モック検索データ
//!
//! バックエンドの代わりに組み込みの商標データから検索する。

use crate::error::{Error, Result};
use crate::filter::{self, FilterValues};
use crate::types::{RecordStatus, SearchResult};

/// 検索レスポンス
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total: usize,
}

/// モックの検索元
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    records: Vec<SearchResult>,
    failure: Option<String>,
}

impl MockSource {
    pub fn new(records: Vec<SearchResult>) -> Self {
        Self {
            records,
            failure: None,
        }
    }

    /// 組み込みデータで作成
    pub fn sample() -> Self {
        Self::new(sample_records())
    }

    /// 常に失敗する検索元（エラー表示の確認用）
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(message.into()),
        }
    }

    pub fn records(&self) -> &[SearchResult] {
        &self.records
    }

    /// クエリに一致するレコードを返す
    ///
    /// 名称・オーナー・事務所・弁護士の部分一致。空白のみのクエリは全件。
    pub fn search(&self, query: &str) -> Result<SearchResponse> {
        if let Some(message) = &self.failure {
            return Err(Error::Search(message.clone()));
        }

        let results = filter::filter_results(&self.records, query.trim(), &FilterValues::new());
        let total = results.len();
        Ok(SearchResponse { results, total })
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    owner: &str,
    status: RecordStatus,
    filing_date: &str,
    serial_number: &str,
    law_firm: Option<&str>,
    attorney: Option<&str>,
    description: &str,
) -> SearchResult {
    SearchResult {
        id: id.to_string(),
        name: name.to_string(),
        owner: owner.to_string(),
        status,
        filing_date: filing_date.to_string(),
        serial_number: serial_number.to_string(),
        description: description.to_string(),
        image_url: None,
        law_firm: law_firm.map(str::to_string),
        attorney: attorney.map(str::to_string),
    }
}

/// 組み込みの商標データ
pub fn sample_records() -> Vec<SearchResult> {
    use RecordStatus::*;

    vec![
        entry("1", "NIKE", "Nike, Inc.", Active, "2019-03-12", "88345123",
            Some("Banner & Witcoff"), Some("Helen Hill"), "Athletic footwear and apparel"),
        entry("2", "JUST DO IT", "Nike, Inc.", Active, "2019-11-04", "88690021",
            Some("Banner & Witcoff"), Some("Helen Hill"), "Slogan for sporting goods"),
        entry("3", "AIR JORDAN", "Nike, Inc.", Pending, "2023-06-21", "97988110",
            Some("Banner & Witcoff"), Some("Mark Dunn"), "Basketball shoes"),
        entry("4", "APPLE", "Apple Inc.", Active, "2018-01-09", "87750034",
            Some("Kilpatrick Townsend"), Some("Grace Liu"), "Computers and consumer electronics"),
        entry("5", "IPHONE", "Apple Inc.", Active, "2020-08-17", "90112233",
            Some("Kilpatrick Townsend"), Some("Grace Liu"), "Smartphones"),
        entry("6", "VISION PRO", "Apple Inc.", Pending, "2023-06-05", "97990412",
            Some("Kilpatrick Townsend"), None, "Head-mounted displays"),
        entry("7", "GALAXY", "Samsung Electronics Co., Ltd.", Active, "2021-02-26", "90555871",
            Some("Harness Dickey"), Some("Peter Kim"), "Mobile phones and tablets"),
        entry("8", "TESLA", "Tesla, Inc.", Active, "2022-09-30", "97611090",
            None, None, "Electric vehicles"),
        entry("9", "CYBERTRUCK", "Tesla, Inc.", Abandoned, "2019-11-22", "88703344",
            None, Some("Sam Ortiz"), "Pickup trucks"),
        entry("10", "SURFACE", "Microsoft Corporation", Active, "2021-10-14", "97085522",
            Some("Merchant & Gould"), Some("Dana Wu"), "Tablet computers"),
        entry("11", "PIXEL", "Google LLC", Active, "2022-05-11", "97402117",
            Some("Fish & Richardson"), Some("Omar Haddad"), "Smartphones and accessories"),
        entry("12", "ALEXA", "Amazon Technologies, Inc.", Pending, "2024-02-08", "98400213",
            Some("Fish & Richardson"), Some("Rita Chen"), "Voice assistant software"),
        entry("13", "KINDLE", "Amazon Technologies, Inc.", Abandoned, "2024-02-19", "98410988",
            None, None, "E-book readers"),
    ]
}
