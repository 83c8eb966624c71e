//! 検索条件とURLクエリ文字列の相互変換
//!
//! キー: `q`（フリーテキスト）, `owner`, `lawFirm`, `attorney`, `status`

use crate::filter::{FilterKey, FilterValues};

/// フリーテキスト検索のキー
pub const QUERY_KEY: &str = "q";

/// URLから復元した検索条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSearch {
    pub query: String,
    pub filters: FilterValues,
}

/// クエリ文字列を生成（先頭の `?` は付けない）
///
/// 空のクエリ・フィルタは出力しない。
pub fn serialize(query: &str, filters: &FilterValues) -> String {
    let mut pairs: Vec<String> = Vec::new();
    if !query.is_empty() {
        pairs.push(format!("{}={}", QUERY_KEY, urlencoding::encode(query)));
    }
    for (key, value) in filters.iter() {
        pairs.push(format!("{}={}", key.as_str(), urlencoding::encode(value)));
    }
    pairs.join("&")
}

/// パス + クエリ文字列（履歴の置き換えに使う）
pub fn location(path: &str, query: &str, filters: &FilterValues) -> String {
    let search = serialize(query, filters);
    if search.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, search)
    }
}

/// `+` を空白として扱い、パーセントデコードする
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        // 不正なエンコードはそのまま使う
        Err(_) => spaced,
    }
}

/// クエリ文字列から検索条件を復元
///
/// 先頭の `?` は省略可。未知のキーは無視し、失敗しない。
/// 同じキーが複数ある場合は最初の値を使う。
pub fn deserialize(search: &str) -> UrlSearch {
    let search = search.strip_prefix('?').unwrap_or(search);
    let mut parsed = UrlSearch::default();
    let mut seen_query = false;

    for pair in search.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(raw_key);
        let value = decode_component(raw_value);

        if key == QUERY_KEY {
            if !seen_query {
                parsed.query = value;
                seen_query = true;
            }
        } else if let Some(filter_key) = FilterKey::from_key(&key) {
            if parsed.filters.get(filter_key).is_none() {
                parsed.filters.set(filter_key, value);
            }
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_query_and_status() {
        let parsed = deserialize("?q=nike&status=active");
        assert_eq!(parsed.query, "nike");
        assert_eq!(parsed.filters, FilterValues::new().with(FilterKey::Status, "active"));
    }

    #[test]
    fn test_deserialize_empty() {
        assert_eq!(deserialize(""), UrlSearch::default());
        assert_eq!(deserialize("?"), UrlSearch::default());
    }

    #[test]
    fn test_deserialize_ignores_unknown_and_malformed() {
        let parsed = deserialize("category=Logos&&owner&lawFirm=%E0%A4%A&attorney=Jane+Roe");
        assert_eq!(parsed.query, "");
        // 値なしの owner は空扱い
        assert_eq!(parsed.filters.get(FilterKey::Owner), None);
        assert_eq!(parsed.filters.get(FilterKey::LawFirm), Some("%E0%A4%A"));
        assert_eq!(parsed.filters.get(FilterKey::Attorney), Some("Jane Roe"));
    }

    #[test]
    fn test_serialize_omits_empty_values() {
        assert_eq!(serialize("", &FilterValues::new()), "");
        let filters = FilterValues::new()
            .with(FilterKey::Owner, "Acme & Sons")
            .with(FilterKey::Status, "pending");
        assert_eq!(serialize("rocket", &filters), "q=rocket&owner=Acme%20%26%20Sons&status=pending");
    }

    #[test]
    fn test_serialize_then_deserialize_restores_state() {
        let filters = FilterValues::new()
            .with(FilterKey::LawFirm, "Baker & Co")
            .with(FilterKey::Attorney, "Jane Roe");
        let parsed = deserialize(&serialize("ÄPFEL co", &filters));
        assert_eq!(parsed.query, "ÄPFEL co");
        assert_eq!(parsed.filters, filters);
    }

    #[test]
    fn test_location() {
        assert_eq!(location("/search", "", &FilterValues::new()), "/search");
        assert_eq!(location("/search", "nike", &FilterValues::new()), "/search?q=nike");
    }
}
