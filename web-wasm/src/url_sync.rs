//! アドレスバーと検索条件の同期
//!
//! 入力のたびに履歴が増えないよう `replaceState` で置き換える。

use trademark_search_common::url::{self, UrlSearch};
use trademark_search_common::FilterValues;
use wasm_bindgen::JsValue;

/// 現在のURLから検索条件を読む
pub fn read_location() -> UrlSearch {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|search| url::deserialize(&search))
        .unwrap_or_default()
}

/// 検索条件をURLに反映（履歴は置き換え）
pub fn replace_location(query: &str, filters: &FilterValues) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string());
    let target = url::location(&path, query, filters);

    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&target)));
    if let Err(e) = result {
        gloo::console::warn!("URL update failed:", e);
    }
}
