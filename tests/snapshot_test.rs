//! スナップショット保存のテスト
//!
//! ファイルへの保存・復元・初期化を検証

use tempfile::tempdir;
use trademark_search_common::{
    FileStorage, FilterKey, FilterValues, MockSource, SearchState, SearchStatus, SearchStore,
    SnapshotStorage,
};

/// 初回はファイルがなく初期状態
#[test]
fn test_first_run_starts_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let storage = FileStorage::new(dir.path().join("trademark-search.json"));
    assert_eq!(storage.load().expect("読込失敗"), None);

    let store = SearchStore::open(storage);
    assert_eq!(store.state(), &SearchState::default());
}

/// 保存した内容が再起動後に復元される
#[test]
fn test_snapshot_survives_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("trademark-search.json");

    let records = MockSource::sample().search("amazon").expect("検索失敗").results;
    {
        let mut store = SearchStore::open(FileStorage::new(&path));
        store.set_query("amazon");
        store.set_filters(FilterValues::new().with(FilterKey::Status, "pending"));
        store.set_results(records.clone(), records.len());
        let ticket = store.begin_search();
        store.fail_search(ticket, "timeout");
    }
    assert!(path.exists());

    let store = SearchStore::open(FileStorage::new(&path));
    assert_eq!(store.query(), "amazon");
    assert_eq!(store.filters().get(FilterKey::Status), Some("pending"));
    assert_eq!(store.results(), records.as_slice());
    assert_eq!(store.total_results(), 2);
    // 状態とエラーは復元しない
    assert_eq!(store.status(), SearchStatus::Idle);
    assert_eq!(store.error(), None);
}

/// 保存形式は { state, version }
#[test]
fn test_snapshot_file_format() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("trademark-search.json");

    let mut store = SearchStore::open(FileStorage::new(&path));
    store.set_query("nike");

    let content = std::fs::read_to_string(&path).expect("読込失敗");
    let value: serde_json::Value = serde_json::from_str(&content).expect("JSONではない");
    assert_eq!(value["version"], 0);
    assert_eq!(value["state"]["query"], "nike");
    assert_eq!(value["state"]["totalResults"], 0);
    assert!(value["state"].get("status").is_none());
}

/// 壊れたファイルは無視して初期状態
#[test]
fn test_corrupt_snapshot_is_ignored() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("trademark-search.json");
    std::fs::write(&path, "{\"state\": [1, 2").expect("書込失敗");

    let store = SearchStore::open(FileStorage::new(&path));
    assert_eq!(store.state(), &SearchState::default());
}

/// reset で保存ファイルが削除される
#[test]
fn test_reset_overwrites_snapshot() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("trademark-search.json");

    let mut store = SearchStore::open(FileStorage::new(&path));
    store.set_query("galaxy");
    store.set_results(MockSource::sample().search("galaxy").expect("検索失敗").results, 1);
    store.reset();
    // ファイルごと削除される
    assert!(!path.exists());

    let reopened = SearchStore::open(FileStorage::new(&path));
    assert_eq!(reopened.state(), &SearchState::default());
}

/// clear でファイルを削除
#[test]
fn test_file_storage_clear() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("trademark-search.json");
    let mut storage = FileStorage::new(&path);

    storage.save("{}").expect("保存失敗");
    assert!(path.exists());
    storage.clear().expect("削除失敗");
    assert!(!path.exists());
    // 存在しなくてもエラーにしない
    storage.clear().expect("削除失敗");
}
