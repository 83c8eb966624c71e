//! 擬似非同期検索のテスト
//!
//! 検索の開始・完了・失敗・置き換えとストアへの反映を検証

use std::time::Duration;
use trademark_search::error::SearchAppError;
use trademark_search::session::{SearchOutcome, SearchSession};
use trademark_search_common::{MemoryStorage, MockSource, SearchStatus, SearchStore};

fn session(source: MockSource, delay_ms: u64) -> SearchSession<MemoryStorage> {
    let store = SearchStore::open(MemoryStorage::new());
    SearchSession::new(store, source, Duration::from_millis(delay_ms))
}

/// 検索結果がストアに反映される
#[tokio::test]
async fn test_search_commits_results() {
    let mut session = session(MockSource::sample(), 10);
    let outcome = session.run("apple").await.expect("検索失敗");
    assert_eq!(outcome, SearchOutcome::Committed { total: 3 });

    let store = session.store();
    let store = store.lock().await;
    assert_eq!(store.status(), SearchStatus::Success);
    assert_eq!(store.query(), "apple");
    assert_eq!(store.total_results(), 3);
    assert_eq!(store.results().len(), 3);
}

/// 検索中は Searching になる
#[tokio::test]
async fn test_status_is_searching_while_pending() {
    let mut session = session(MockSource::sample(), 200);
    session.submit("nike").await.expect("検索開始失敗");
    {
        let store = session.store();
        let store = store.lock().await;
        assert_eq!(store.status(), SearchStatus::Searching);
        // クエリは完了時に反映
        assert_eq!(store.query(), "");
    }
    let outcome = session.wait().await.expect("待機失敗");
    assert_eq!(outcome, Some(SearchOutcome::Committed { total: 3 }));
}

/// 新しい検索で古い検索は置き換えられる
#[tokio::test]
async fn test_newer_search_supersedes_older() {
    let mut session = session(MockSource::sample(), 100);
    let first = session.submit("nike").await.expect("検索開始失敗");
    let second = session.submit("tesla").await.expect("検索開始失敗");
    assert!(second > first);

    let outcome = session.wait().await.expect("待機失敗");
    assert_eq!(outcome, Some(SearchOutcome::Committed { total: 2 }));

    // 古い検索の待ち時間が過ぎても結果は変わらない
    tokio::time::sleep(Duration::from_millis(150)).await;
    let store = session.store();
    let store = store.lock().await;
    assert_eq!(store.query(), "tesla");
    assert!(store.results().iter().all(|r| r.owner == "Tesla, Inc."));
}

/// 検索失敗時はエラー状態になり、前回の結果は残る
#[tokio::test]
async fn test_failed_search_keeps_previous_results() {
    let mut ok_session = session(MockSource::sample(), 5);
    ok_session.run("pixel").await.expect("検索失敗");
    let store = ok_session.store();
    let snapshot_store = store.lock().await.clone();

    let mut failing = SearchSession::new(
        snapshot_store,
        MockSource::failing("Backend unavailable"),
        Duration::from_millis(5),
    );
    let outcome = failing.run("pixel").await.expect("検索失敗");
    assert_eq!(outcome, SearchOutcome::Failed("Search failed: Backend unavailable".to_string()));

    let store = failing.store();
    let store = store.lock().await;
    assert_eq!(store.status(), SearchStatus::Error);
    assert_eq!(store.error(), Some("Search failed: Backend unavailable"));
    assert_eq!(store.results().len(), 1);
}

/// 空白のみのクエリは受け付けない
#[tokio::test]
async fn test_blank_query_rejected() {
    let mut session = session(MockSource::sample(), 5);
    let err = session.submit("   ").await.unwrap_err();
    assert!(matches!(err, SearchAppError::EmptyQuery));
    assert_eq!(session.wait().await.expect("待機失敗"), None);

    let store = session.store();
    assert_eq!(store.lock().await.status(), SearchStatus::Idle);
}
