//! 検索状態ストア
//!
//! クエリ・フィルタ・検索結果・ライフサイクル状態を1か所で保持する。
//! 変更はセッターからのみ行い、`{query, filters, results, totalResults}` を
//! スナップショットとして保存先へ書き出す。status と error は保存しない
//! （再読込で「検索中」「エラー」が復活しないように）。
//!
//! 擬似的な非同期検索は [`SearchTicket`] で識別し、最後に発行した検索の
//! 結果だけを反映する。

use crate::filter::FilterValues;
use crate::status::SearchStatus;
use crate::storage::SnapshotStorage;
use crate::types::SearchResult;
use serde::{Deserialize, Serialize};

/// スナップショット形式のバージョン
pub const SNAPSHOT_VERSION: u32 = 0;

/// 検索状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub filters: FilterValues,
    pub results: Vec<SearchResult>,
    pub status: SearchStatus,
    pub total_results: usize,
    pub error: Option<String>,
}

/// 保存対象の状態
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub query: String,
    pub filters: FilterValues,
    pub results: Vec<SearchResult>,
    pub total_results: usize,
}

/// 保存形式 `{ "state": {...}, "version": 0 }`
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEnvelope {
    #[serde(default)]
    state: Snapshot,
    #[serde(default)]
    version: u32,
}

impl Snapshot {
    pub fn to_json(&self) -> crate::Result<String> {
        let envelope = SnapshotEnvelope {
            state: self.clone(),
            version: SNAPSHOT_VERSION,
        };
        Ok(serde_json::to_string(&envelope)?)
    }

    /// 保存内容を読み込む。バージョン不一致は `None`
    pub fn from_json(content: &str) -> crate::Result<Option<Self>> {
        let envelope: SnapshotEnvelope = serde_json::from_str(content)?;
        if envelope.version != SNAPSHOT_VERSION {
            return Ok(None);
        }
        Ok(Some(envelope.state))
    }
}

/// 発行済みの検索を識別する番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// 検索状態ストア
#[derive(Debug, Clone)]
pub struct SearchStore<S: SnapshotStorage> {
    state: SearchState,
    storage: S,
    last_ticket: u64,
}

impl<S: SnapshotStorage> SearchStore<S> {
    /// 保存先からスナップショットを復元して開く
    ///
    /// 読めない・壊れている・バージョンが違う場合は初期状態で開始する。
    pub fn open(storage: S) -> Self {
        let snapshot = match storage.load() {
            Ok(Some(content)) => match Snapshot::from_json(&content) {
                Ok(Some(snapshot)) => snapshot,
                Ok(None) => {
                    tracing::warn!("snapshot version mismatch, starting fresh");
                    Snapshot::default()
                }
                Err(e) => {
                    tracing::warn!(error = %e, "snapshot is corrupt, starting fresh");
                    Snapshot::default()
                }
            },
            Ok(None) => Snapshot::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read snapshot");
                Snapshot::default()
            }
        };

        Self {
            state: SearchState {
                query: snapshot.query,
                filters: snapshot.filters,
                results: snapshot.results,
                total_results: snapshot.total_results,
                status: SearchStatus::Idle,
                error: None,
            },
            storage,
            last_ticket: 0,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn filters(&self) -> &FilterValues {
        &self.state.filters
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.state.results
    }

    pub fn status(&self) -> SearchStatus {
        self.state.status
    }

    pub fn total_results(&self) -> usize {
        self.state.total_results
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            query: self.state.query.clone(),
            filters: self.state.filters.clone(),
            results: self.state.results.clone(),
            total_results: self.state.total_results,
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.persist();
    }

    /// フィルタを丸ごと置き換える（マージしない）
    pub fn set_filters(&mut self, filters: FilterValues) {
        self.state.filters = filters;
        self.persist();
    }

    /// 検索結果と総件数を同時に置き換える
    pub fn set_results(&mut self, results: Vec<SearchResult>, total: usize) {
        self.state.results = results;
        self.state.total_results = total;
        self.persist();
    }

    /// 状態を変更。error は `Error` のときだけ保持する
    pub fn set_status(&mut self, status: SearchStatus, error: Option<String>) {
        if !self.state.status.can_transition_to(status) {
            tracing::debug!(from = self.state.status.as_str(), to = status.as_str(), "unusual status transition");
        }
        self.state.status = status;
        self.state.error = match status {
            SearchStatus::Error => error,
            _ => None,
        };
    }

    /// 初期状態に戻し、保存内容を削除する
    ///
    /// 実行中の検索はすべて無効になる。次の変更で改めて保存される。
    pub fn reset(&mut self) {
        self.state = SearchState::default();
        self.last_ticket += 1;
        if let Err(e) = self.storage.clear() {
            tracing::warn!(error = %e, "failed to clear search snapshot");
        }
    }

    /// 新しい検索を開始（状態を `Searching` に）
    pub fn begin_search(&mut self) -> SearchTicket {
        self.last_ticket += 1;
        self.set_status(SearchStatus::Searching, None);
        SearchTicket(self.last_ticket)
    }

    /// 最後に発行した検索かどうか
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.last_ticket
    }

    /// 検索結果を反映。古い検索の結果なら何もせず `false`
    pub fn complete_search(&mut self, ticket: SearchTicket, results: Vec<SearchResult>, total: usize) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, latest = self.last_ticket, "discarding stale search results");
            return false;
        }
        self.set_results(results, total);
        self.set_status(SearchStatus::Success, None);
        true
    }

    /// 検索失敗を反映。前回の結果は残す
    pub fn fail_search(&mut self, ticket: SearchTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, latest = self.last_ticket, "discarding stale search failure");
            return false;
        }
        self.set_status(SearchStatus::Error, Some(message.into()));
        true
    }

    /// スナップショットを保存先へ書き出す
    ///
    /// 保存に失敗しても状態の変更は有効なまま（警告のみ）。
    fn persist(&mut self) {
        let result = self
            .snapshot()
            .to_json()
            .and_then(|json| self.storage.save(&json));
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to persist search snapshot");
        }
    }
}
