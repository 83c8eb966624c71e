//! 擬似的な非同期検索
//!
//! 検索ボタン押下 → 状態を `Searching` に → 一定時間待機 → 結果をストアへ反映。
//! 新しい検索を始めると実行中の検索は中断され、仮に完了しても
//! [`SearchTicket`] が古いため反映されない。

use crate::error::{SearchAppError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use trademark_search_common::{MockSource, SearchStore, SearchTicket, SnapshotStorage};

/// 検索1回の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 結果をストアに反映した
    Committed { total: usize },
    /// 失敗をストアに反映した
    Failed(String),
    /// 新しい検索に置き換えられた
    Superseded,
}

pub type SharedStore<S> = Arc<Mutex<SearchStore<S>>>;

/// 検索セッション
pub struct SearchSession<S: SnapshotStorage> {
    store: SharedStore<S>,
    source: Arc<MockSource>,
    delay: Duration,
    in_flight: Option<(SearchTicket, JoinHandle<SearchOutcome>)>,
}

impl<S> SearchSession<S>
where
    S: SnapshotStorage + Send + 'static,
{
    pub fn new(store: SearchStore<S>, source: MockSource, delay: Duration) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            source: Arc::new(source),
            delay,
            in_flight: None,
        }
    }

    pub fn store(&self) -> SharedStore<S> {
        Arc::clone(&self.store)
    }

    /// 検索を開始する
    ///
    /// 空白のみのクエリは受け付けない。実行中の検索は中断する。
    pub async fn submit(&mut self, query: &str) -> Result<SearchTicket> {
        let query = query.trim().to_string();
        if query.is_empty() {
            return Err(SearchAppError::EmptyQuery);
        }

        if let Some((ticket, handle)) = self.in_flight.take() {
            tracing::debug!(ticket = ticket.sequence(), "aborting superseded search");
            handle.abort();
        }

        let ticket = self.store.lock().await.begin_search();
        tracing::debug!(ticket = ticket.sequence(), query = %query, "search started");

        let store = Arc::clone(&self.store);
        let source = Arc::clone(&self.source);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let response = source.search(&query);

            let mut store = store.lock().await;
            if !store.is_current(ticket) {
                return SearchOutcome::Superseded;
            }
            match response {
                Ok(response) => {
                    let total = response.total;
                    store.set_query(query);
                    store.complete_search(ticket, response.results, total);
                    SearchOutcome::Committed { total }
                }
                Err(e) => {
                    let message = e.to_string();
                    store.fail_search(ticket, message.clone());
                    SearchOutcome::Failed(message)
                }
            }
        });

        self.in_flight = Some((ticket, handle));
        Ok(ticket)
    }

    /// 実行中の検索の完了を待つ。なければ `None`
    pub async fn wait(&mut self) -> Result<Option<SearchOutcome>> {
        let Some((_, handle)) = self.in_flight.take() else {
            return Ok(None);
        };

        match handle.await {
            Ok(outcome) => Ok(Some(outcome)),
            Err(e) if e.is_cancelled() => Ok(Some(SearchOutcome::Superseded)),
            Err(e) => Err(SearchAppError::Task(e.to_string())),
        }
    }

    /// 検索して完了まで待つ
    pub async fn run(&mut self, query: &str) -> Result<SearchOutcome> {
        self.submit(query).await?;
        Ok(self.wait().await?.unwrap_or(SearchOutcome::Superseded))
    }
}
