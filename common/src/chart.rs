//! グラフ用データの集計
//!
//! 絞り込み・並び替え後の結果から3種類の系列を作る:
//! - ステータス別件数（初出順）
//! - オーナー別件数（上位5件）
//! - 出願日の月別推移

use crate::error::{Error, Result};
use crate::types::SearchResult;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// オーナー別グラフの表示件数
pub const TOP_OWNER_LIMIT: usize = 5;

/// 集計失敗時に表示するメッセージ
pub const GRAPH_ERROR_MESSAGE: &str = "Error preparing graph data";

/// 1系列分のグラフデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub data: Vec<usize>,
}

impl ChartSeries {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            labels: Vec::new(),
            data: Vec::new(),
        }
    }

    /// ラベルに加算（なければ末尾に追加）
    fn bump(&mut self, label: &str) {
        match self.labels.iter().position(|l| l == label) {
            Some(i) => self.data[i] += 1,
            None => {
                self.labels.push(label.to_string());
                self.data.push(1);
            }
        }
    }

    pub fn total(&self) -> usize {
        self.data.iter().sum()
    }

    pub fn max(&self) -> usize {
        self.data.iter().copied().max().unwrap_or(0)
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, usize)> {
        self.labels.iter().map(String::as_str).zip(self.data.iter().copied())
    }
}

/// 3種類のグラフデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub status: ChartSeries,
    pub owners: ChartSeries,
    pub timeline: ChartSeries,
}

/// 集計結果
///
/// 描画側へはエラーを伝播させず、この値で状態を渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    /// 結果0件
    NoData,
    Ready(ChartData),
    /// 集計に失敗（一覧表示には影響しない）
    Failed(String),
}

impl ChartOutcome {
    pub fn data(&self) -> Option<&ChartData> {
        match self {
            ChartOutcome::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ChartOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// ステータス別件数
pub fn status_distribution(results: &[SearchResult]) -> ChartSeries {
    let mut series = ChartSeries::new("Trademarks by Status");
    for result in results {
        series.bump(result.status.label());
    }
    series
}

/// オーナー別件数（上位 `limit` 件）
///
/// 件数が同じ場合は先に出現したオーナーを優先する。
pub fn top_owners(results: &[SearchResult], limit: usize) -> ChartSeries {
    let mut counts = ChartSeries::new(&format!("Trademarks by Owner (Top {})", limit));
    for result in results {
        counts.bump(&result.owner);
    }

    let mut ranked: Vec<(String, usize)> = counts.labels.into_iter().zip(counts.data).collect();
    // 安定ソートなので同数は初出順のまま
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);

    let (labels, data) = ranked.into_iter().unzip();
    ChartSeries {
        title: counts.title,
        labels,
        data,
    }
}

/// 月ラベル（例: "Jan 2024"）
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// 出願日の月別推移
///
/// 出願日を時系列に並べ、月ごとに件数をまとめる。
/// パースできない日付が1件でもあればエラー。
pub fn filing_timeline(results: &[SearchResult]) -> Result<ChartSeries> {
    let mut days = results
        .iter()
        .map(|r| {
            r.filing_day().ok_or_else(|| Error::InvalidFilingDate {
                id: r.id.clone(),
                value: r.filing_date.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    days.sort();

    let mut series = ChartSeries::new("Trademarks Filed Over Time");
    let mut last_bucket: Option<(i32, u32)> = None;
    for day in days {
        let bucket = (day.year(), day.month());
        if last_bucket == Some(bucket) {
            if let Some(count) = series.data.last_mut() {
                *count += 1;
            }
        } else {
            series.labels.push(month_label(day));
            series.data.push(1);
            last_bucket = Some(bucket);
        }
    }
    Ok(series)
}

/// グラフデータを作成。0件なら `None`
pub fn build_chart_data(results: &[SearchResult]) -> Result<Option<ChartData>> {
    if results.is_empty() {
        return Ok(None);
    }

    Ok(Some(ChartData {
        status: status_distribution(results),
        owners: top_owners(results, TOP_OWNER_LIMIT),
        timeline: filing_timeline(results)?,
    }))
}

/// グラフデータを作成し、失敗を `ChartOutcome::Failed` に変換する
pub fn prepare_charts(results: &[SearchResult]) -> ChartOutcome {
    match build_chart_data(results) {
        Ok(Some(data)) => ChartOutcome::Ready(data),
        Ok(None) => ChartOutcome::NoData,
        Err(e) => {
            tracing::warn!(error = %e, "graph data error");
            ChartOutcome::Failed(GRAPH_ERROR_MESSAGE.to_string())
        }
    }
}
