//! 検索結果レコードの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - RecordStatus: 商標ステータス（active/pending/abandoned）
//! - SearchResult: 検索結果1件

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// 商標ステータス
///
/// 想定外の値は `Unknown` として受け入れ、集計側で落ちないようにする。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Pending,
    Abandoned,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RecordStatus {
    /// フィルタ・URLで使う値
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Pending => "pending",
            RecordStatus::Abandoned => "abandoned",
            RecordStatus::Unknown => "unknown",
        }
    }

    /// 表示用ラベル（先頭大文字）
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Pending => "Pending",
            RecordStatus::Abandoned => "Abandoned",
            RecordStatus::Unknown => "Unknown",
        }
    }

    /// フィルタで選択できるステータス
    pub fn known() -> [RecordStatus; 3] {
        [RecordStatus::Active, RecordStatus::Pending, RecordStatus::Abandoned]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::known().into_iter().find(|s| s.as_str() == value)
    }
}

/// 検索結果（商標1件）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub status: RecordStatus,
    /// 出願日（ISO形式 "2024-01-10"）
    pub filing_date: String,
    pub serial_number: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub law_firm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attorney: Option<String>,
}

impl SearchResult {
    /// 出願日をパース
    ///
    /// "2024-01-10" のほか RFC3339 ("2024-01-10T09:00:00Z") も受け付ける。
    /// 日付部分は記録された暦日をそのまま使う（UTC変換しない）。
    pub fn filing_day(&self) -> Option<NaiveDate> {
        parse_filing_date(&self.filing_date)
    }
}

pub fn parse_filing_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}
