//! 検索対象データの読み込み

use crate::config::Config;
use crate::error::{SearchAppError, Result};
use std::path::Path;
use trademark_search_common::{MockSource, SearchResult};

/// JSON配列の商標データを読み込む
pub fn load_records(path: &Path) -> Result<Vec<SearchResult>> {
    if !path.exists() {
        return Err(SearchAppError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<SearchResult> = serde_json::from_str(&content)
        .map_err(|e| SearchAppError::InvalidData(format!("{}: {}", path.display(), e)))?;

    if let Some(blank) = records.iter().find(|r| r.id.is_empty() || r.name.is_empty()) {
        return Err(SearchAppError::InvalidData(format!(
            "{}: id/name が空のレコードがあります (serialNumber={})",
            path.display(),
            blank.serial_number
        )));
    }

    Ok(records)
}

/// 検索元を作成
///
/// 優先順位: 引数のファイル → 設定のファイル → 組み込みデータ
pub fn load_source(config: &Config, data_file: Option<&Path>) -> Result<MockSource> {
    match data_file.or(config.data_file.as_deref()) {
        Some(path) => {
            let records = load_records(path)?;
            tracing::debug!(count = records.len(), path = %path.display(), "loaded records");
            Ok(MockSource::new(records))
        }
        None => Ok(MockSource::sample()),
    }
}
