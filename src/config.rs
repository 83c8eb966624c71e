use crate::error::{SearchAppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trademark_search_common::{SortKey, SortOrder, SortSpec, SNAPSHOT_KEY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 擬似的な検索待ち時間（ミリ秒）
    pub search_delay_ms: u64,
    /// 検索対象データ（JSON配列）。未指定なら組み込みデータ
    pub data_file: Option<PathBuf>,
    /// スナップショットの保存先
    pub snapshot_path: Option<PathBuf>,
    pub default_sort: SortKey,
    pub default_order: SortOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_delay_ms: 500,
            data_file: None,
            snapshot_path: None,
            default_sort: SortKey::Relevance,
            default_order: SortOrder::Desc,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SearchAppError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("trademark-search"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// スナップショットの保存先（未設定なら設定ディレクトリ内）
    pub fn snapshot_path(&self) -> Result<PathBuf> {
        match &self.snapshot_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(format!("{}.json", SNAPSHOT_KEY))),
        }
    }

    pub fn search_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.search_delay_ms)
    }

    pub fn default_sort_spec(&self) -> SortSpec {
        SortSpec::new(self.default_sort, self.default_order)
    }
}
