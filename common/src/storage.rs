//! スナップショットの保存先
//!
//! ブラウザでは localStorage、CLIではJSONファイル、テストではメモリを使う。

use crate::error::Result;

/// スナップショットを保存するキー名
pub const SNAPSHOT_KEY: &str = "trademark-search";

/// キー・値形式のスナップショット保存先
pub trait SnapshotStorage {
    /// 保存済みの内容。未保存なら `None`
    fn load(&self) -> Result<Option<String>>;

    fn save(&mut self, content: &str) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

/// メモリ上の保存先
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    content: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.content.clone())
    }

    fn save(&mut self, content: &str) -> Result<()> {
        self.content = Some(content.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.content = None;
        Ok(())
    }
}

/// JSONファイルの保存先（非WASM環境のみ）
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SnapshotStorage for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn save(&mut self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
