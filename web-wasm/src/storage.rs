//! localStorage へのスナップショット保存

use gloo::storage::{LocalStorage, Storage};
use trademark_search_common::{Error, Result, SnapshotStorage, SNAPSHOT_KEY};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSnapshotStorage;

fn storage_error(e: wasm_bindgen::JsValue) -> Error {
    Error::Storage(format!("{:?}", e))
}

impl SnapshotStorage for LocalSnapshotStorage {
    fn load(&self) -> Result<Option<String>> {
        LocalStorage::raw().get_item(SNAPSHOT_KEY).map_err(storage_error)
    }

    fn save(&mut self, content: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(SNAPSHOT_KEY, content)
            .map_err(storage_error)
    }

    fn clear(&mut self) -> Result<()> {
        LocalStorage::raw().remove_item(SNAPSHOT_KEY).map_err(storage_error)
    }
}
