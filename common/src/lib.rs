//! Trademark Search Common Library
//!
//! CLIとWeb(WASM)で共有される型と検索パイプライン

pub mod types;
pub mod error;
pub mod filter;
pub mod sort;
pub mod chart;
pub mod url;
pub mod status;
pub mod storage;
pub mod store;
pub mod mock;
pub mod pipeline;

pub use types::{RecordStatus, SearchResult};
pub use error::{Error, Result};
pub use filter::{FilterKey, FilterOption, FilterValues, filter_results};
pub use sort::{SortKey, SortOrder, SortSpec, sort_results};
pub use chart::{ChartData, ChartOutcome, ChartSeries, build_chart_data, prepare_charts};
pub use url::UrlSearch;
pub use status::{SearchStatus, StatusView, status_view};
pub use storage::{MemoryStorage, SnapshotStorage, SNAPSHOT_KEY};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
pub use store::{SearchState, SearchStore, SearchTicket, Snapshot};
pub use mock::{MockSource, SearchResponse};
pub use pipeline::{ResultView, derive_view};
