use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchAppError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("データファイルが不正: {0}")]
    InvalidData(String),

    #[error("検索クエリが空です")]
    EmptyQuery,

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Common(#[from] trademark_search_common::Error),

    #[error("検索タスクエラー: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, SearchAppError>;
