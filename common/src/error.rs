//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid filing date '{value}' (record {id})")]
    InvalidFilingDate { id: String, value: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Search failed: {0}")]
    Search(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_invalid_filing_date() {
        let error = Error::InvalidFilingDate {
            id: "tm-7".to_string(),
            value: "not-a-date".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid filing date 'not-a-date' (record tm-7)"
        );
    }

    #[test]
    fn test_error_display_storage() {
        let error = Error::Storage("localStorage unavailable".to_string());
        assert_eq!(format!("{}", error), "Storage error: localStorage unavailable");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
