//! 検索のライフサイクル状態と表示文言

use serde::{Deserialize, Serialize};

/// 検索の状態
///
/// `Idle → Searching → Success | Error`、`Success`/`Error` からは次の検索で
/// `Searching` に戻る。`reset` でどの状態からも `Idle`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    #[default]
    Idle,
    Searching,
    Success,
    Error,
}

impl SearchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStatus::Idle => "idle",
            SearchStatus::Searching => "searching",
            SearchStatus::Success => "success",
            SearchStatus::Error => "error",
        }
    }

    /// 通常の遷移かどうか（`Idle` への遷移は reset 扱いで常に可）
    pub fn can_transition_to(&self, next: SearchStatus) -> bool {
        matches!(
            (self, next),
            (_, SearchStatus::Idle)
                | (SearchStatus::Idle, SearchStatus::Searching)
                | (SearchStatus::Success, SearchStatus::Searching)
                | (SearchStatus::Error, SearchStatus::Searching)
                | (SearchStatus::Searching, SearchStatus::Searching)
                | (SearchStatus::Searching, SearchStatus::Success)
                | (SearchStatus::Searching, SearchStatus::Error)
        )
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, SearchStatus::Searching)
    }
}

/// ステータス表示（タイトルとメッセージ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub title: &'static str,
    pub message: String,
}

const DEFAULT_ERROR_MESSAGE: &str = "An error occurred while searching. Please try again.";

/// 状態に応じた表示文言
pub fn status_view(status: SearchStatus, error: Option<&str>, results_count: usize) -> StatusView {
    match status {
        SearchStatus::Idle => StatusView {
            title: "Ready to Search",
            message: "Enter your search query to begin.".to_string(),
        },
        SearchStatus::Searching => StatusView {
            title: "Searching...",
            message: "Please wait while we find matching trademarks.".to_string(),
        },
        SearchStatus::Success => StatusView {
            title: "Search Complete",
            message: match results_count {
                0 => "No results found. Try adjusting your search criteria.".to_string(),
                1 => "Found 1 matching trademark.".to_string(),
                n => format!("Found {} matching trademarks.", n),
            },
        },
        SearchStatus::Error => StatusView {
            title: "Error Occurred",
            message: error
                .filter(|e| !e.is_empty())
                .unwrap_or(DEFAULT_ERROR_MESSAGE)
                .to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        use SearchStatus::*;
        assert!(Idle.can_transition_to(Searching));
        assert!(Searching.can_transition_to(Success));
        assert!(Searching.can_transition_to(Error));
        assert!(Success.can_transition_to(Searching));
        assert!(Error.can_transition_to(Searching));
        assert!(Success.can_transition_to(Idle));

        assert!(!Idle.can_transition_to(Success));
        assert!(!Success.can_transition_to(Error));
    }

    #[test]
    fn test_status_view_success_pluralization() {
        assert_eq!(
            status_view(SearchStatus::Success, None, 0).message,
            "No results found. Try adjusting your search criteria."
        );
        assert_eq!(status_view(SearchStatus::Success, None, 1).message, "Found 1 matching trademark.");
        assert_eq!(status_view(SearchStatus::Success, None, 12).message, "Found 12 matching trademarks.");
    }

    #[test]
    fn test_status_view_error_message() {
        let view = status_view(SearchStatus::Error, Some("Backend unavailable"), 0);
        assert_eq!(view.title, "Error Occurred");
        assert_eq!(view.message, "Backend unavailable");

        let view = status_view(SearchStatus::Error, None, 0);
        assert_eq!(view.message, DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&SearchStatus::Searching).expect("シリアライズ失敗");
        assert_eq!(json, "\"searching\"");
    }
}
