//! trademark-search CLI
//!
//! 共通ライブラリの検索パイプラインを端末から使う。

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod session;
