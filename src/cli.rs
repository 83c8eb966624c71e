use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use trademark_search_common::{FilterKey, FilterValues, RecordStatus, SortKey, SortOrder};

#[derive(Parser)]
#[command(name = "trademark-search")]
#[command(about = "商標データの検索・絞り込み・集計ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 項目別フィルタ
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// オーナー（部分一致）
    #[arg(long)]
    pub owner: Option<String>,

    /// 法律事務所（部分一致）
    #[arg(long)]
    pub law_firm: Option<String>,

    /// 担当弁護士（部分一致）
    #[arg(long)]
    pub attorney: Option<String>,

    /// ステータス (active/pending/abandoned)
    #[arg(long, value_parser = parse_status)]
    pub status: Option<RecordStatus>,
}

fn parse_status(value: &str) -> Result<RecordStatus, String> {
    RecordStatus::parse(value)
        .ok_or_else(|| format!("Unknown status: {} (active/pending/abandoned)", value))
}

impl FilterArgs {
    pub fn is_empty(&self) -> bool {
        self.owner.is_none() && self.law_firm.is_none() && self.attorney.is_none() && self.status.is_none()
    }

    pub fn to_filters(&self) -> FilterValues {
        let mut filters = FilterValues::new();
        let pairs = [
            (FilterKey::Owner, self.owner.as_deref()),
            (FilterKey::LawFirm, self.law_firm.as_deref()),
            (FilterKey::Attorney, self.attorney.as_deref()),
            (FilterKey::Status, self.status.as_ref().map(RecordStatus::as_str)),
        ];
        for (key, value) in pairs {
            if let Some(value) = value {
                filters.set(key, value);
            }
        }
        filters
    }
}

/// 一覧表示の設定
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// 結果の絞り込み（名称・オーナー・事務所・弁護士）
    #[arg(long)]
    pub filter: Option<String>,

    /// 並び替えキー (relevance/filingDate/recent)
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// 並び順 (asc/desc)
    #[arg(long)]
    pub order: Option<SortOrder>,

    /// グラフを表示しない
    #[arg(long)]
    pub no_charts: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 商標を検索して結果を保存・表示
    Search {
        /// 検索キーワード
        #[arg(required = true)]
        query: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        view: ViewArgs,

        /// 検索対象データ（JSON配列）
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// 検索失敗をシミュレート（指定メッセージでエラーにする）
        #[arg(long)]
        simulate_error: Option<String>,
    },

    /// 保存済みの検索結果を表示
    Show {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// 項目別フィルタを設定（指定した内容で置き換え）
    Filter {
        #[command(flatten)]
        filters: FilterArgs,

        /// すべてのフィルタを解除
        #[arg(long, conflicts_with_all = ["owner", "law_firm", "attorney", "status"])]
        clear: bool,
    },

    /// 共有用URLの生成・読み込み
    Url {
        /// 読み込むクエリ文字列（例: "?q=nike&status=active"）
        #[arg(long)]
        decode: Option<String>,

        /// 読み込んだ条件を保存する
        #[arg(long, requires = "decode")]
        apply: bool,

        /// URLのパス
        #[arg(long, default_value = "/search")]
        path: String,
    },

    /// 検索状態を初期化
    Reset,

    /// 設定を表示/編集
    Config {
        /// 検索待ち時間（ミリ秒）を設定
        #[arg(long)]
        set_delay: Option<u64>,

        /// 検索対象データを設定
        #[arg(long)]
        set_data_file: Option<PathBuf>,

        /// 検索対象データの設定を解除（組み込みデータに戻す）
        #[arg(long, conflicts_with = "set_data_file")]
        clear_data_file: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
