use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use trademark_search::{cli, config, data, error, report, session};
use trademark_search_common::{
    derive_view, status_view, url, FileStorage, FilterValues, SearchStore, SortSpec,
};
use cli::{Cli, Commands, ViewArgs};
use config::Config;
use error::Result;
use session::{SearchOutcome, SearchSession};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn sort_spec(config: &Config, view: &ViewArgs) -> SortSpec {
    let default = config.default_sort_spec();
    SortSpec::new(
        view.sort.unwrap_or(default.key),
        view.order.unwrap_or(default.order),
    )
}

fn print_view(store: &SearchStore<FileStorage>, config: &Config, view: &ViewArgs) {
    let spec = sort_spec(config, view);
    let input = view.filter.as_deref().unwrap_or("");
    let derived = derive_view(store.results(), input, store.filters(), spec);

    println!("条件: {}", report::render_filters(store.query(), store.filters()));
    println!("総件数: {}\n", store.total_results());
    println!("{}", report::render_results(&derived, spec));

    if !view.no_charts {
        println!("\n{}", report::render_charts(&derived.charts));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let storage = FileStorage::new(config.snapshot_path()?);

    match cli.command {
        Commands::Search { query, filters, view, data: data_file, simulate_error } => {
            println!("🔍 trademark-search - 検索\n");

            let source = match simulate_error {
                Some(message) => trademark_search_common::MockSource::failing(message),
                None => data::load_source(&config, data_file.as_deref())?,
            };

            let mut store = SearchStore::open(storage);
            if !filters.is_empty() {
                store.set_filters(filters.to_filters());
            }

            let mut session = SearchSession::new(store, source, config.search_delay());

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(format!("\"{}\" を検索中...", query.trim()));
            spinner.enable_steady_tick(Duration::from_millis(100));

            let outcome = session.run(&query).await;
            spinner.finish_and_clear();
            let outcome = outcome?;

            let store = session.store();
            let store = store.lock().await;
            let status = status_view(store.status(), store.error(), store.total_results());
            println!("{}\n", report::render_status(&status));

            match outcome {
                SearchOutcome::Committed { .. } => print_view(&store, &config, &view),
                SearchOutcome::Failed(_) => {
                    if !store.results().is_empty() {
                        println!("前回の検索結果:\n");
                        print_view(&store, &config, &view);
                    }
                }
                SearchOutcome::Superseded => println!("検索は新しい検索に置き換えられました"),
            }
        }

        Commands::Show { view } => {
            let store = SearchStore::open(storage);
            if store.results().is_empty() && store.query().is_empty() {
                println!("保存済みの検索結果はありません");
            } else {
                print_view(&store, &config, &view);
            }
        }

        Commands::Filter { filters, clear } => {
            let mut store = SearchStore::open(storage);
            let new_filters = if clear { FilterValues::new() } else { filters.to_filters() };
            store.set_filters(new_filters);
            println!("✔ フィルタを設定: {}", report::render_filters("", store.filters()));
        }

        Commands::Url { decode, apply, path } => {
            let mut store = SearchStore::open(storage);
            match decode {
                Some(search) => {
                    let parsed = url::deserialize(&search);
                    println!("条件: {}", report::render_filters(&parsed.query, &parsed.filters));
                    if apply {
                        store.set_query(parsed.query);
                        store.set_filters(parsed.filters);
                        println!("✔ 検索条件を保存しました");
                    }
                }
                None => {
                    println!("{}", url::location(&path, store.query(), store.filters()));
                }
            }
        }

        Commands::Reset => {
            let mut store = SearchStore::open(storage);
            store.reset();
            println!("✔ 検索状態を初期化しました");
        }

        Commands::Config { set_delay, set_data_file, clear_data_file, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(delay) = set_delay {
                config.search_delay_ms = delay;
                changed = true;
            }
            if let Some(path) = set_data_file {
                // 設定前に読めることを確認
                data::load_records(&path)?;
                config.data_file = Some(path);
                changed = true;
            }
            if clear_data_file {
                config.data_file = None;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  検索待ち時間: {}ms", config.search_delay_ms);
                println!(
                    "  検索対象データ: {}",
                    config
                        .data_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込みデータ".to_string())
                );
                println!("  スナップショット: {}", config.snapshot_path()?.display());
                println!("  並び替え: {} {}", config.default_sort, config.default_order);
            }
        }
    }

    Ok(())
}
