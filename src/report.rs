//! 端末向けの結果表示

use trademark_search_common::{
    ChartOutcome, ChartSeries, FilterValues, ResultView, SearchResult, SortSpec, StatusView,
};

/// グラフの最大バー幅（文字数）
const BAR_WIDTH: usize = 30;

pub fn render_status(view: &StatusView) -> String {
    format!("{}\n  {}", view.title, view.message)
}

pub fn render_filters(query: &str, filters: &FilterValues) -> String {
    let mut parts = Vec::new();
    if !query.is_empty() {
        parts.push(format!("q=\"{}\"", query));
    }
    for (key, value) in filters.iter() {
        parts.push(format!("{}=\"{}\"", key.label(), value));
    }
    if parts.is_empty() {
        "(条件なし)".to_string()
    } else {
        parts.join(", ")
    }
}

fn render_record(index: usize, record: &SearchResult) -> String {
    let mut lines = vec![format!(
        "{:>3}. {} [{}]  #{}",
        index + 1,
        record.name,
        record.status.label(),
        record.serial_number
    )];
    lines.push(format!("     Owner: {}  Filed: {}", record.owner, record.filing_date));
    match (&record.law_firm, &record.attorney) {
        (Some(firm), Some(attorney)) => lines.push(format!("     Law Firm: {}  Attorney: {}", firm, attorney)),
        (Some(firm), None) => lines.push(format!("     Law Firm: {}", firm)),
        (None, Some(attorney)) => lines.push(format!("     Attorney: {}", attorney)),
        (None, None) => {}
    }
    if !record.description.is_empty() {
        lines.push(format!("     {}", record.description));
    }
    lines.join("\n")
}

pub fn render_results(view: &ResultView, sort_spec: SortSpec) -> String {
    if view.is_empty() {
        return "該当する商標はありません".to_string();
    }

    let mut out = format!(
        "{}件 (並び順: {} {})\n",
        view.len(),
        sort_spec.key.label(),
        sort_spec.order
    );
    let records: Vec<String> = view
        .items
        .iter()
        .enumerate()
        .map(|(i, r)| render_record(i, r))
        .collect();
    out.push_str(&records.join("\n"));
    out
}

/// 横棒グラフ
pub fn render_chart(series: &ChartSeries) -> String {
    let max = series.max().max(1);
    let label_width = series.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = format!("■ {}\n", series.title);
    for (label, count) in series.points() {
        let bar = (count * BAR_WIDTH).div_ceil(max);
        out.push_str(&format!(
            "  {:<width$} │{} {}\n",
            label,
            "█".repeat(bar),
            count,
            width = label_width
        ));
    }
    out
}

pub fn render_charts(outcome: &ChartOutcome) -> String {
    match outcome {
        ChartOutcome::NoData => "グラフ: データなし".to_string(),
        ChartOutcome::Failed(message) => format!("グラフ: {}", message),
        ChartOutcome::Ready(data) => [&data.status, &data.owners, &data.timeline]
            .into_iter()
            .map(render_chart)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trademark_search_common::FilterKey;

    #[test]
    fn test_render_filters() {
        assert_eq!(render_filters("", &FilterValues::new()), "(条件なし)");
        let filters = FilterValues::new().with(FilterKey::LawFirm, "Baker");
        assert_eq!(render_filters("nike", &filters), "q=\"nike\", Law Firm=\"Baker\"");
    }

    #[test]
    fn test_render_chart_scales_bars() {
        let series = ChartSeries {
            title: "Trademarks by Status".to_string(),
            labels: vec!["Active".to_string(), "Pending".to_string()],
            data: vec![4, 2],
        };
        let text = render_chart(&series);
        assert!(text.starts_with("■ Trademarks by Status"));
        assert!(text.contains(&format!("│{} 4", "█".repeat(BAR_WIDTH))));
        assert!(text.contains(&format!("│{} 2", "█".repeat(BAR_WIDTH / 2))));
    }

    #[test]
    fn test_render_charts_failed() {
        let outcome = ChartOutcome::Failed("Error preparing graph data".to_string());
        assert_eq!(render_charts(&outcome), "グラフ: Error preparing graph data");
    }
}
