//! Response-summary projector.
//!
//! Pure, synchronous transformations of one question's server-computed
//! aggregate into (a) a sortable table and (b) one of four chart
//! projections. Nothing here touches the network or panics: empty
//! summaries project to an explicit empty/"no data" shape and every
//! percentage short-circuits to 0 when the total is 0.

pub mod sort;
pub mod state;

use crate::types::{OptionSummary, QuestionSummary, ScaleSummary};
use sort::SortState;

pub use state::{ChartKind, QuestionView, ViewStates};

/// One row of the tabular view of a choice summary.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub label: String,
    pub count: u64,
    /// Percentage of the question's respondents, in [0, 100].
    /// Recomputed from counts; exactly 0 when the total is 0.
    pub percent: f64,
}

/// Tabular projection of a choice summary: ordered rows plus the total
/// used for the table's total row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableProjection {
    pub rows: Vec<TableRow>,
    pub total: u64,
}

impl TableProjection {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One slice of a pie or doughnut projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: u64,
    pub percent: f64,
    /// Display label combining count and percentage, e.g. `Yes · 7 (70.00%)`.
    pub legend: String,
}

/// One bar of a column/bar projection.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: u64,
    /// Tooltip text carrying the percentage of total.
    pub tooltip: String,
}

/// Chart input data for one question, ready for a renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartProjection {
    /// Pie or doughnut slices; `hollow` distinguishes the doughnut.
    Slices { slices: Vec<Slice>, hollow: bool },
    /// Column (vertical) or bar (horizontal) chart.
    Bars {
        bars: Vec<BarDatum>,
        horizontal: bool,
    },
    /// Scale distribution: one bar per distinct value, with the average
    /// and valid-response total surfaced as text alongside.
    ScaleBars {
        bars: Vec<BarDatum>,
        avg: f64,
        total: u64,
    },
    /// Nothing to draw: empty summary, or a text summary.
    Empty,
}

/// Percentage of `count` against `total`, guarded against a zero total.
fn percent_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Project a choice summary into its tabular view under a sort state.
///
/// Row order is a pure function of `(options, sort)`; the total row
/// value is the sum of all counts regardless of ordering.
pub fn project_table(options: &[OptionSummary], sort: SortState) -> TableProjection {
    let total: u64 = options.iter().map(|o| o.count).sum();
    let mut ordered: Vec<&OptionSummary> = options.iter().collect();
    ordered.sort_by(|a, b| sort.compare(a, b));

    let rows = ordered
        .into_iter()
        .map(|o| TableRow {
            label: o.label.clone(),
            count: o.count,
            percent: percent_of(o.count, total),
        })
        .collect();

    TableProjection { rows, total }
}

/// Project a question summary into chart input for the requested kind.
///
/// Text summaries and empty summaries always project to
/// [`ChartProjection::Empty`], whatever kind was asked for. Scale
/// summaries ignore the pie/column distinction and always chart their
/// distribution.
pub fn project_chart(summary: &QuestionSummary, kind: ChartKind) -> ChartProjection {
    if summary.is_empty() {
        return ChartProjection::Empty;
    }
    match summary {
        QuestionSummary::Options(options) => match kind {
            ChartKind::Table => ChartProjection::Empty,
            ChartKind::Pie => project_slices(options, false),
            ChartKind::Doughnut => project_slices(options, true),
            ChartKind::Column => project_option_bars(options, false),
            ChartKind::Bar => project_option_bars(options, true),
        },
        QuestionSummary::Scale(scale) => match kind {
            ChartKind::Table => ChartProjection::Empty,
            _ => project_scale_bars(scale),
        },
        QuestionSummary::Texts(_) => ChartProjection::Empty,
    }
}

fn project_slices(options: &[OptionSummary], hollow: bool) -> ChartProjection {
    let total: u64 = options.iter().map(|o| o.count).sum();
    let slices = options
        .iter()
        .map(|o| {
            let percent = percent_of(o.count, total);
            Slice {
                label: o.label.clone(),
                value: o.count,
                percent,
                legend: format!("{} · {} ({:.2}%)", o.label, o.count, percent),
            }
        })
        .collect();
    ChartProjection::Slices { slices, hollow }
}

fn project_option_bars(options: &[OptionSummary], horizontal: bool) -> ChartProjection {
    let total: u64 = options.iter().map(|o| o.count).sum();
    let bars = options
        .iter()
        .map(|o| BarDatum {
            label: o.label.clone(),
            value: o.count,
            tooltip: format!("{:.2}% of {}", percent_of(o.count, total), total),
        })
        .collect();
    ChartProjection::Bars { bars, horizontal }
}

fn project_scale_bars(scale: &ScaleSummary) -> ChartProjection {
    let total = scale.total();
    // The server emits hash-map bucket order; sort by value so the
    // chart axis is stable.
    let mut buckets = scale.distribution.clone();
    buckets.sort_by_key(|b| b.value);
    let bars = buckets
        .iter()
        .map(|b| BarDatum {
            label: b.value.to_string(),
            value: b.count,
            tooltip: format!("{:.2}% of {}", percent_of(b.count, total), total),
        })
        .collect();
    ChartProjection::ScaleBars {
        bars,
        avg: scale.avg.unwrap_or(0.0),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScaleBucket;
    use sort::{SortKey, SortOrder};

    fn opt(index: u32, label: &str, count: u64, ratio: f64) -> OptionSummary {
        OptionSummary {
            option_index: index,
            label: label.into(),
            count,
            ratio,
        }
    }

    fn yes_no() -> Vec<OptionSummary> {
        vec![opt(0, "Yes", 7, 0.7), opt(1, "No", 3, 0.3)]
    }

    #[test]
    fn test_table_total_row_is_count_sum() {
        let table = project_table(&yes_no(), SortState::default());
        assert_eq!(table.total, 10);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows.iter().map(|r| r.count).sum::<u64>(), table.total);
    }

    #[test]
    fn test_table_percent_recomputed_from_counts() {
        // Server ratio deliberately wrong; the table must not echo it.
        let options = vec![opt(0, "A", 1, 0.9), opt(1, "B", 3, 0.1)];
        let table = project_table(&options, SortState::default());
        assert_eq!(table.rows[0].percent, 25.0);
        assert_eq!(table.rows[1].percent, 75.0);
    }

    #[test]
    fn test_table_zero_total_percents_are_zero() {
        let options = vec![opt(0, "A", 0, 0.0), opt(1, "B", 0, 0.0)];
        let table = project_table(&options, SortState::default());
        assert_eq!(table.total, 0);
        for row in &table.rows {
            assert_eq!(row.percent, 0.0);
            assert!(row.percent.is_finite());
        }
    }

    #[test]
    fn test_table_empty_options() {
        let table = project_table(&[], SortState::default());
        assert!(table.is_empty());
        assert_eq!(table.total, 0);
    }

    #[test]
    fn test_table_respects_sort_state() {
        let sort = SortState {
            key: Some(SortKey::Count),
            order: SortOrder::Asc,
        };
        let table = project_table(&yes_no(), sort);
        assert_eq!(table.rows[0].label, "No");
        assert_eq!(table.rows[1].label, "Yes");
    }

    #[test]
    fn test_pie_example_from_contract() {
        let chart = project_chart(&QuestionSummary::Options(yes_no()), ChartKind::Pie);
        let ChartProjection::Slices { slices, hollow } = chart else {
            panic!("expected slices");
        };
        assert!(!hollow);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices.iter().map(|s| s.value).sum::<u64>(), 10);
        assert_eq!(slices[0].percent, 70.0);
        assert_eq!(slices[1].percent, 30.0);
        assert_eq!(slices[0].legend, "Yes · 7 (70.00%)");
        assert_eq!(slices[1].legend, "No · 3 (30.00%)");
    }

    #[test]
    fn test_doughnut_is_hollow() {
        let chart = project_chart(&QuestionSummary::Options(yes_no()), ChartKind::Doughnut);
        assert!(matches!(chart, ChartProjection::Slices { hollow: true, .. }));
    }

    #[test]
    fn test_column_and_bar_orientation() {
        let summary = QuestionSummary::Options(yes_no());
        let column = project_chart(&summary, ChartKind::Column);
        assert!(matches!(
            column,
            ChartProjection::Bars {
                horizontal: false,
                ..
            }
        ));
        let bar = project_chart(&summary, ChartKind::Bar);
        let ChartProjection::Bars { bars, horizontal } = bar else {
            panic!("expected bars");
        };
        assert!(horizontal);
        assert_eq!(bars[0].tooltip, "70.00% of 10");
    }

    #[test]
    fn test_scale_chart_sorted_by_value_with_avg() {
        let summary = QuestionSummary::Scale(ScaleSummary {
            avg: Some(3.8),
            distribution: vec![
                ScaleBucket { value: 5, count: 3 },
                ScaleBucket { value: 3, count: 2 },
            ],
        });
        let chart = project_chart(&summary, ChartKind::Column);
        let ChartProjection::ScaleBars { bars, avg, total } = chart else {
            panic!("expected scale bars");
        };
        assert_eq!(avg, 3.8);
        assert_eq!(total, 5);
        assert_eq!(bars[0].label, "3");
        assert_eq!(bars[1].label, "5");
    }

    #[test]
    fn test_scale_missing_avg_projects_zero() {
        let summary = QuestionSummary::Scale(ScaleSummary {
            avg: None,
            distribution: vec![ScaleBucket { value: 1, count: 1 }],
        });
        let ChartProjection::ScaleBars { avg, .. } = project_chart(&summary, ChartKind::Bar) else {
            panic!("expected scale bars");
        };
        assert_eq!(avg, 0.0);
    }

    #[test]
    fn test_empty_summary_never_draws_a_chart() {
        let empty = QuestionSummary::Options(Vec::new());
        for kind in [
            ChartKind::Table,
            ChartKind::Pie,
            ChartKind::Doughnut,
            ChartKind::Column,
            ChartKind::Bar,
        ] {
            assert_eq!(project_chart(&empty, kind), ChartProjection::Empty);
        }
    }

    #[test]
    fn test_text_summary_never_draws_a_chart() {
        let texts = QuestionSummary::Texts(vec!["an answer".into()]);
        assert_eq!(project_chart(&texts, ChartKind::Pie), ChartProjection::Empty);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_options() -> impl Strategy<Value = Vec<OptionSummary>> {
            prop::collection::vec(("[A-Fa-f]{1,6}", 0u64..10_000), 0..12).prop_map(|raw| {
                raw.into_iter()
                    .enumerate()
                    .map(|(i, (label, count))| OptionSummary {
                        option_index: i as u32,
                        label,
                        count,
                        ratio: 0.0,
                    })
                    .collect()
            })
        }

        proptest! {
            #[test]
            fn table_percents_are_finite_and_total_matches(options in arb_options()) {
                let table = project_table(&options, SortState::default());
                prop_assert_eq!(table.total, options.iter().map(|o| o.count).sum::<u64>());
                for row in &table.rows {
                    prop_assert!(row.percent.is_finite());
                    prop_assert!((0.0..=100.0).contains(&row.percent));
                }
            }

            #[test]
            fn count_sort_reversal_reverses_rows(options in arb_options()) {
                let desc = SortState { key: Some(SortKey::Count), order: SortOrder::Desc };
                let asc = SortState { key: Some(SortKey::Count), order: SortOrder::Asc };
                let down = project_table(&options, desc).rows;
                let mut up = project_table(&options, asc).rows;
                up.reverse();
                prop_assert_eq!(down, up);
            }

            #[test]
            fn sorting_is_idempotent(options in arb_options()) {
                let sort = SortState { key: Some(SortKey::Label), order: SortOrder::Asc };
                let once = project_table(&options, sort);
                let twice = project_table(&options, sort);
                prop_assert_eq!(once, twice);
            }
        }
    }
}
