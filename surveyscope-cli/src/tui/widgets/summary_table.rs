//! Tabular view of a question summary.
//!
//! Choice questions render as an OPTION/COUNT/PERCENT table with sort
//! indicators on the active column and a trailing total row. Scale
//! questions render their distribution as a VALUE/COUNT/SHARE table.
//! Empty summaries render a "no data" notice.

use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use surveyscope_core::{
    AnalyticsQuestion, ChartKind, ChartProjection, QuestionSummary, QuestionView, SortKey,
    SortOrder, project_chart, project_table,
};

/// Header text for a sortable column, with an arrow when it is the
/// active sort key.
fn column_header(name: &str, key: SortKey, view: QuestionView) -> String {
    match view.sort.key {
        Some(active) if active == key => {
            let arrow = match view.sort.order {
                SortOrder::Asc => "▲",
                SortOrder::Desc => "▼",
            };
            format!("{} {}", name, arrow)
        }
        _ => name.to_string(),
    }
}

/// Render the table projection for one question.
pub fn render_summary_table(
    frame: &mut Frame,
    area: Rect,
    question: &AnalyticsQuestion,
    view: QuestionView,
    theme: &Theme,
) {
    let block = Block::default()
        .title(format!(" {} ", question.title))
        .borders(Borders::ALL)
        .border_style(theme.border_style());

    match &question.summary {
        QuestionSummary::Options(options) => {
            let projection = project_table(options, view.sort);
            if projection.is_empty() {
                render_no_data(frame, area, block, theme);
                return;
            }

            let header = Row::new(vec![
                Cell::from(column_header("OPTION", SortKey::Label, view)),
                Cell::from(column_header("COUNT", SortKey::Count, view)),
                Cell::from("PERCENT"),
            ])
            .style(theme.accent_style());

            let mut rows: Vec<Row> = projection
                .rows
                .iter()
                .map(|r| {
                    Row::new(vec![
                        Cell::from(r.label.clone()),
                        Cell::from(r.count.to_string()),
                        Cell::from(format!("{:.1}%", r.percent)),
                    ])
                    .style(theme.base_style())
                })
                .collect();
            rows.push(
                Row::new(vec![
                    Cell::from("Total"),
                    Cell::from(projection.total.to_string()),
                    Cell::from(""),
                ])
                .style(theme.muted_style()),
            );

            let table = Table::new(
                rows,
                [
                    Constraint::Min(16),
                    Constraint::Length(8),
                    Constraint::Length(9),
                ],
            )
            .header(header)
            .block(block);

            frame.render_widget(table, area);
        }
        QuestionSummary::Scale(_) => {
            match project_chart(&question.summary, ChartKind::Column) {
                ChartProjection::ScaleBars { bars, avg, total } => {
                    let header = Row::new(vec![
                        Cell::from("VALUE"),
                        Cell::from("COUNT"),
                        Cell::from("SHARE"),
                    ])
                    .style(theme.accent_style());

                    let rows: Vec<Row> = bars
                        .iter()
                        .map(|b| {
                            Row::new(vec![
                                Cell::from(b.label.clone()),
                                Cell::from(b.value.to_string()),
                                Cell::from(b.tooltip.clone()),
                            ])
                            .style(theme.base_style())
                        })
                        .collect();

                    let title = format!(
                        " {} · avg {:.2} over {} responses ",
                        question.title, avg, total
                    );
                    let table = Table::new(
                        rows,
                        [
                            Constraint::Length(7),
                            Constraint::Length(8),
                            Constraint::Min(14),
                        ],
                    )
                    .header(header)
                    .block(
                        Block::default()
                            .title(title)
                            .borders(Borders::ALL)
                            .border_style(theme.border_style()),
                    );

                    frame.render_widget(table, area);
                }
                _ => render_no_data(frame, area, block, theme),
            }
        }
        // Text answers have a dedicated pane, not a table.
        QuestionSummary::Texts(_) => render_no_data(frame, area, block, theme),
    }
}

fn render_no_data(frame: &mut Frame, area: Rect, block: Block, theme: &Theme) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "No data: no responses have been submitted for this question.",
        theme.muted_style(),
    )))
    .block(block);
    frame.render_widget(paragraph, area);
}
