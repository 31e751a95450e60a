//! Chart renderers for question summaries.
//!
//! Pie and doughnut projections draw as a proportional color band with
//! a per-slice legend; column charts use ratatui's BarChart; bar charts
//! draw horizontal bars with inline counts. Scale distributions use the
//! column renderer with the average surfaced in the title.

use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use surveyscope_core::{AnalyticsQuestion, BarDatum, ChartProjection, Slice, project_chart};

/// Render the chart projection for one question.
pub fn render_chart(
    frame: &mut Frame,
    area: Rect,
    question: &AnalyticsQuestion,
    kind: surveyscope_core::ChartKind,
    theme: &Theme,
) {
    let projection = project_chart(&question.summary, kind);
    let title = format!(" {} · {} ", question.title, kind.label());

    match projection {
        ChartProjection::Slices { slices, hollow } => {
            render_slice_band(frame, area, &title, &slices, hollow, theme);
        }
        ChartProjection::Bars { bars, horizontal } => {
            if horizontal {
                render_horizontal_bars(frame, area, &title, &bars, theme);
            } else {
                render_column_chart(frame, area, &title, &bars, theme);
            }
        }
        ChartProjection::ScaleBars { bars, avg, total } => {
            let title = format!(
                " {} · avg {:.2} over {} responses ",
                question.title, avg, total
            );
            render_column_chart(frame, area, &title, &bars, theme);
        }
        ChartProjection::Empty => {
            let block = Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(theme.border_style());
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "No data: no responses have been submitted for this question.",
                theme.muted_style(),
            )))
            .block(block);
            frame.render_widget(paragraph, area);
        }
    }
}

/// Pie/doughnut rendering: a single proportional band whose colored
/// segments mirror the slice shares, above a legend listing each slice.
/// The doughnut uses hollow legend markers; the geometry is the same.
fn render_slice_band(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    slices: &[Slice],
    hollow: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 1 || inner.width < 2 {
        return;
    }

    let [band_area, legend_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

    // Proportional band: each slice gets a run of cells matching its
    // share of the width; the last slice absorbs rounding leftovers.
    let total: u64 = slices.iter().map(|s| s.value).sum();
    let width = band_area.width as usize;
    let mut spans = Vec::with_capacity(slices.len());
    let mut used = 0usize;
    for (i, slice) in slices.iter().enumerate() {
        let cells = if total == 0 {
            0
        } else if i == slices.len() - 1 {
            width.saturating_sub(used)
        } else {
            (slice.value as f64 / total as f64 * width as f64).round() as usize
        };
        used += cells;
        spans.push(Span::styled(
            " ".repeat(cells),
            Style::default().bg(theme.series_color(i)),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), band_area);

    let marker = if hollow { "○" } else { "●" };
    let legend: Vec<Line> = slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", marker),
                    Style::default().fg(theme.series_color(i)),
                ),
                Span::styled(slice.legend.clone(), theme.base_style()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(legend), legend_area);
}

fn render_column_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    bars: &[BarDatum],
    theme: &Theme,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(theme.border_style());

    let chart_bars: Vec<Bar> = bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            Bar::default()
                .label(Line::from(b.label.clone()))
                .value(b.value)
                .style(Style::default().fg(theme.series_color(i)))
                .value_style(theme.base_style())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(7)
        .bar_gap(1)
        .data(BarGroup::default().bars(&chart_bars));

    frame.render_widget(chart, area);
}

/// Horizontal bars: one line per option, label column then a filled bar
/// scaled against the largest count, with count and share inline.
fn render_horizontal_bars(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    bars: &[BarDatum],
    theme: &Theme,
) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max = bars.iter().map(|b| b.value).max().unwrap_or(0);
    let label_width = bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0)
        .min(20);
    let bar_budget = (inner.width as usize).saturating_sub(label_width + 16).max(4);

    let lines: Vec<Line> = bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let filled = if max == 0 {
                0
            } else {
                ((b.value as f64 / max as f64) * bar_budget as f64).round() as usize
            };
            let label: String = b.label.chars().take(label_width).collect();
            Line::from(vec![
                Span::styled(format!("{:>width$} ", label, width = label_width), theme.base_style()),
                Span::styled(
                    "█".repeat(filled.max(usize::from(b.value > 0))),
                    Style::default().fg(theme.series_color(i)),
                ),
                Span::styled(format!(" {} ({})", b.value, b.tooltip), theme.muted_style()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
