//! Question list pane: one row per question, cursor-driven selection.

use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use surveyscope_core::{AnalyticsQuestion, ViewStates};

/// Render the question list with the cursor row highlighted.
///
/// Each row shows the question's position, title, type, and the chart
/// kind currently selected for it.
pub fn render_question_list(
    frame: &mut Frame,
    area: Rect,
    questions: &[AnalyticsQuestion],
    selected: usize,
    views: &ViewStates,
    theme: &Theme,
) {
    let items: Vec<ListItem> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let view = views.view(q.question_id);
            let line = Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), theme.muted_style()),
                Span::styled(q.title.clone(), theme.base_style()),
                Span::styled(
                    format!(" ({} · {})", q.question_type.label(), view.chart.label()),
                    theme.muted_style(),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let block = Block::default()
        .title(" Questions ")
        .borders(Borders::ALL)
        .border_style(theme.border_style());

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selection_style())
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    if !questions.is_empty() {
        state.select(Some(selected.min(questions.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
