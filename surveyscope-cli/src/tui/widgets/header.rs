//! Top header bar: survey title, status, and question count.

use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data rendered in the header bar.
#[derive(Debug, Clone, Default)]
pub struct HeaderData {
    pub survey_title: String,
    pub status_label: String,
    pub question_count: usize,
}

/// Render the single-line header bar.
pub fn render_header(frame: &mut Frame, area: Rect, data: &HeaderData, theme: &Theme) {
    if area.height < 1 {
        return;
    }

    let line = Line::from(vec![
        Span::styled(format!(" {} ", data.survey_title), theme.header_style()),
        Span::styled(
            format!("[{}] ", data.status_label),
            theme.muted_style().bg(theme.header_bg),
        ),
        Span::styled(
            format!("· {} questions ", data.question_count),
            theme.muted_style().bg(theme.header_bg),
        ),
    ]);

    let paragraph = Paragraph::new(line).style(theme.header_style());
    frame.render_widget(paragraph, area);
}
