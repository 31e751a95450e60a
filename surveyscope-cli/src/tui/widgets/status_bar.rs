//! Bottom status bar: key hints, replaced by transient notices.

use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// A transient message shown instead of the key hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

const KEY_HINTS: &str =
    " ↑/k ↓/j question · t/p/d/c/b chart · l/n sort · e export · PgUp/PgDn scroll · q quit";

/// Render the status bar. A notice takes over the whole line; otherwise
/// the key hints are shown.
pub fn render_status_bar(frame: &mut Frame, area: Rect, notice: Option<&Notice>, theme: &Theme) {
    if area.height < 1 {
        return;
    }

    let line = match notice {
        Some(n) if n.is_error => Line::from(Span::styled(
            format!(" {}", n.text),
            theme.error_style().bg(theme.status_bar_bg),
        )),
        Some(n) => Line::from(Span::styled(
            format!(" {}", n.text),
            theme.success_style().bg(theme.status_bar_bg),
        )),
        None => Line::from(Span::styled(KEY_HINTS, theme.status_bar_style())),
    };

    let paragraph = Paragraph::new(line).style(theme.status_bar_style());
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_content(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_hints_shown_without_notice() {
        let backend = ratatui::backend::TestBackend::new(100, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let theme = Theme::dark();

        terminal
            .draw(|frame| {
                render_status_bar(frame, frame.area(), None, &theme);
            })
            .unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("chart"));
        assert!(content.contains("export"));
    }

    #[test]
    fn test_notice_replaces_hints() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let notice = Notice::info("Exported responses-7.xlsx");
        let theme = Theme::dark();

        terminal
            .draw(|frame| {
                render_status_bar(frame, frame.area(), Some(&notice), &theme);
            })
            .unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Exported responses-7.xlsx"));
        assert!(!content.contains("quit"));
    }

    #[test]
    fn test_error_notice() {
        let notice = Notice::error("Export failed: connection refused");
        assert!(notice.is_error);
        assert!(!Notice::info("ok").is_error);
    }
}
