//! Scrollable list of free-text answers.

use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Render free-text answers as a scrollable bulleted list, capped at
/// `limit` entries with an overflow note.
pub fn render_text_answers(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    answers: &[String],
    scroll: u16,
    limit: usize,
    theme: &Theme,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(theme.border_style());

    if answers.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No data: no responses have been submitted for this question.",
            theme.muted_style(),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let mut lines: Vec<Line> = answers
        .iter()
        .take(limit)
        .map(|answer| {
            let shown = if answer.is_empty() { "—" } else { answer };
            Line::from(vec![
                Span::styled("• ", theme.muted_style()),
                Span::styled(shown.to_string(), theme.base_style()),
            ])
        })
        .collect();
    if answers.len() > limit {
        lines.push(Line::from(Span::styled(
            format!("… {} answers in total", answers.len()),
            theme.muted_style(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
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
    fn test_render_answers() {
        let backend = ratatui::backend::TestBackend::new(60, 8);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let answers = vec!["Great course".to_string(), "More labs please".to_string()];
        let theme = Theme::dark();

        terminal
            .draw(|frame| {
                render_text_answers(frame, frame.area(), "Comments", &answers, 0, 50, &theme);
            })
            .unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Great course"));
        assert!(content.contains("More labs please"));
    }

    #[test]
    fn test_overflow_note_past_limit() {
        let backend = ratatui::backend::TestBackend::new(60, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let answers: Vec<String> = (0..5).map(|i| format!("answer {}", i)).collect();
        let theme = Theme::dark();

        terminal
            .draw(|frame| {
                render_text_answers(frame, frame.area(), "Comments", &answers, 0, 3, &theme);
            })
            .unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("5 answers in total"));
        assert!(!content.contains("answer 4"));
    }

    #[test]
    fn test_empty_answer_shows_placeholder() {
        let backend = ratatui::backend::TestBackend::new(40, 6);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let answers = vec![String::new()];
        let theme = Theme::dark();

        terminal
            .draw(|frame| {
                render_text_answers(frame, frame.area(), "Comments", &answers, 0, 50, &theme);
            })
            .unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("—"));
    }

    #[test]
    fn test_no_answers_shows_no_data() {
        let backend = ratatui::backend::TestBackend::new(70, 5);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let theme = Theme::dark();

        terminal
            .draw(|frame| {
                render_text_answers(frame, frame.area(), "Comments", &[], 0, 50, &theme);
            })
            .unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("No data"));
    }
}
