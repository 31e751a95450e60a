//! Terminal event handling using crossterm EventStream.

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures::StreamExt;
use surveyscope_core::ChartKind;

/// High-level actions the analytics TUI can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextQuestion,
    PrevQuestion,
    /// Chart selection for the question under the cursor only.
    SelectChart(ChartKind),
    SortByLabel,
    SortByCount,
    Export,
    ScrollUp,
    ScrollDown,
}

/// Reads terminal events asynchronously using crossterm's EventStream.
pub struct EventHandler {
    stream: EventStream,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            stream: EventStream::new(),
        }
    }

    /// Read the next terminal event. Returns None if the stream ends.
    pub async fn next(&mut self) -> Option<Event> {
        self.stream.next().await.and_then(|r| r.ok())
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a key event to an Action. Returns None for keys with no binding.
pub fn map_key(event: &KeyEvent) -> Option<Action> {
    if event.modifiers == KeyModifiers::CONTROL && event.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::NextQuestion),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::PrevQuestion),
        KeyCode::Char('t') => Some(Action::SelectChart(ChartKind::Table)),
        KeyCode::Char('p') => Some(Action::SelectChart(ChartKind::Pie)),
        KeyCode::Char('d') => Some(Action::SelectChart(ChartKind::Doughnut)),
        KeyCode::Char('c') => Some(Action::SelectChart(ChartKind::Column)),
        KeyCode::Char('b') => Some(Action::SelectChart(ChartKind::Bar)),
        KeyCode::Char('l') => Some(Action::SortByLabel),
        KeyCode::Char('n') => Some(Action::SortByCount),
        KeyCode::Char('e') => Some(Action::Export),
        KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::PageDown => Some(Action::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_quits() {
        assert_eq!(map_key(&key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(&key(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&event), Some(Action::Quit));
    }

    #[test]
    fn test_plain_c_selects_column_chart() {
        assert_eq!(
            map_key(&key(KeyCode::Char('c'))),
            Some(Action::SelectChart(ChartKind::Column))
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(&key(KeyCode::Down)), Some(Action::NextQuestion));
        assert_eq!(map_key(&key(KeyCode::Char('j'))), Some(Action::NextQuestion));
        assert_eq!(map_key(&key(KeyCode::Up)), Some(Action::PrevQuestion));
        assert_eq!(map_key(&key(KeyCode::Char('k'))), Some(Action::PrevQuestion));
    }

    #[test]
    fn test_chart_selection_keys() {
        assert_eq!(
            map_key(&key(KeyCode::Char('p'))),
            Some(Action::SelectChart(ChartKind::Pie))
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('d'))),
            Some(Action::SelectChart(ChartKind::Doughnut))
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('b'))),
            Some(Action::SelectChart(ChartKind::Bar))
        );
        assert_eq!(
            map_key(&key(KeyCode::Char('t'))),
            Some(Action::SelectChart(ChartKind::Table))
        );
    }

    #[test]
    fn test_sort_and_export_keys() {
        assert_eq!(map_key(&key(KeyCode::Char('l'))), Some(Action::SortByLabel));
        assert_eq!(map_key(&key(KeyCode::Char('n'))), Some(Action::SortByCount));
        assert_eq!(map_key(&key(KeyCode::Char('e'))), Some(Action::Export));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(map_key(&key(KeyCode::Char('z'))), None);
    }
}
