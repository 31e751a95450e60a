//! Main TUI application: state, event loop, and top-level draw function.

use crate::tui::event::{Action, EventHandler, map_key};
use crate::tui::theme::Theme;
use crate::tui::widgets::chart::render_chart;
use crate::tui::widgets::header::{HeaderData, render_header};
use crate::tui::widgets::question_list::render_question_list;
use crate::tui::widgets::status_bar::{Notice, render_status_bar};
use crate::tui::widgets::summary_table::render_summary_table;
use crate::tui::widgets::text_answers::render_text_answers;
use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use std::path::PathBuf;
use surveyscope_core::{
    AnalyticsReport, AppConfig, ChartKind, QuestionSummary, SortKey, SurveyClient, SurveyDetail,
    ViewStates, export_filename,
};
use tokio::sync::mpsc;

/// Outcome of a background export task, reported to the event loop.
#[derive(Debug)]
enum ExportOutcome {
    Done { path: PathBuf, bytes: usize },
    Failed { message: String },
}

/// The analytics browser application state.
pub struct App {
    pub theme: Theme,
    pub survey: SurveyDetail,
    pub report: AnalyticsReport,
    pub views: ViewStates,
    /// Index of the question under the cursor.
    pub selected: usize,
    /// Scroll offset for the text-answer pane.
    pub scroll: u16,
    pub notice: Option<Notice>,
    pub should_quit: bool,

    text_answer_limit: usize,
    export_dir: PathBuf,

    client: SurveyClient,
    export_tx: mpsc::UnboundedSender<ExportOutcome>,
    export_rx: mpsc::UnboundedReceiver<ExportOutcome>,
    export_in_flight: bool,
}

impl App {
    pub fn new(
        config: AppConfig,
        client: SurveyClient,
        survey: SurveyDetail,
        report: AnalyticsReport,
    ) -> Self {
        let theme = Theme::by_name(&config.ui.theme);
        let export_dir = config
            .export
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let (export_tx, export_rx) = mpsc::unbounded_channel();

        Self {
            theme,
            survey,
            report,
            views: ViewStates::new(),
            selected: 0,
            scroll: 0,
            notice: None,
            should_quit: false,
            text_answer_limit: config.ui.text_answer_limit,
            export_dir,
            client,
            export_tx,
            export_rx,
            export_in_flight: false,
        }
    }

    /// Run the main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut event_handler = EventHandler::new();

        loop {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                event = event_handler.next() => {
                    match event {
                        Some(Event::Key(key)) => {
                            if let Some(action) = map_key(&key) {
                                self.apply_action(action);
                            }
                        }
                        Some(_) => {} // resize redraws on the next frame
                        None => self.should_quit = true,
                    }
                }
                outcome = self.export_rx.recv() => {
                    if let Some(outcome) = outcome {
                        self.apply_export_outcome(outcome);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the full UI.
    pub fn draw(&self, frame: &mut Frame) {
        let [header_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let header = HeaderData {
            survey_title: self.survey.title.clone(),
            status_label: self.survey.status.label().to_string(),
            question_count: self.report.questions.len(),
        };
        render_header(frame, header_area, &header, &self.theme);

        let [list_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(34), Constraint::Percentage(66)])
                .areas(main_area);

        render_question_list(
            frame,
            list_area,
            &self.report.questions,
            self.selected,
            &self.views,
            &self.theme,
        );

        if let Some(question) = self.report.questions.get(self.selected) {
            let view = self.views.view(question.question_id);
            match &question.summary {
                QuestionSummary::Texts(texts) => {
                    render_text_answers(
                        frame,
                        detail_area,
                        &question.title,
                        texts,
                        self.scroll,
                        self.text_answer_limit,
                        &self.theme,
                    );
                }
                _ if view.chart == ChartKind::Table => {
                    render_summary_table(frame, detail_area, question, view, &self.theme);
                }
                _ => {
                    render_chart(frame, detail_area, question, view.chart, &self.theme);
                }
            }
        }

        render_status_bar(frame, status_area, self.notice.as_ref(), &self.theme);
    }

    /// Apply a user action to the application state.
    pub fn apply_action(&mut self, action: Action) {
        // Any keypress clears a stale notice.
        self.notice = None;

        match action {
            Action::Quit => self.should_quit = true,
            Action::NextQuestion => {
                let count = self.report.questions.len();
                if count > 0 && self.selected + 1 < count {
                    self.selected += 1;
                    self.scroll = 0;
                }
            }
            Action::PrevQuestion => {
                if self.selected > 0 {
                    self.selected -= 1;
                    self.scroll = 0;
                }
            }
            Action::SelectChart(kind) => {
                if let Some(id) = self.selected_question_id() {
                    self.views.select_chart(id, kind);
                }
            }
            Action::SortByLabel => {
                if let Some(id) = self.selected_question_id() {
                    self.views.toggle_sort(id, SortKey::Label);
                }
            }
            Action::SortByCount => {
                if let Some(id) = self.selected_question_id() {
                    self.views.toggle_sort(id, SortKey::Count);
                }
            }
            Action::Export => self.start_export(),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(5),
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(5),
        }
    }

    fn selected_question_id(&self) -> Option<i64> {
        self.report
            .questions
            .get(self.selected)
            .map(|q| q.question_id)
    }

    /// Kick off a background export; at most one runs at a time.
    fn start_export(&mut self) {
        if self.export_in_flight {
            self.notice = Some(Notice::info("Export already running"));
            return;
        }
        self.export_in_flight = true;
        self.notice = Some(Notice::info("Exporting…"));

        let client = self.client.clone();
        let survey_id = self.survey.id.to_string();
        let dir = self.export_dir.clone();
        let tx = self.export_tx.clone();

        tokio::spawn(async move {
            let outcome = match client.export(&survey_id).await {
                Ok(bytes) => {
                    let path = dir.join(export_filename(&survey_id));
                    match std::fs::create_dir_all(&dir)
                        .and_then(|_| std::fs::write(&path, &bytes))
                    {
                        Ok(()) => ExportOutcome::Done {
                            path,
                            bytes: bytes.len(),
                        },
                        Err(e) => ExportOutcome::Failed {
                            message: format!("Write failed: {}", e),
                        },
                    }
                }
                Err(e) => ExportOutcome::Failed {
                    message: e.to_string(),
                },
            };
            let _ = tx.send(outcome);
        });
    }

    fn apply_export_outcome(&mut self, outcome: ExportOutcome) {
        self.export_in_flight = false;
        self.notice = Some(match outcome {
            ExportOutcome::Done { path, bytes } => {
                Notice::info(format!("Exported {} bytes to {}", bytes, path.display()))
            }
            ExportOutcome::Failed { message } => {
                Notice::error(format!("Export failed: {}", message))
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surveyscope_core::{
        AnalyticsQuestion, OptionSummary, QuestionType, SortOrder, SurveyStatus,
    };

    fn option(index: u32, label: &str, count: u64) -> OptionSummary {
        OptionSummary {
            option_index: index,
            label: label.to_string(),
            count,
            ratio: 0.0,
        }
    }

    fn choice_question(id: i64, title: &str) -> AnalyticsQuestion {
        AnalyticsQuestion {
            question_id: id,
            question_type: QuestionType::SingleChoice,
            title: title.to_string(),
            summary: QuestionSummary::Options(vec![option(0, "Yes", 7), option(1, "No", 3)]),
        }
    }

    fn text_question(id: i64) -> AnalyticsQuestion {
        AnalyticsQuestion {
            question_id: id,
            question_type: QuestionType::ShortText,
            title: "Comments".to_string(),
            summary: QuestionSummary::Texts(vec!["Great".to_string()]),
        }
    }

    fn survey() -> SurveyDetail {
        SurveyDetail {
            id: 7,
            title: "Course Feedback".to_string(),
            description: None,
            status: SurveyStatus::Published,
            creator_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn app_with(questions: Vec<AnalyticsQuestion>) -> App {
        let config = AppConfig::default();
        let client = SurveyClient::new(&config.api).unwrap();
        App::new(config, client, survey(), AnalyticsReport { questions })
    }

    #[test]
    fn test_navigation_clamps_at_bounds() {
        let mut app = app_with(vec![choice_question(1, "Q1"), choice_question(2, "Q2")]);
        assert_eq!(app.selected, 0);

        app.apply_action(Action::PrevQuestion);
        assert_eq!(app.selected, 0);

        app.apply_action(Action::NextQuestion);
        assert_eq!(app.selected, 1);
        app.apply_action(Action::NextQuestion);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_chart_selection_isolated_per_question() {
        let mut app = app_with(vec![choice_question(1, "Q1"), choice_question(2, "Q2")]);

        app.apply_action(Action::SelectChart(ChartKind::Pie));
        app.apply_action(Action::NextQuestion);
        app.apply_action(Action::SelectChart(ChartKind::Bar));

        assert_eq!(app.views.view(1).chart, ChartKind::Pie);
        assert_eq!(app.views.view(2).chart, ChartKind::Bar);
    }

    #[test]
    fn test_sort_toggle_routes_to_selected_question() {
        let mut app = app_with(vec![choice_question(1, "Q1"), choice_question(2, "Q2")]);

        app.apply_action(Action::SortByCount);
        app.apply_action(Action::SortByCount);

        let sorted = app.views.view(1).sort;
        assert_eq!(sorted.key, Some(SortKey::Count));
        assert_eq!(sorted.order, SortOrder::Asc);

        // The other question keeps the default.
        assert_eq!(app.views.view(2).sort.key, None);
    }

    #[test]
    fn test_quit_action() {
        let mut app = app_with(vec![choice_question(1, "Q1")]);
        app.apply_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_scroll_resets_on_question_switch() {
        let mut app = app_with(vec![text_question(1), text_question(2)]);
        app.apply_action(Action::ScrollDown);
        assert_eq!(app.scroll, 5);

        app.apply_action(Action::NextQuestion);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_actions_on_empty_report_are_noops() {
        let mut app = app_with(vec![]);
        app.apply_action(Action::NextQuestion);
        app.apply_action(Action::SelectChart(ChartKind::Pie));
        app.apply_action(Action::SortByLabel);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_draw_choice_question() {
        let backend = ratatui::backend::TestBackend::new(100, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let app = app_with(vec![choice_question(1, "Attendance")]);

        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Course Feedback"));
        assert!(content.contains("Attendance"));
        assert!(content.contains("Total"));
    }

    #[test]
    fn test_draw_pie_after_selection() {
        let backend = ratatui::backend::TestBackend::new(100, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut app = app_with(vec![choice_question(1, "Attendance")]);
        app.apply_action(Action::SelectChart(ChartKind::Pie));

        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("70.00%"));
        assert!(content.contains("30.00%"));
    }

    #[test]
    fn test_draw_text_question() {
        let backend = ratatui::backend::TestBackend::new(100, 15);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let app = app_with(vec![text_question(1)]);

        terminal.draw(|frame| app.draw(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Great"));
    }

    #[test]
    fn test_export_outcome_updates_notice() {
        let mut app = app_with(vec![choice_question(1, "Q1")]);
        app.apply_export_outcome(ExportOutcome::Done {
            path: PathBuf::from("./responses-7.xlsx"),
            bytes: 1024,
        });
        let notice = app.notice.clone().unwrap();
        assert!(notice.text.contains("1024 bytes"));
        assert!(!notice.is_error);

        app.apply_export_outcome(ExportOutcome::Failed {
            message: "connection refused".to_string(),
        });
        let notice = app.notice.clone().unwrap();
        assert!(notice.is_error);
        assert!(notice.text.contains("connection refused"));
    }
}
