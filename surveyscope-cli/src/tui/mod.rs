//! TUI module for surveyscope.
//!
//! Interactive analytics browser: question list, per-question table and
//! chart projections with independent view state, one-shot export.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

use app::App;
use surveyscope_core::{AnalyticsReport, AppConfig, SurveyClient, SurveyDetail};

/// Run the TUI over an already-fetched analytics report.
pub async fn run(
    config: AppConfig,
    client: SurveyClient,
    survey: SurveyDetail,
    report: AnalyticsReport,
) -> anyhow::Result<()> {
    // Setup terminal
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen)?;

    let backend = ratatui::backend::CrosstermBackend::new(std::io::stdout());
    let mut terminal = ratatui::Terminal::new(backend)?;
    terminal.clear()?;

    // Run app
    let mut app = App::new(config, client, survey, report);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
