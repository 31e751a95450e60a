//! Non-interactive CLI subcommand handlers.

use crate::text::{format_table, format_time};
use crate::{Commands, ConfigAction};
use std::path::Path;
use surveyscope_core::{
    AppConfig, ChartKind, ChartProjection, QuestionSummary, SortState, SurveyClient, SurveyFilter,
    export_filename, project_chart, project_table,
};

/// Handle a CLI subcommand.
pub async fn handle_command(
    command: Commands,
    config: AppConfig,
    workdir: &Path,
) -> anyhow::Result<()> {
    match command {
        Commands::Surveys {
            mine,
            status,
            keyword,
            page,
            page_size,
        } => handle_surveys(&config, mine, status, keyword, page, page_size).await,
        Commands::Analytics { survey_id, no_tui } => {
            handle_analytics(config, &survey_id, no_tui).await
        }
        Commands::Responses {
            survey_id,
            page,
            page_size,
        } => handle_responses(&config, &survey_id, page, page_size).await,
        Commands::Export { survey_id, output } => handle_export(&config, &survey_id, output).await,
        Commands::Config { action } => handle_config(action, &config, workdir),
        Commands::Health => handle_health(&config).await,
    }
}

async fn handle_surveys(
    config: &AppConfig,
    mine: bool,
    status: Option<String>,
    keyword: Option<String>,
    page: u32,
    page_size: u32,
) -> anyhow::Result<()> {
    let client = SurveyClient::new(&config.api)?;
    let filter = SurveyFilter {
        only_mine: mine,
        status,
        keyword,
    };
    let surveys = client.list_surveys(&filter, page, page_size).await?;

    if surveys.list.is_empty() {
        println!("No surveys found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = surveys
        .list
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.title.clone(),
                s.status.label().to_string(),
                s.response_count.unwrap_or(0).to_string(),
                format_time(s.updated_at),
            ]
        })
        .collect();
    print!(
        "{}",
        format_table(&["ID", "TITLE", "STATUS", "RESPONSES", "UPDATED"], &rows)
    );
    println!(
        "\nPage {} · showing {} of {} surveys",
        page,
        surveys.list.len(),
        surveys.total
    );
    Ok(())
}

async fn handle_analytics(config: AppConfig, survey_id: &str, no_tui: bool) -> anyhow::Result<()> {
    let client = SurveyClient::new(&config.api)?;
    let survey = client.survey_detail(survey_id).await?;
    let report = client.analytics(survey_id).await?;
    tracing::debug!(
        survey_id,
        questions = report.questions.len(),
        "Fetched analytics report"
    );

    if !no_tui && config.ui.use_tui {
        return crate::tui::run(config, client, survey, report).await;
    }

    println!("{} [{}]", survey.title, survey.status.label());
    if report.questions.is_empty() {
        println!("\nNo data: this survey has no questions or no submitted responses.");
        return Ok(());
    }

    let limit = config.ui.text_answer_limit;
    for (i, question) in report.questions.iter().enumerate() {
        println!(
            "\n{}. {} ({})",
            i + 1,
            question.title,
            question.question_type.label()
        );
        print_question(question, limit);
    }
    Ok(())
}

fn print_question(question: &surveyscope_core::AnalyticsQuestion, text_limit: usize) {
    match &question.summary {
        QuestionSummary::Options(options) => {
            let table = project_table(options, SortState::default());
            if table.is_empty() {
                println!("   (no data)");
                return;
            }
            let mut rows: Vec<Vec<String>> = table
                .rows
                .iter()
                .map(|r| {
                    vec![
                        r.label.clone(),
                        r.count.to_string(),
                        format!("{:.1}%", r.percent),
                    ]
                })
                .collect();
            rows.push(vec![
                "Total".to_string(),
                table.total.to_string(),
                String::new(),
            ]);
            print!("{}", format_table(&["OPTION", "COUNT", "PERCENT"], &rows));
        }
        QuestionSummary::Scale(_) => {
            match project_chart(&question.summary, ChartKind::Column) {
                ChartProjection::ScaleBars { bars, avg, total } => {
                    println!("   Average {:.2} over {} responses", avg, total);
                    let rows: Vec<Vec<String>> = bars
                        .iter()
                        .map(|b| vec![b.label.clone(), b.value.to_string(), b.tooltip.clone()])
                        .collect();
                    print!("{}", format_table(&["VALUE", "COUNT", "SHARE"], &rows));
                }
                _ => println!("   (no data)"),
            }
        }
        QuestionSummary::Texts(texts) => {
            if texts.is_empty() {
                println!("   (no data)");
                return;
            }
            for answer in texts.iter().take(text_limit) {
                let shown = if answer.is_empty() { "—" } else { answer };
                println!("   - {}", shown);
            }
            if texts.len() > text_limit {
                println!("   … {} answers in total", texts.len());
            }
        }
    }
}

async fn handle_responses(
    config: &AppConfig,
    survey_id: &str,
    page: u32,
    page_size: u32,
) -> anyhow::Result<()> {
    let client = SurveyClient::new(&config.api)?;
    let responses = client.responses(survey_id, page, page_size).await?;

    if responses.list.is_empty() {
        println!("No responses on this page.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = responses
        .list
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.user_id.clone().unwrap_or_else(|| "anonymous".to_string()),
                format_time(r.submitted_at),
                r.duration_seconds
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                r.summary.clone().unwrap_or_default(),
            ]
        })
        .collect();
    print!(
        "{}",
        format_table(&["ID", "USER", "SUBMITTED", "SECONDS", "ANSWERS"], &rows)
    );
    println!(
        "\nPage {} · showing {} of {} responses",
        page,
        responses.list.len(),
        responses.total
    );
    Ok(())
}

async fn handle_export(
    config: &AppConfig,
    survey_id: &str,
    output: Option<std::path::PathBuf>,
) -> anyhow::Result<()> {
    let client = SurveyClient::new(&config.api)?;
    let bytes = client.export(survey_id).await?;

    let dir = output
        .or_else(|| config.export.output_dir.clone())
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join(export_filename(survey_id));
    std::fs::write(&path, &bytes)?;
    tracing::info!(survey_id, path = %path.display(), "Export written");
    println!("Exported {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn handle_config(action: ConfigAction, config: &AppConfig, workdir: &Path) -> anyhow::Result<()> {
    match action {
        ConfigAction::Init => {
            let config_dir = workdir.join(".surveyscope");
            std::fs::create_dir_all(&config_dir)?;

            let config_path = config_dir.join("config.toml");
            if config_path.exists() {
                println!(
                    "Configuration file already exists at: {}",
                    config_path.display()
                );
                return Ok(());
            }

            let default_config = AppConfig::default();
            let toml_str = toml::to_string_pretty(&default_config)?;
            std::fs::write(&config_path, &toml_str)?;
            println!(
                "Created default configuration at: {}",
                config_path.display()
            );
            Ok(())
        }
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(config)?;
            println!("{}", toml_str);
            Ok(())
        }
    }
}

async fn handle_health(config: &AppConfig) -> anyhow::Result<()> {
    let client = SurveyClient::new(&config.api)?;
    let health = client.health().await?;
    println!(
        "{} ({}) at {}",
        health.status, health.service, health.timestamp
    );
    Ok(())
}
