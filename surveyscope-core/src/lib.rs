//! # Surveyscope Core
//!
//! Core library for the surveyscope terminal client.
//! Provides the typed REST client for the campus survey platform,
//! the response-summary projector (tables and chart projections),
//! per-question view state, and configuration.

pub mod client;
pub mod config;
pub mod error;
pub mod projector;
pub mod types;

// Re-export commonly used types at the crate root.
pub use client::{SurveyClient, SurveyFilter, export_filename};
pub use config::{AppConfig, load_config};
pub use error::{ApiError, ConfigError, Result, SurveyscopeError};
pub use projector::{
    BarDatum, ChartKind, ChartProjection, QuestionView, Slice, TableProjection, TableRow,
    ViewStates, project_chart, project_table,
};
pub use projector::sort::{SortKey, SortOrder, SortState};
pub use types::{
    AnalyticsQuestion, AnalyticsReport, ApiEnvelope, HealthInfo, OptionSummary, QuestionSummary,
    QuestionType, ResponseListItem, ResponsePage, ScaleBucket, ScaleSummary, SurveyDetail,
    SurveyListItem, SurveyPage, SurveyStatus,
};
