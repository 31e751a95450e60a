//! Per-question view state.
//!
//! Each question's sort and chart selection is isolated under its
//! question id: interacting with one question never disturbs another,
//! and no transition involves a server round-trip.

use super::sort::{SortKey, SortState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a question's summary is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Table,
    Pie,
    Doughnut,
    Column,
    Bar,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::Column => "column",
            Self::Bar => "bar",
        }
    }
}

/// Interactive state for one question: sort plus chart selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub sort: SortState,
    pub chart: ChartKind,
}

impl Default for QuestionView {
    fn default() -> Self {
        Self {
            sort: SortState::default(),
            chart: ChartKind::Table,
        }
    }
}

/// View state for every question on screen, keyed by question id.
/// Entries materialize lazily with the default view.
#[derive(Debug, Clone, Default)]
pub struct ViewStates {
    views: HashMap<i64, QuestionView>,
}

impl ViewStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view for a question (default if never touched).
    pub fn view(&self, question_id: i64) -> QuestionView {
        self.views
            .get(&question_id)
            .copied()
            .unwrap_or_default()
    }

    /// Select a chart kind for one question only.
    pub fn select_chart(&mut self, question_id: i64, chart: ChartKind) {
        self.views.entry(question_id).or_default().chart = chart;
    }

    /// Toggle a sort column for one question only.
    pub fn toggle_sort(&mut self, question_id: i64, key: SortKey) {
        self.views.entry(question_id).or_default().sort.toggle(key);
    }

    /// Drop all recorded state (used when a new report is loaded).
    pub fn clear(&mut self) {
        self.views.clear();
    }
}
