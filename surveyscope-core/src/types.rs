//! Wire types for the consumed survey platform REST contract.
//!
//! The platform wraps every JSON endpoint in a `{code, message, data}`
//! envelope. Per-question analytics carry a `summary` field whose JSON
//! shape depends on the sibling `type` field; decoding resolves it into
//! the tagged [`QuestionSummary`] union at the boundary so downstream
//! code never has to duck-type it.

use crate::error::ApiError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Standard response envelope: `code == 0` is success, anything else is
/// a server-reported failure carrying `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i32,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope into its payload, mapping non-zero codes and
    /// missing data to [`ApiError`].
    pub fn into_data(self) -> Result<T, ApiError> {
        if self.code != 0 {
            return Err(ApiError::Server {
                code: self.code,
                message: self.message,
            });
        }
        self.data.ok_or(ApiError::EmptyData)
    }
}

/// Survey question kind, as the platform reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    SingleChoice,
    MultipleChoice,
    ShortText,
    LongText,
    Scale,
    /// Forward compatibility with question kinds this client predates.
    #[serde(other)]
    Other,
}

impl QuestionType {
    /// Whether this kind carries per-option counts.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultipleChoice)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SingleChoice => "single choice",
            Self::MultipleChoice => "multiple choice",
            Self::ShortText => "short text",
            Self::LongText => "long text",
            Self::Scale => "scale",
            Self::Other => "other",
        }
    }
}

/// Per-option aggregate for a choice question.
///
/// `ratio` is the server-echoed fraction of respondents; display
/// percentages are recomputed from `count` rather than trusting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSummary {
    pub option_index: u32,
    pub label: String,
    pub count: u64,
    #[serde(default)]
    pub ratio: f64,
}

/// One bucket of a scale question's distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleBucket {
    pub value: i32,
    pub count: u64,
}

/// Aggregate for a scale question: average score plus the per-value
/// distribution. `avg` is absent when nobody has answered yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleSummary {
    #[serde(default)]
    pub avg: Option<f64>,
    #[serde(default)]
    pub distribution: Vec<ScaleBucket>,
}

impl ScaleSummary {
    /// Total number of valid (scored) responses.
    pub fn total(&self) -> u64 {
        self.distribution.iter().map(|b| b.count).sum()
    }
}

/// Server-computed aggregate for one question, resolved into a tagged
/// variant by the question's type.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionSummary {
    /// Choice questions: ordered per-option counts.
    Options(Vec<OptionSummary>),
    /// Scale questions: average plus distribution.
    Scale(ScaleSummary),
    /// Text questions: raw answer strings.
    Texts(Vec<String>),
}

impl QuestionSummary {
    /// Resolve a raw `summary` JSON value against the declared question
    /// type. A shape that contradicts the type decodes to that type's
    /// empty variant so one bad question cannot sink the whole report.
    pub fn from_value(question_type: QuestionType, value: serde_json::Value) -> Self {
        match question_type {
            QuestionType::SingleChoice | QuestionType::MultipleChoice => {
                match serde_json::from_value::<Vec<OptionSummary>>(value) {
                    Ok(options) => Self::Options(options),
                    Err(e) => {
                        tracing::warn!(error = %e, "Malformed choice summary, treating as empty");
                        Self::Options(Vec::new())
                    }
                }
            }
            QuestionType::Scale => match serde_json::from_value::<ScaleSummary>(value) {
                Ok(scale) => Self::Scale(scale),
                Err(e) => {
                    tracing::warn!(error = %e, "Malformed scale summary, treating as empty");
                    Self::Scale(ScaleSummary::default())
                }
            },
            _ => match serde_json::from_value::<Vec<Option<String>>>(value) {
                Ok(texts) => Self::Texts(texts.into_iter().flatten().collect()),
                Err(e) => {
                    tracing::warn!(error = %e, "Malformed text summary, treating as empty");
                    Self::Texts(Vec::new())
                }
            },
        }
    }

    /// Whether the summary carries no responses at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Options(options) => options.iter().all(|o| o.count == 0),
            Self::Scale(scale) => scale.distribution.is_empty(),
            Self::Texts(texts) => texts.is_empty(),
        }
    }

    pub fn as_options(&self) -> Option<&[OptionSummary]> {
        match self {
            Self::Options(options) => Some(options),
            _ => None,
        }
    }
}

/// Analytics for one survey question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsQuestion {
    pub question_id: i64,
    pub question_type: QuestionType,
    pub title: String,
    pub summary: QuestionSummary,
}

impl<'de> Deserialize<'de> for AnalyticsQuestion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            question_id: i64,
            #[serde(rename = "type")]
            question_type: QuestionType,
            #[serde(default)]
            title: String,
            #[serde(default)]
            summary: serde_json::Value,
        }

        let raw = Raw::deserialize(deserializer)?;
        let summary = QuestionSummary::from_value(raw.question_type, raw.summary);
        Ok(Self {
            question_id: raw.question_id,
            question_type: raw.question_type,
            title: raw.title,
            summary,
        })
    }
}

/// Full analytics payload for a survey.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsReport {
    #[serde(default)]
    pub questions: Vec<AnalyticsQuestion>,
}

/// Survey lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurveyStatus {
    Draft,
    Published,
    Paused,
    Ended,
    #[serde(other)]
    Unknown,
}

impl SurveyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Paused => "paused",
            Self::Ended => "ended",
            Self::Unknown => "unknown",
        }
    }
}

/// One row of the survey list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyListItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub status: SurveyStatus,
    #[serde(default)]
    pub response_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Paginated survey list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveyPage {
    #[serde(default)]
    pub list: Vec<SurveyListItem>,
    #[serde(default)]
    pub total: u64,
}

/// Survey header fields the client displays; question definitions and
/// fill settings exist in the payload but are not consumed here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDetail {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: SurveyStatus,
    #[serde(default)]
    pub creator_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// One raw answer set in the response list (not aggregated).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseListItem {
    pub id: i64,
    /// Submitting user; None for anonymous responses.
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Paginated raw response list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePage {
    #[serde(default)]
    pub list: Vec<ResponseListItem>,
    #[serde(default)]
    pub total: u64,
}

/// Service health probe payload.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthInfo {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub timestamp: String,
}
