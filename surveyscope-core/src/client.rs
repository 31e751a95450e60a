//! REST client for the survey platform's consumed contract.
//!
//! Read-only consumer of `/api/surveys/*` and `/api/health`: survey
//! list/detail, per-question analytics, paginated raw responses, and
//! the spreadsheet export. Requests are one-shot request/response with
//! no retry or cancellation beyond the configured timeout.
//!
//! Auth is an opaque session cookie resolved from the env var named in
//! `api.session_env` and attached as a `Cookie` header when present
//! (the platform issues sessions via its own login/CAS flow, which is
//! not this client's concern).

use crate::config::ApiConfig;
use crate::error::{ApiError, ConfigError, Result as CoreResult};
use crate::types::{
    AnalyticsReport, ApiEnvelope, HealthInfo, ResponsePage, SurveyDetail, SurveyPage,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Filter for the survey list endpoint.
#[derive(Debug, Clone, Default)]
pub struct SurveyFilter {
    /// Restrict to surveys the session user created.
    pub only_mine: bool,
    /// Lifecycle status string as the server expects it (e.g. `PUBLISHED`).
    pub status: Option<String>,
    /// Title keyword search.
    pub keyword: Option<String>,
}

/// Client for the survey platform API.
#[derive(Debug, Clone)]
pub struct SurveyClient {
    client: Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl SurveyClient {
    /// Create a client from configuration.
    ///
    /// Reads the session cookie from the environment variable named in
    /// `config.session_env`; absence is not an error (the platform may
    /// run with anonymous read access in development).
    pub fn new(config: &ApiConfig) -> CoreResult<Self> {
        url::Url::parse(&config.base_url).map_err(|e| ConfigError::BadBaseUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;

        let session_cookie = std::env::var(&config.session_env).ok();
        if session_cookie.is_none() {
            debug!(
                var = config.session_env.as_str(),
                "No session cookie in environment, sending unauthenticated requests"
            );
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Connection {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session_cookie,
        })
    }

    /// List surveys, paginated, newest-updated first.
    pub async fn list_surveys(
        &self,
        filter: &SurveyFilter,
        page: u32,
        page_size: u32,
    ) -> Result<SurveyPage, ApiError> {
        let url = format!("{}/api/surveys", self.base_url);
        let mut query: Vec<(&str, String)> = vec![
            ("page", page.to_string()),
            ("pageSize", page_size.to_string()),
            ("sort", "updatedAt".to_string()),
        ];
        if filter.only_mine {
            query.push(("onlyMine", "true".to_string()));
        }
        if let Some(status) = &filter.status {
            query.push(("status", status.clone()));
        }
        if let Some(keyword) = &filter.keyword {
            query.push(("keyword", keyword.clone()));
        }
        self.get_json(&url, &query).await
    }

    /// Fetch one survey's header fields.
    pub async fn survey_detail(&self, survey_id: &str) -> Result<SurveyDetail, ApiError> {
        let url = format!("{}/api/surveys/{}", self.base_url, survey_id);
        self.get_json(&url, &[]).await
    }

    /// Fetch the per-question analytics report for a survey.
    pub async fn analytics(&self, survey_id: &str) -> Result<AnalyticsReport, ApiError> {
        let url = format!("{}/api/surveys/{}/analytics", self.base_url, survey_id);
        self.get_json(&url, &[]).await
    }

    /// Fetch one page of raw (non-aggregated) responses.
    pub async fn responses(
        &self,
        survey_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<ResponsePage, ApiError> {
        let url = format!("{}/api/surveys/{}/responses", self.base_url, survey_id);
        let query = [
            ("page", page.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        self.get_json(&url, &query).await
    }

    /// Download the response spreadsheet for a survey.
    ///
    /// Returns the raw xlsx bytes; callers persist them under
    /// [`export_filename`]. A JSON body on this endpoint means the
    /// server refused the export and is mapped like any envelope error.
    pub async fn export(&self, survey_id: &str) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}/api/surveys/{}/export", self.base_url, survey_id);
        debug!(url = url.as_str(), "Requesting export");

        let response = self
            .request(&url, &[])
            .send()
            .await
            .map_err(|e| ApiError::Connection {
                message: format!("Export request failed: {}", e),
            })?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("json"));

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, &body));
        }
        if is_json {
            let body = response.text().await.map_err(|e| ApiError::Decode {
                message: format!("Failed to read export refusal body: {}", e),
            })?;
            // Success status but an envelope body: the server refused.
            decode_envelope::<serde_json::Value>(&body)?;
            return Err(ApiError::Decode {
                message: "Export endpoint returned JSON instead of a spreadsheet".to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| ApiError::Connection {
            message: format!("Failed to read export body: {}", e),
        })?;
        Ok(bytes.to_vec())
    }

    /// Probe the platform's health endpoint.
    pub async fn health(&self) -> Result<HealthInfo, ApiError> {
        let url = format!("{}/api/health", self.base_url);
        self.get_json(&url, &[]).await
    }

    fn request(&self, url: &str, query: &[(&str, String)]) -> reqwest::RequestBuilder {
        let mut builder = self.client.get(url).query(query);
        if let Some(cookie) = &self.session_cookie {
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }
        builder
    }

    /// GET an enveloped JSON endpoint and unwrap its payload.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!(url, "Sending platform API request");

        let response = self
            .request(url, query)
            .send()
            .await
            .map_err(|e| ApiError::Connection {
                message: format!("Request to survey platform failed: {}", e),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Decode {
            message: format!("Failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            return Err(map_http_error(status, &body));
        }
        decode_envelope(&body)
    }
}

/// Suggested filename for an export download, matching the server's
/// Content-Disposition pattern.
pub fn export_filename(survey_id: &str) -> String {
    format!("responses-{}.xlsx", survey_id)
}

/// Decode an envelope body and unwrap its data, mapping server-reported
/// error codes.
fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: ApiEnvelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode {
            message: format!("Invalid JSON in response: {}", e),
        })?;
    envelope.into_data()
}

/// Map a non-2xx HTTP response to a structured error.
///
/// The platform uses plain HTTP statuses for the gate errors (401/403/404)
/// and envelope codes for domain errors; a JSON body on an error status
/// still gets its `message` surfaced when one is present.
fn map_http_error(status: StatusCode, body: &str) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound {
            what: "requested resource".to_string(),
        },
        _ => {
            if let Ok(envelope) = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body) {
                if envelope.code != 0 {
                    return ApiError::Server {
                        code: envelope.code,
                        message: envelope.message,
                    };
                }
            }
            let trimmed: String = body.chars().take(200).collect();
            ApiError::Http {
                status: status.as_u16(),
                body: trimmed,
            }
        }
    }
}
