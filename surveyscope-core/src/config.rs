//! Configuration system for surveyscope.
//!
//! Uses `figment` for layered configuration: defaults -> config file -> environment.
//! Configuration is loaded from `~/.config/surveyscope/config.toml` and/or
//! `.surveyscope/config.toml` in the working directory.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for the surveyscope client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub export: ExportConfig,
}

/// Configuration for the survey platform API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the platform, e.g. `https://survey.example.edu`.
    /// All consumed endpoints live under `{base_url}/api`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Environment variable holding the opaque session cookie
    /// (value of the platform's session cookie, e.g. `JSESSIONID=...`).
    pub session_env: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 10,
            session_env: "SURVEYSCOPE_SESSION".to_string(),
        }
    }
}

/// Configuration for the terminal UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme name: "dark" or "light".
    pub theme: String,
    /// Whether `analytics` opens the interactive TUI by default.
    pub use_tui: bool,
    /// Maximum free-text answers shown before truncating with an
    /// overflow line.
    pub text_answer_limit: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            use_tui: true,
            text_answer_limit: 50,
        }
    }
}

/// Configuration for spreadsheet export downloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exports are written to (None = current directory).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { output_dir: None }
    }
}

/// Load configuration from all sources, merged in priority order.
///
/// Priority (highest to lowest):
/// 1. Explicit overrides (passed as argument)
/// 2. Environment variables (prefixed with `SURVEYSCOPE_`)
/// 3. Working-directory config (`.surveyscope/config.toml`)
/// 4. User config (`~/.config/surveyscope/config.toml`)
/// 5. Built-in defaults
pub fn load_config(
    workdir: Option<&Path>,
    overrides: Option<&AppConfig>,
) -> Result<AppConfig, Box<figment::Error>> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    // User-level config
    if let Some(config_dir) = directories::ProjectDirs::from("io", "surveyscope", "surveyscope") {
        let user_config = config_dir.config_dir().join("config.toml");
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }
    }

    // Working-directory config
    if let Some(dir) = workdir {
        let local_config = dir.join(".surveyscope").join("config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }
    }

    // Environment variables (SURVEYSCOPE_API__BASE_URL, SURVEYSCOPE_UI__THEME, etc.)
    figment = figment.merge(Env::prefixed("SURVEYSCOPE_").split("__"));

    // Explicit overrides
    if let Some(overrides) = overrides {
        figment = figment.merge(Serialized::defaults(overrides));
    }

    figment.extract().map_err(Box::new)
}

/// Check whether any surveyscope configuration file exists
/// (user-level or working-directory).
pub fn config_exists(workdir: Option<&Path>) -> bool {
    if let Some(config_dir) = directories::ProjectDirs::from("io", "surveyscope", "surveyscope") {
        if config_dir.config_dir().join("config.toml").exists() {
            return true;
        }
    }
    if let Some(dir) = workdir {
        if dir.join(".surveyscope").join("config.toml").exists() {
            return true;
        }
    }
    false
}
