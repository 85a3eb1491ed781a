use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub analysis: AnalysisSettings,
    pub upload: UploadSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    pub ocr_model: String,
    pub analysis_model: String,
    pub assistant_model: String,
    pub threat_model: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    pub max_chunk_chars: usize,
    pub chunk_delay_ms: u64,
    pub max_clauses: usize,
    pub processing_timeout_secs: u64,
    pub stale_after_secs: u64,
    pub reaper_interval_secs: u64,
    pub queue_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_bytes: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub local_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers `appsettings.toml`, `appsettings.{env}.toml` and `APP__*` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("appsettings").required(false))
            .add_source(
                File::with_name(&format!(
                    "appsettings.{}",
                    environment.as_str().to_lowercase()
                ))
                .required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
