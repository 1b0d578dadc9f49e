use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "DEAL_INTEL_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Environment variable for the deal extraction model
const ENV_DEAL_EXTRACTION_MODEL: &str = "DEAL_EXTRACTION_MODEL";
/// Environment variable for the strategy grading model
const ENV_STRATEGY_GRADING_MODEL: &str = "STRATEGY_GRADING_MODEL";

pub const DEFAULT_DEAL_EXTRACTION_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_STRATEGY_GRADING_MODEL: &str = "gpt-4o";

/// Pipeline tuning loaded from the YAML config file
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// LGA used when the model proposes no valid LGA. Ignored if it is not in
    /// the catalog supplied with the request.
    #[serde(default)]
    pub default_lga_id: Option<String>,
    /// Caller-side retries of a failed model call (the pipeline itself never retries)
    #[serde(default = "default_upstream_max_retries")]
    pub upstream_max_retries: u32,
    #[serde(default = "default_upstream_retry_delay_ms")]
    pub upstream_retry_delay_ms: u64,
}

fn default_upstream_max_retries() -> u32 {
    2
}

fn default_upstream_retry_delay_ms() -> u64 {
    500
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_lga_id: None,
            upstream_max_retries: default_upstream_max_retries(),
            upstream_retry_delay_ms: default_upstream_retry_delay_ms(),
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub deal_extraction_model: String,
    pub strategy_grading_model: String,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            deal_extraction_model: DEFAULT_DEAL_EXTRACTION_MODEL.to_string(),
            strategy_grading_model: DEFAULT_STRATEGY_GRADING_MODEL.to_string(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let deal_extraction_model = std::env::var(ENV_DEAL_EXTRACTION_MODEL)
            .unwrap_or_else(|_| DEFAULT_DEAL_EXTRACTION_MODEL.to_string());
        let strategy_grading_model = std::env::var(ENV_STRATEGY_GRADING_MODEL)
            .unwrap_or_else(|_| DEFAULT_STRATEGY_GRADING_MODEL.to_string());

        let config_path = std::env::var(ENV_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let pipeline = Self::load_config_file(&config_path)
            .map(|cf| cf.pipeline)
            .unwrap_or_default();

        Self {
            pipeline,
            deal_extraction_model,
            strategy_grading_model,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => Self::parse_config(path, &contents),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    fn parse_config(path: &Path, contents: &str) -> Option<ConfigFile> {
        let contents = contents.trim();
        if contents.is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Some(ConfigFile::default());
        }

        match serde_yaml::from_str(contents) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded configuration from file");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
