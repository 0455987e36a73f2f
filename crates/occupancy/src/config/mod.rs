use std::env;
use std::fmt;

/// Default age threshold: only occupants strictly older than this are listed.
pub const DEFAULT_ADULT_AGE: u32 = 18;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Rendering of the household report on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub report: ReportConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let adult_age = match env::var("REPORT_ADULT_AGE") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidAdultAge { value: raw })?,
            Err(_) => DEFAULT_ADULT_AGE,
        };

        let format = match env::var("REPORT_FORMAT") {
            Ok(raw) => {
                OutputFormat::parse(&raw).ok_or(ConfigError::InvalidFormat { value: raw })?
            }
            Err(_) => OutputFormat::Text,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            report: ReportConfig { adult_age, format },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: AppEnvironment::Development,
            report: ReportConfig::default(),
            telemetry: TelemetryConfig {
                log_level: "warn".to_string(),
            },
        }
    }
}

/// Controls what the report lists and how it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub adult_age: u32,
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            adult_age: DEFAULT_ADULT_AGE,
            format: OutputFormat::Text,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAdultAge { value: String },
    InvalidFormat { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAdultAge { value } => {
                write!(f, "REPORT_ADULT_AGE must be a non-negative integer, got '{value}'")
            }
            ConfigError::InvalidFormat { value } => {
                write!(f, "REPORT_FORMAT must be 'text' or 'json', got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
