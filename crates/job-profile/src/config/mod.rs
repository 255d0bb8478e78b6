use crate::workflows::profile::{ProfileRules, SalaryRange, MAX_TITLES, MIN_SKILLS};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the application.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub catalog: CatalogConfig,
    pub rules: ProfileRules,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let csv_path = env::var("PROFILE_CATALOG_CSV")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let max_titles = numeric_var::<usize>("PROFILE_MAX_TITLES", MAX_TITLES)?;
        if max_titles == 0 {
            return Err(ConfigError::ZeroTitleLimit);
        }
        let min_skills = numeric_var::<usize>("PROFILE_MIN_SKILLS", MIN_SKILLS)?;

        let salary_min = numeric_var::<u32>("PROFILE_SALARY_MIN", SalaryRange::DEFAULT_MIN)?;
        let salary_max = numeric_var::<u32>("PROFILE_SALARY_MAX", SalaryRange::DEFAULT_MAX)?;
        if salary_min > salary_max {
            return Err(ConfigError::InvertedSalaryRange {
                min: salary_min,
                max: salary_max,
            });
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            catalog: CatalogConfig { csv_path },
            rules: ProfileRules {
                max_titles,
                min_skills,
                default_salary: SalaryRange::new(salary_min, salary_max),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn numeric_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Where candidate pools come from. `None` selects the built-in tables.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub csv_path: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { name: &'static str, value: String },
    ZeroTitleLimit,
    InvertedSalaryRange { min: u32, max: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { name, value } => {
                write!(f, "{name} must be a non-negative integer (got '{value}')")
            }
            ConfigError::ZeroTitleLimit => write!(f, "PROFILE_MAX_TITLES must be at least 1"),
            ConfigError::InvertedSalaryRange { min, max } => write!(
                f,
                "PROFILE_SALARY_MIN ({min}) must not exceed PROFILE_SALARY_MAX ({max})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
