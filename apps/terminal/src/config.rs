//! Runtime configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `QUIZ_TIME_LIMIT_SECS` | 120 |
//! | `QUIZ_TOTAL_ENTITIES` | size of the loaded catalog |
//! | `QUIZ_MESSAGE_MS` | 3000 |
//! | `QUIZ_DATA_PATH` | bundled list |
//! | `QUIZ_DB_PATH` | `<data dir>/municipios-quiz/quiz.db` |

use quiz_core::GameSettings;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings: GameSettings,
    /// Explicit win target; `None` means the catalog size.
    pub total_entities: Option<usize>,
    pub data_path: Option<PathBuf>,
    pub db_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = GameSettings::default();

        if let Some(secs) = parse_positive::<u32, _>(&lookup, "QUIZ_TIME_LIMIT_SECS")? {
            settings.time_limit_secs = secs;
        }
        if let Some(ms) = parse_positive::<u64, _>(&lookup, "QUIZ_MESSAGE_MS")? {
            settings.message_duration_ms = ms;
        }
        let total_entities = parse_positive::<usize, _>(&lookup, "QUIZ_TOTAL_ENTITIES")?;

        let data_path = non_empty(&lookup, "QUIZ_DATA_PATH").map(PathBuf::from);
        let db_path = non_empty(&lookup, "QUIZ_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        Ok(Self {
            settings,
            total_entities,
            data_path,
            db_path,
        })
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("municipios-quiz")
        .join("quiz.db")
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn parse_positive<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = non_empty(lookup, key) else {
        return Ok(None);
    };

    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: raw.clone(),
        })?;

    if value == T::default() {
        return Err(ConfigError::Zero { key });
    }
    Ok(Some(value))
}
