//! Core types for the municipality quiz.

use crate::matching::MatchPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of municipalities in Rio Grande do Sul.
pub const RS_MUNICIPALITY_COUNT: usize = 497;

/// A municipality the player can guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Entity {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// Latitude/longitude pair where a marker is placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Message colour category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Green.
    Success,
    /// Orange.
    Warning,
    /// Red.
    Error,
    /// Record and victory messages.
    Highlight,
}

/// Game configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub time_limit_secs: u32,
    /// Size of the full set; reaching it wins the game.
    pub total_entities: usize,
    pub message_duration_ms: u64,
    /// Timer is shown as urgent below this many seconds.
    pub urgency_threshold_secs: u32,
    pub matching: MatchPolicy,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            time_limit_secs: 120,
            total_entities: RS_MUNICIPALITY_COUNT,
            message_duration_ms: 3000,
            urgency_threshold_secs: 30,
            matching: MatchPolicy::default(),
        }
    }
}

impl GameSettings {
    pub fn message_duration(&self) -> Duration {
        Duration::from_millis(self.message_duration_ms)
    }
}

/// Format remaining seconds as `mm:ss`.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(120), "02:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(605), "10:05");
    }

    #[test]
    fn settings_fill_missing_fields_from_defaults() {
        let settings: GameSettings = serde_json::from_str(r#"{"time_limit_secs": 60}"#).unwrap();
        assert_eq!(settings.time_limit_secs, 60);
        assert_eq!(settings.total_entities, RS_MUNICIPALITY_COUNT);
        assert_eq!(settings.matching, MatchPolicy::default());
    }
}
