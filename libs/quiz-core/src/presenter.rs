//! Events the game emits for display.

use crate::types::{Coordinate, Severity};
use serde::Serialize;
use std::time::Duration;

/// Something the display should reflect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// Place a marker and append the name to the found list.
    EntityAdded { name: String, coordinate: Coordinate },
    /// Show `text` and clear it after `clear_after`, unless a newer message replaced it.
    Message {
        text: String,
        severity: Severity,
        clear_after: Duration,
    },
    CounterUpdated { count: usize },
    TimerUpdated { display: String, urgent: bool },
    HighScoreUpdated { score: u32 },
    /// Time ran out; disable input and offer a restart.
    GameOver { found: usize },
    /// Every municipality was found.
    Completed { total: usize },
    /// Re-enable input, clear markers and the list.
    Restarted,
}

/// Render sink for game events.
pub trait Presenter {
    fn present(&mut self, event: GameEvent);
}

/// Presenter that keeps every event. Useful for tests and replays.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    /// Texts of all message events, oldest first.
    pub fn messages(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GameEvent::Message { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages().last().copied()
    }

    /// Most recent counter value shown.
    pub fn counter(&self) -> Option<usize> {
        self.events.iter().rev().find_map(|event| match event {
            GameEvent::CounterUpdated { count } => Some(*count),
            _ => None,
        })
    }

    /// Most recent timer display.
    pub fn timer(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            GameEvent::TimerUpdated { display, .. } => Some(display.as_str()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Presenter for EventLog {
    fn present(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
