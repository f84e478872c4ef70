//! Session state machine: found set, countdown and high score.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Playing,
    /// Timer ran out. Input is disabled until restart.
    Expired,
    /// Every municipality was found. Timer is stopped.
    Completed,
}

/// A raised high score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighScoreChange {
    pub score: u32,
    /// True only for the first record of the session.
    pub first_this_session: bool,
}

/// Result of recording a matched entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRecord {
    AlreadyFound,
    /// Session expired or already completed; nothing recorded.
    Locked,
    Added {
        count: usize,
        high_score: Option<HighScoreChange>,
        completed: bool,
    },
}

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not playing; nothing changed.
    Idle,
    Running { remaining: u32 },
    Expired,
}

/// State of one play-through. The high score outlives restarts.
#[derive(Debug, Clone)]
pub struct Session {
    time_limit: u32,
    total: usize,
    found: HashSet<String>,
    time_remaining: u32,
    high_score: u32,
    record_broken: bool,
    phase: Phase,
}

impl Session {
    pub fn new(time_limit: u32, total: usize, high_score: u32) -> Self {
        Self {
            time_limit,
            total,
            found: HashSet::new(),
            time_remaining: time_limit,
            high_score,
            record_broken: false,
            phase: Phase::Playing,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_expired(&self) -> bool {
        self.phase == Phase::Expired
    }

    pub fn accepts_input(&self) -> bool {
        self.phase != Phase::Expired
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn record_broken_this_session(&self) -> bool {
        self.record_broken
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Record a matched entity by display name.
    ///
    /// A new entity refills the countdown and may raise the high score.
    /// Reaching the total completes the session, after which the found set
    /// is frozen until restart.
    pub fn record_match(&mut self, name: &str) -> MatchRecord {
        if self.phase == Phase::Expired {
            return MatchRecord::Locked;
        }
        if self.found.contains(name) {
            return MatchRecord::AlreadyFound;
        }
        if self.phase == Phase::Completed {
            return MatchRecord::Locked;
        }

        self.found.insert(name.to_string());
        self.time_remaining = self.time_limit;

        let count = self.found.len();
        // On completion count == total, so this also lifts the high score to the total
        let high_score = self.raise_high_score(to_score(count));

        let completed = count >= self.total;
        if completed {
            self.phase = Phase::Completed;
        }

        MatchRecord::Added {
            count,
            high_score,
            completed,
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> Tick {
        if self.phase != Phase::Playing {
            return Tick::Idle;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.phase = Phase::Expired;
            Tick::Expired
        } else {
            Tick::Running {
                remaining: self.time_remaining,
            }
        }
    }

    /// Start over after expiry or completion. Returns false while still playing.
    pub fn restart(&mut self) -> bool {
        if self.phase == Phase::Playing {
            return false;
        }

        self.found.clear();
        self.time_remaining = self.time_limit;
        self.record_broken = false;
        self.phase = Phase::Playing;
        true
    }

    fn raise_high_score(&mut self, candidate: u32) -> Option<HighScoreChange> {
        if candidate <= self.high_score {
            return None;
        }

        self.high_score = candidate;
        let first_this_session = !self.record_broken;
        self.record_broken = true;
        Some(HighScoreChange {
            score: candidate,
            first_this_session,
        })
    }
}

fn to_score(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
