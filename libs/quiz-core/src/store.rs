//! Persistence seam for the high score.

use std::convert::Infallible;

/// Storage for a single high-score value.
pub trait ScoreStore {
    type Error: std::fmt::Display;

    /// Stored high score. Missing or unreadable values read as 0.
    fn load_high_score(&self) -> u32;

    /// Persist a new high score. Only called with a value larger than the last one.
    fn save_high_score(&mut self, score: u32) -> Result<(), Self::Error>;
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    score: u32,
    writes: usize,
}

impl MemoryScoreStore {
    pub fn with_score(score: u32) -> Self {
        Self { score, writes: 0 }
    }

    /// Number of successful saves.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryScoreStore {
    type Error = Infallible;

    fn load_high_score(&self) -> u32 {
        self.score
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), Self::Error> {
        self.score = self.score.max(score);
        self.writes += 1;
        Ok(())
    }
}
