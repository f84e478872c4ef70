//! Core library for the municipality quiz.
//!
//! Provides:
//! - Name normalization (case and accent insensitive)
//! - Answer matching (Levenshtein distance with length-based tolerance)
//! - Catalog loading for the reference municipality list
//! - Session state machine (found set, countdown, high score)
//! - Game controller emitting presenter events

pub mod catalog;
pub mod error;
pub mod game;
pub mod matching;
pub mod normalize;
pub mod presenter;
pub mod resolver;
pub mod session;
pub mod store;
pub mod taunt;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use game::{Game, SubmitOutcome, TimerCommand};
pub use matching::{levenshtein_distance, MatchKind, MatchPolicy};
pub use normalize::normalize;
pub use presenter::{EventLog, GameEvent, Presenter};
pub use resolver::{resolve, Resolution};
pub use session::{HighScoreChange, MatchRecord, Phase, Session, Tick};
pub use store::{MemoryScoreStore, ScoreStore};
pub use taunt::{taunt_for, RandomSource, RngSource};
pub use types::{format_clock, Coordinate, Entity, GameSettings, Severity, RS_MUNICIPALITY_COUNT};
