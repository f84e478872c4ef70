//! Local SQLite storage for the high score.

pub mod error;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use repository::{ScoreRepository, SqliteRepository, HIGH_SCORE_KEY};
