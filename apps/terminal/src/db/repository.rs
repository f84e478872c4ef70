//! Repository pattern for database access.

use crate::db::error::DbError;
use crate::db::schema::SCHEMA;
use quiz_core::ScoreStore;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

type Result<T> = std::result::Result<T, DbError>;

/// Key under which the high score is stored.
pub const HIGH_SCORE_KEY: &str = "high_score";

/// Repository for the persisted high score.
pub trait ScoreRepository {
    /// Stored high score, 0 when absent or unparseable.
    fn read_high_score(&self) -> Result<u32>;
    /// Store `score` if it beats the stored value. Returns whether it was written.
    fn write_high_score(&self, score: u32) -> Result<bool>;
}

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating it and its directory if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing, or when the file cannot be opened).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Raw stored value for `key`.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert or replace the value for `key`.
    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

impl ScoreRepository for SqliteRepository {
    fn read_high_score(&self) -> Result<u32> {
        let Some(raw) = self.get_value(HIGH_SCORE_KEY)? else {
            return Ok(0);
        };

        match raw.trim().parse::<u32>() {
            Ok(score) => Ok(score),
            Err(_) => {
                tracing::warn!(value = %raw, "stored high score is not a number, using 0");
                Ok(0)
            }
        }
    }

    fn write_high_score(&self, score: u32) -> Result<bool> {
        if score <= self.read_high_score()? {
            return Ok(false);
        }

        self.set_value(HIGH_SCORE_KEY, &score.to_string())?;
        Ok(true)
    }
}

impl ScoreStore for SqliteRepository {
    type Error = DbError;

    fn load_high_score(&self) -> u32 {
        self.read_high_score().unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to read high score, using 0");
            0
        })
    }

    fn save_high_score(&mut self, score: u32) -> std::result::Result<(), Self::Error> {
        self.write_high_score(score).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_high_score_reads_zero() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        assert_eq!(repo.read_high_score().unwrap(), 0);
        assert_eq!(repo.load_high_score(), 0);
    }

    #[test]
    fn malformed_high_score_reads_zero() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        for raw in ["abc", "-3", "", "12.5"] {
            repo.set_value(HIGH_SCORE_KEY, raw).unwrap();
            assert_eq!(repo.read_high_score().unwrap(), 0, "raw: {raw:?}");
        }
    }

    #[test]
    fn write_then_read() {
        let mut repo = SqliteRepository::open_in_memory().unwrap();
        repo.save_high_score(42).unwrap();
        assert_eq!(repo.load_high_score(), 42);
        assert_eq!(repo.get_value(HIGH_SCORE_KEY).unwrap().as_deref(), Some("42"));
    }

    #[test]
    fn never_lowers_stored_score() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        assert!(repo.write_high_score(10).unwrap());
        assert!(!repo.write_high_score(7).unwrap());
        assert!(!repo.write_high_score(10).unwrap());
        assert_eq!(repo.read_high_score().unwrap(), 10);
    }

    #[test]
    fn persists_across_connections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("quiz.db");
        {
            let repo = SqliteRepository::open(&path).unwrap();
            repo.write_high_score(17).unwrap();
        }
        let repo = SqliteRepository::open(&path).unwrap();
        assert_eq!(repo.read_high_score().unwrap(), 17);
    }
}
