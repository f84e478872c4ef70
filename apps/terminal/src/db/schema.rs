//! SQLite schema definitions.

/// Complete schema for the local SQLite database.
pub const SCHEMA: &str = r#"
-- Named values (high score)
CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;
