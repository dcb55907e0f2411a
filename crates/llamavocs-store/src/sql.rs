//! SQLite schema and queries for the card table.
//!
//! `created_at` is stored as RFC 3339 text with nanosecond precision and a
//! `Z` suffix, so lexical order equals chronological order. `seq` breaks ties
//! between cards created within the same instant.

/// SQL to create the database schema.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS cards (
    seq             INTEGER PRIMARY KEY AUTOINCREMENT,
    id              TEXT NOT NULL UNIQUE,
    front           TEXT NOT NULL CHECK (length(front) > 0),
    back            TEXT NOT NULL CHECK (length(back) > 0),
    language        TEXT NOT NULL CHECK (length(language) > 0),
    difficulty      INTEGER NOT NULL DEFAULT 1 CHECK (difficulty BETWEEN 1 AND 5),
    created_at      TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS ix_cards_created ON cards (created_at DESC, seq DESC);
CREATE INDEX IF NOT EXISTS ix_cards_language ON cards (language, created_at DESC, seq DESC);
"#;

pub const SELECT_BY_ID: &str = "SELECT id, front, back, language, difficulty, created_at
     FROM cards WHERE id = ?1";

pub const SELECT_NEWEST: &str = "SELECT id, front, back, language, difficulty, created_at
     FROM cards ORDER BY created_at DESC, seq DESC LIMIT 1";

pub const SELECT_MANY: &str = "SELECT id, front, back, language, difficulty, created_at
     FROM cards ORDER BY created_at DESC, seq DESC LIMIT ?1";

pub const SELECT_MANY_BY_LANGUAGE: &str = "SELECT id, front, back, language, difficulty, created_at
     FROM cards WHERE language = ?1 ORDER BY created_at DESC, seq DESC LIMIT ?2";

pub const INSERT: &str = "INSERT INTO cards (id, front, back, language, difficulty, created_at)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

pub const COUNT: &str = "SELECT COUNT(*) FROM cards";
