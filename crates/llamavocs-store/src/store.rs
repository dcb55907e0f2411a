//! The SQLite-backed card store.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::{Card, CardFilter, CardId, CardLookup, Difficulty, MAX_LIMIT, NewCard};
use crate::sql;

/// Gateway over the card table.
///
/// Cloning is cheap: every clone shares the same connection. Open one store on
/// startup and hand clones to whatever needs card access.
///
/// Only [`create`](Self::create) writes. Failures from SQLite are returned
/// unmodified, without retries.
#[derive(Debug, Clone)]
pub struct CardStore {
    conn: Arc<Mutex<Connection>>,
}

impl CardStore {
    /// Open (or create) a store at the given database path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Opening card store");
        Self::from_connection(Connection::open(path)?)
    }

    /// Open a private in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Wrap an existing connection, creating the schema if needed.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(sql::SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Fetch a single card.
    ///
    /// Returns `Ok(None)` when no card matches: an unknown id or an empty
    /// table is not an error.
    pub fn fetch_one(&self, lookup: &CardLookup) -> Result<Option<Card>> {
        let conn = self.lock()?;
        let card = match lookup {
            CardLookup::ById(id) => conn
                .query_row(sql::SELECT_BY_ID, params![id.as_str()], card_from_row)
                .optional()?,
            CardLookup::Newest => conn
                .query_row(sql::SELECT_NEWEST, [], card_from_row)
                .optional()?,
        };

        debug!(?lookup, found = card.is_some(), "Fetched card");
        Ok(card)
    }

    /// List cards newest-first, optionally restricted to one language.
    pub fn fetch_many(&self, filter: &CardFilter) -> Result<Vec<Card>> {
        let limit = i64::from(filter.limit.clamp(1, MAX_LIMIT));
        let conn = self.lock()?;

        let cards = match &filter.language {
            Some(language) => {
                let mut stmt = conn.prepare(sql::SELECT_MANY_BY_LANGUAGE)?;
                let rows = stmt
                    .query_map(params![language, limit], card_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows
            }
            None => {
                let mut stmt = conn.prepare(sql::SELECT_MANY)?;
                let rows = stmt
                    .query_map(params![limit], card_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows
            }
        };

        debug!(language = ?filter.language, limit, count = cards.len(), "Listed cards");
        Ok(cards)
    }

    /// Insert a card and return it as persisted.
    ///
    /// The store assigns a fresh id and the current time. Empty text fields
    /// or an out-of-range difficulty are rejected by table constraints.
    pub fn create(&self, new: NewCard) -> Result<Card> {
        let card = Card {
            id: CardId::generate(),
            front: new.front,
            back: new.back,
            language: new.language,
            difficulty: new.difficulty,
            created_at: Utc::now(),
        };

        self.lock()?.execute(
            sql::INSERT,
            params![
                card.id.as_str(),
                card.front,
                card.back,
                card.language,
                card.difficulty.get(),
                encode_timestamp(&card.created_at),
            ],
        )?;

        info!(id = %card.id, language = %card.language, "Card created");
        Ok(card)
    }

    /// Number of cards in the store.
    pub fn count(&self) -> Result<u64> {
        let count: i64 = self.lock()?.query_row(sql::COUNT, [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| Error::LockPoisoned)
    }
}

fn encode_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn card_from_row(row: &Row<'_>) -> rusqlite::Result<Card> {
    let difficulty: i64 = row.get(4)?;
    let difficulty = Difficulty::try_from(difficulty)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Integer, Box::new(e)))?;

    let created_at: String = row.get(5)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?
        .with_timezone(&Utc);

    Ok(Card {
        id: CardId::new(row.get::<_, String>(0)?),
        front: row.get(1)?,
        back: row.get(2)?,
        language: row.get(3)?,
        difficulty,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_text_sorts_chronologically() {
        let earlier: DateTime<Utc> = "2024-03-01T12:00:00.5Z".parse().unwrap();
        let later: DateTime<Utc> = "2024-03-01T12:00:01Z".parse().unwrap();

        let (a, b) = (encode_timestamp(&earlier), encode_timestamp(&later));
        assert_eq!(a, "2024-03-01T12:00:00.500000000Z");
        assert!(a < b);
    }

    #[test]
    fn test_corrupt_difficulty_is_an_error() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE cards (seq INTEGER PRIMARY KEY, id TEXT, front TEXT, back TEXT,
             language TEXT, difficulty INTEGER, created_at TEXT);
             INSERT INTO cards VALUES (1, 'a', 'f', 'b', 'en', 9, '2024-03-01T12:00:00.000000000Z');",
        )
        .unwrap();
        let store = CardStore::from_connection(conn).unwrap();

        let err = store.fetch_one(&CardLookup::Newest).unwrap_err();
        assert!(matches!(err, Error::Sqlite(_)));
    }
}
