//! Vocabulary card types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of cards returned by [`CardFilter`] when no limit is given.
pub const DEFAULT_LIMIT: u32 = 10;

/// Upper bound on the number of cards a single listing may return.
pub const MAX_LIMIT: u32 = 100;

/// Opaque card identifier, assigned by the store at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wrap an identifier received from a caller.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier for a new card.
    #[cfg(feature = "sqlite")]
    pub(crate) fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A difficulty outside of `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("difficulty must be between 1 and 5, got {0}")]
pub struct InvalidDifficulty(pub i64);

/// Card difficulty on a 1 (easy) to 5 (hard) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    /// Easiest difficulty, and the default.
    pub const MIN: Difficulty = Difficulty(1);
    /// Hardest difficulty.
    pub const MAX: Difficulty = Difficulty(5);

    /// The difficulty as a plain number.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = InvalidDifficulty;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(InvalidDifficulty(value))
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> u8 {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted vocabulary card.
///
/// Serialized with camelCase keys:
/// `{ id, front, back, language, difficulty, createdAt }`. Every key is
/// required when decoding, so a payload missing a field is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique, immutable identifier.
    pub id: CardId,
    /// The prompt side.
    pub front: String,
    /// The answer side.
    pub back: String,
    /// Language label, used for filtering.
    pub language: String,
    /// Difficulty from 1 to 5.
    pub difficulty: Difficulty,
    /// Creation time; cards are ordered newest-first by this value.
    pub created_at: DateTime<Utc>,
}

/// A card to be inserted. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCard {
    /// The prompt side. Must be non-empty.
    pub front: String,
    /// The answer side. Must be non-empty.
    pub back: String,
    /// Language label. Must be non-empty.
    pub language: String,
    /// Difficulty, defaulting to 1.
    pub difficulty: Difficulty,
}

impl NewCard {
    /// Create a new card with the default difficulty.
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            language: language.into(),
            difficulty: Difficulty::default(),
        }
    }

    /// Set the difficulty.
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

/// Which single card to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardLookup {
    /// The card with exactly this identifier.
    ById(CardId),
    /// The most recently created card.
    #[default]
    Newest,
}

impl From<Option<CardId>> for CardLookup {
    fn from(id: Option<CardId>) -> Self {
        match id {
            Some(id) => CardLookup::ById(id),
            None => CardLookup::Newest,
        }
    }
}

/// Which cards to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFilter {
    /// Only return cards with exactly this language label.
    pub language: Option<String>,
    /// Maximum number of cards. Clamped to `1..=MAX_LIMIT` by the store.
    pub limit: u32,
}

impl CardFilter {
    /// All languages, [`DEFAULT_LIMIT`] cards.
    pub fn new() -> Self {
        Self {
            language: None,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Restrict to one language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the maximum number of cards.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for CardFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_bounds() {
        assert_eq!(Difficulty::try_from(1).unwrap().get(), 1);
        assert_eq!(Difficulty::try_from(5).unwrap().get(), 5);
        assert_eq!(Difficulty::try_from(0), Err(InvalidDifficulty(0)));
        assert_eq!(Difficulty::try_from(6), Err(InvalidDifficulty(6)));
        assert_eq!(Difficulty::default(), Difficulty::MIN);
    }

    #[test]
    fn test_difficulty_serde_rejects_out_of_range() {
        let ok: Difficulty = serde_json::from_str("3").unwrap();
        assert_eq!(ok.get(), 3);
        assert!(serde_json::from_str::<Difficulty>("6").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "3");
    }

    #[test]
    fn test_card_json_shape() {
        let card = Card {
            id: CardId::new("abc"),
            front: "hola".to_string(),
            back: "hello".to_string(),
            language: "es".to_string(),
            difficulty: Difficulty::try_from(2).unwrap(),
            created_at: "2024-03-01T12:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["difficulty"], 2);
        assert_eq!(json["createdAt"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn test_card_missing_field_rejected() {
        let result = serde_json::from_value::<Card>(serde_json::json!({
            "id": "abc",
            "front": "hola",
            "language": "es",
            "difficulty": 1,
            "createdAt": "2024-03-01T12:00:00Z"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_lookup_from_option() {
        assert_eq!(CardLookup::from(None), CardLookup::Newest);
        assert_eq!(
            CardLookup::from(Some(CardId::new("x"))),
            CardLookup::ById(CardId::new("x"))
        );
    }

    #[test]
    fn test_filter_builder() {
        let filter = CardFilter::new().language("es").limit(2);
        assert_eq!(filter.language.as_deref(), Some("es"));
        assert_eq!(filter.limit, 2);
        assert_eq!(CardFilter::default().limit, DEFAULT_LIMIT);
    }
}
