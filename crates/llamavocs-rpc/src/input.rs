//! Input contracts for the card procedures.
//!
//! Each input type is what a client sends on the wire. [`Input::validate`]
//! turns raw JSON into the typed request the card store expects, or a
//! [`ValidationError`] naming every failing field.

use llamavocs_store::{
    CardFilter, CardId, CardLookup, DEFAULT_LIMIT, Difficulty, MAX_LIMIT, NewCard,
};
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use crate::validate::{InputReader, ValidationError};

/// A procedure input with a declared contract.
pub trait Input: Serialize + JsonSchema {
    /// The validated request handed to the procedure.
    type Valid: Send + 'static;

    /// Check raw input against the contract.
    fn validate(input: Value) -> Result<Self::Valid, ValidationError>;
}

/// Input for `card.getOne`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct GetOneInput {
    /// Card ID to fetch. Omit to fetch the most recently created card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl GetOneInput {
    /// Ask for the newest card.
    pub fn newest() -> Self {
        Self { id: None }
    }

    /// Ask for a specific card.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

impl Input for GetOneInput {
    type Valid = CardLookup;

    fn validate(input: Value) -> Result<CardLookup, ValidationError> {
        let mut reader = InputReader::new(input)?;
        let id = reader.optional_text("id", 0);
        reader.finish()?;

        // An empty id means "no id".
        Ok(id.filter(|id| !id.is_empty()).map(CardId::from).into())
    }
}

/// Input for `card.getAll`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct GetAllInput {
    /// Only return cards with exactly this language label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Maximum number of cards to return (1-100, default 10).
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1, max = 100))]
    pub limit: u32,
}

impl GetAllInput {
    /// All languages, default limit.
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

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for GetAllInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Input for GetAllInput {
    type Valid = CardFilter;

    fn validate(input: Value) -> Result<CardFilter, ValidationError> {
        let mut reader = InputReader::new(input)?;
        let language = reader.optional_text("language", 0);
        let limit = reader.integer(
            "limit",
            1..=i64::from(MAX_LIMIT),
            i64::from(DEFAULT_LIMIT),
        );
        reader.finish()?;

        Ok(CardFilter {
            language: language.filter(|language| !language.is_empty()),
            limit: u32::try_from(limit).unwrap_or(DEFAULT_LIMIT),
        })
    }
}

/// Input for `card.create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CreateInput {
    /// The prompt side of the card.
    #[schemars(length(min = 1))]
    pub front: String,
    /// The answer side of the card.
    #[schemars(length(min = 1))]
    pub back: String,
    /// Language label, e.g. "es".
    #[schemars(length(min = 1))]
    pub language: String,
    /// Difficulty from 1 (easy) to 5 (hard), default 1.
    #[serde(default = "default_difficulty")]
    #[schemars(range(min = 1, max = 5))]
    pub difficulty: u8,
}

impl CreateInput {
    /// A card with the default difficulty.
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            language: language.into(),
            difficulty: Difficulty::default().get(),
        }
    }

    /// Set the difficulty.
    pub fn difficulty(mut self, difficulty: u8) -> Self {
        self.difficulty = difficulty;
        self
    }
}

fn default_difficulty() -> u8 {
    Difficulty::default().get()
}

impl Input for CreateInput {
    type Valid = NewCard;

    fn validate(input: Value) -> Result<NewCard, ValidationError> {
        let mut reader = InputReader::new(input)?;
        let front = reader.required_text("front", 1);
        let back = reader.required_text("back", 1);
        let language = reader.required_text("language", 1);
        let difficulty = reader.integer(
            "difficulty",
            i64::from(Difficulty::MIN.get())..=i64::from(Difficulty::MAX.get()),
            i64::from(Difficulty::default().get()),
        );
        reader.finish()?;

        let difficulty = Difficulty::try_from(difficulty)
            .map_err(|e| ValidationError::single("difficulty", e.to_string()))?;

        Ok(NewCard::new(front, back, language).difficulty(difficulty))
    }
}
