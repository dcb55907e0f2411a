//! Card procedures.
//!
//! # Example
//!
//! ```no_run
//! use llamavocs_client::{CreateInput, GetAllInput, LlamaClient};
//!
//! # async fn example() -> llamavocs_client::Result<()> {
//! let client = LlamaClient::new();
//!
//! client.cards().create(CreateInput::new("hola", "hello", "es").difficulty(2)).await?;
//!
//! for card in client.cards().get_all(GetAllInput::new().language("es")).await? {
//!     println!("{}: {}", card.front, card.back);
//! }
//! # Ok(())
//! # }
//! ```

use llamavocs_rpc::{CreateInput, GetAllInput, GetOneInput};
use llamavocs_store::Card;

use crate::client::LlamaClient;
use crate::error::Result;

/// Provides access to the `card` procedures.
///
/// Obtained via [`LlamaClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a LlamaClient,
}

impl CardActions<'_> {
    /// Fetch one card (`card.getOne`).
    ///
    /// Returns `Ok(None)` when no card matches; that is not an error.
    pub async fn get_one(&self, input: GetOneInput) -> Result<Option<Card>> {
        self.client.query_nullable("card.getOne", &input).await
    }

    /// Fetch the most recently created card.
    pub async fn newest(&self) -> Result<Option<Card>> {
        self.get_one(GetOneInput::newest()).await
    }

    /// Fetch a card by ID.
    pub async fn get(&self, id: &str) -> Result<Option<Card>> {
        self.get_one(GetOneInput::by_id(id)).await
    }

    /// List cards newest-first (`card.getAll`).
    pub async fn get_all(&self, input: GetAllInput) -> Result<Vec<Card>> {
        self.client.query("card.getAll", &input).await
    }

    /// Create a card (`card.create`).
    pub async fn create(&self, input: CreateInput) -> Result<Card> {
        self.client.mutate("card.create", &input).await
    }
}
