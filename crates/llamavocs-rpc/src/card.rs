//! The `card` procedures.
//!
//! | Path | Kind | Input | Output |
//! |---|---|---|---|
//! | `card.getOne` | query | [`GetOneInput`] | `Card \| null` |
//! | `card.getAll` | query | [`GetAllInput`] | `Card[]` |
//! | `card.create` | mutation | [`CreateInput`] | `Card` |

use llamavocs_store::{Card, CardFilter, CardLookup, CardStore, NewCard};

use crate::error::Result;
use crate::input::{CreateInput, GetAllInput, GetOneInput};
use crate::router::{Caller, Router};

/// Procedures over the card store, unprefixed.
pub fn router() -> Router {
    Router::new()
        .query::<GetOneInput, _, _>("getOne", get_one)
        .query::<GetAllInput, _, _>("getAll", get_all)
        .mutation::<CreateInput, _, _>("create", create)
}

fn get_one(store: &CardStore, lookup: CardLookup) -> llamavocs_store::Result<Option<Card>> {
    store.fetch_one(&lookup)
}

fn get_all(store: &CardStore, filter: CardFilter) -> llamavocs_store::Result<Vec<Card>> {
    store.fetch_many(&filter)
}

fn create(store: &CardStore, card: NewCard) -> llamavocs_store::Result<Card> {
    store.create(card)
}

/// Typed access to the `card` procedures of a [`Caller`].
///
/// Obtained via [`Caller::card()`].
#[derive(Clone, Copy)]
pub struct CardCaller<'a> {
    pub(crate) caller: &'a Caller,
}

impl CardCaller<'_> {
    /// Fetch one card, or `None` if nothing matches.
    pub async fn get_one(&self, input: GetOneInput) -> Result<Option<Card>> {
        self.caller.call_typed("card.getOne", &input).await
    }

    /// List cards newest-first.
    pub async fn get_all(&self, input: GetAllInput) -> Result<Vec<Card>> {
        self.caller.call_typed("card.getAll", &input).await
    }

    /// Create a card.
    pub async fn create(&self, input: CreateInput) -> Result<Card> {
        self.caller.call_typed("card.create", &input).await
    }
}
