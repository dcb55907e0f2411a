//! Vocabulary card model and the SQLite card store behind LlamaVocs.
//!
//! The crate has two halves:
//!
//! - [`model`] - the [`Card`] entity and the typed requests the store accepts
//!   ([`CardLookup`], [`CardFilter`], [`NewCard`]). Always available.
//! - [`CardStore`] - the gateway translating those requests into SQL against a
//!   single shared SQLite connection. Requires the `sqlite` feature (default).
//!
//! # Example
//!
//! ```no_run
//! use llamavocs_store::{CardFilter, CardLookup, CardStore, NewCard};
//!
//! # fn example() -> llamavocs_store::Result<()> {
//! let store = CardStore::open("llamavocs.db")?;
//!
//! let card = store.create(NewCard::new("hola", "hello", "es"))?;
//! assert_eq!(store.fetch_one(&CardLookup::Newest)?, Some(card));
//!
//! let spanish = store.fetch_many(&CardFilter::new().language("es").limit(5))?;
//! println!("{} Spanish cards", spanish.len());
//! # Ok(())
//! # }
//! ```
//!
//! Cards are immutable once created: the store exposes no update or delete.

mod error;
pub mod model;

#[cfg(feature = "sqlite")]
mod sql;

#[cfg(feature = "sqlite")]
mod store;

pub use error::{Error, Result};
pub use model::{
    Card, CardFilter, CardId, CardLookup, DEFAULT_LIMIT, Difficulty, InvalidDifficulty, MAX_LIMIT,
    NewCard,
};

#[cfg(feature = "sqlite")]
pub use store::CardStore;
