//! Typed, schema-validated procedures over the LlamaVocs card store.
//!
//! Every card operation is a named procedure under the `card` group:
//! `card.getOne`, `card.getAll` and `card.create`. Each declares an input
//! contract ([`GetOneInput`], [`GetAllInput`], [`CreateInput`]); input that
//! violates it is rejected with field-level [`Issue`]s before the store is
//! touched.
//!
//! # Quick Start
//!
//! ```no_run
//! use llamavocs_rpc::{CreateInput, GetOneInput, app_router};
//! use llamavocs_store::CardStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let caller = app_router().caller(CardStore::open_in_memory()?);
//!
//! caller.card().create(CreateInput::new("hola", "hello", "es")).await?;
//! let newest = caller.card().get_one(GetOneInput::newest()).await?;
//! assert_eq!(newest.map(|c| c.front), Some("hola".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `server` (default) - the procedure [`Router`], the in-process [`Caller`]
//!   and the axum transport in [`http`]. Without it, only the input contracts
//!   and wire types are available, which is all a client needs.

mod error;
pub mod input;
pub mod validate;

#[cfg(feature = "server")]
pub mod card;

#[cfg(feature = "server")]
pub mod http;

#[cfg(feature = "server")]
mod router;

pub use error::{Envelope, ErrorCode, Result, RpcError};
pub use input::{CreateInput, GetAllInput, GetOneInput, Input};
pub use validate::{Issue, ValidationError};

#[cfg(feature = "server")]
pub use router::{Caller, ProcedureInfo, ProcedureKind, Router};

/// The application router: every procedure group, mounted by name.
#[cfg(feature = "server")]
pub fn app_router() -> Router {
    Router::new().nest("card", card::router())
}
