//! Typed client and card view for LlamaVocs.
//!
//! [`LlamaClient`] calls the `card.*` procedures of a LlamaVocs server over
//! HTTP, decoding results into [`Card`]s and surfacing server-side failures
//! as [`Error::Remote`]. [`CardView`] drives a single "newest card" call from
//! any [`CardSource`] and renders its outcome as a [`Panel`].
//!
//! # Quick Start
//!
//! ```no_run
//! use llamavocs_client::{CreateInput, LlamaClient};
//!
//! # async fn example() -> llamavocs_client::Result<()> {
//! let client = LlamaClient::new();
//!
//! let card = client.cards().create(CreateInput::new("hola", "hello", "es")).await?;
//! println!("created {}", card.id);
//!
//! if let Some(newest) = client.cards().newest().await? {
//!     println!("{} -> {}", newest.front, newest.back);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `local` - implements [`CardSource`] for `llamavocs_rpc::Caller`, so a
//!   view can run against an in-process router without HTTP.

mod cards;
mod client;
mod error;
pub mod panel;
pub mod view;

#[cfg(feature = "local")]
mod local;

pub use cards::CardActions;
pub use client::{ClientBuilder, LlamaClient};
pub use error::{Error, Result};
pub use panel::{Panel, page};
pub use view::{CardSource, CardView, ViewState};

// Re-export the types that appear in the public API.
pub use llamavocs_rpc::{CreateInput, GetAllInput, GetOneInput, RpcError};
pub use llamavocs_store::Card;
