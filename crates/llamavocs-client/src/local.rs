//! In-process card source.

use llamavocs_rpc::{Caller, GetOneInput};
use llamavocs_store::Card;

use crate::error::{Error, Result};
use crate::view::CardSource;

/// Runs `card.getOne` through the in-process router, with the same input
/// validation as the HTTP transport.
impl CardSource for Caller {
    async fn get_one(&self, input: GetOneInput) -> Result<Option<Card>> {
        self.card().get_one(input).await.map_err(Error::from)
    }
}
