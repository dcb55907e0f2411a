//! Common test utilities for card store tests.

use llamavocs_store::{Card, CardStore, NewCard};

/// Open a fresh in-memory store.
pub fn memory_store() -> CardStore {
    CardStore::open_in_memory().expect("in-memory store")
}

/// Insert a card with the given front text and language.
pub fn seed(store: &CardStore, front: &str, language: &str) -> Card {
    store
        .create(NewCard::new(front, format!("{front} (answer)"), language))
        .expect("seed card")
}
