//! Tests for the SQLite card gateway.

mod common;

use std::collections::HashSet;

use chrono::Utc;
use llamavocs_store::{CardFilter, CardId, CardLookup, CardStore, Difficulty, Error, NewCard};
use common::{memory_store, seed};

#[test]
fn test_create_assigns_id_and_timestamp() {
    let store = memory_store();
    let before = Utc::now();

    let card = store
        .create(NewCard::new("hola", "hello", "es").difficulty(Difficulty::try_from(3).unwrap()))
        .unwrap();

    assert!(!card.id.as_str().is_empty());
    assert!(card.created_at >= before);
    assert_eq!(card.front, "hola");
    assert_eq!(card.back, "hello");
    assert_eq!(card.language, "es");
    assert_eq!(card.difficulty.get(), 3);
}

#[test]
fn test_create_ids_are_unique() {
    let store = memory_store();
    let ids: HashSet<CardId> = (0..50)
        .map(|i| seed(&store, &format!("word {i}"), "en").id)
        .collect();

    assert_eq!(ids.len(), 50);
    assert_eq!(store.count().unwrap(), 50);
}

#[test]
fn test_create_defaults_difficulty() {
    let store = memory_store();
    let card = seed(&store, "bonjour", "fr");
    assert_eq!(card.difficulty, Difficulty::MIN);
}

#[test]
fn test_fetch_newest_returns_latest_created() {
    let store = memory_store();
    let _first = seed(&store, "uno", "es");
    let second = seed(&store, "dos", "es");

    let newest = store.fetch_one(&CardLookup::Newest).unwrap();
    assert_eq!(newest, Some(second));
}

#[test]
fn test_fetch_newest_on_empty_store() {
    let store = memory_store();
    assert_eq!(store.fetch_one(&CardLookup::Newest).unwrap(), None);
}

#[test]
fn test_fetch_by_id() {
    let store = memory_store();
    let first = seed(&store, "uno", "es");
    let _second = seed(&store, "dos", "es");

    let found = store
        .fetch_one(&CardLookup::ById(first.id.clone()))
        .unwrap();
    assert_eq!(found, Some(first));
}

#[test]
fn test_fetch_unknown_id_is_absent() {
    let store = memory_store();
    seed(&store, "uno", "es");

    let found = store
        .fetch_one(&CardLookup::ById(CardId::new("nonexistent")))
        .unwrap();
    assert_eq!(found, None);
}

#[test]
fn test_fetch_many_limit_newest_first() {
    let store = memory_store();
    let _a = seed(&store, "a", "en");
    let b = seed(&store, "b", "en");
    let c = seed(&store, "c", "en");

    let cards = store.fetch_many(&CardFilter::new().limit(2)).unwrap();
    assert_eq!(cards, vec![c, b]);
}

#[test]
fn test_fetch_many_by_language() {
    let store = memory_store();
    let hola = seed(&store, "hola", "es");
    seed(&store, "hello", "en");
    let adios = seed(&store, "adios", "es");

    let cards = store.fetch_many(&CardFilter::new().language("es")).unwrap();
    assert_eq!(cards, vec![adios, hola]);
    assert!(cards.iter().all(|c| c.language == "es"));
}

#[test]
fn test_fetch_many_empty() {
    let store = memory_store();
    assert!(store.fetch_many(&CardFilter::new()).unwrap().is_empty());

    seed(&store, "hello", "en");
    assert!(
        store
            .fetch_many(&CardFilter::new().language("de"))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_fetch_many_clamps_limit() {
    let store = memory_store();
    for i in 0..3 {
        seed(&store, &format!("word {i}"), "en");
    }

    assert_eq!(store.fetch_many(&CardFilter::new().limit(0)).unwrap().len(), 1);
    assert_eq!(store.fetch_many(&CardFilter::new().limit(1000)).unwrap().len(), 3);
}

#[test]
fn test_reads_do_not_mutate() {
    let store = memory_store();
    seed(&store, "uno", "es");
    seed(&store, "dos", "es");

    let first = store.fetch_many(&CardFilter::new()).unwrap();
    let newest = store.fetch_one(&CardLookup::Newest).unwrap();
    let again = store.fetch_many(&CardFilter::new()).unwrap();

    assert_eq!(first, again);
    assert_eq!(newest.as_ref(), first.first());
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn test_empty_text_rejected_by_constraints() {
    let store = memory_store();

    let err = store.create(NewCard::new("", "x", "en")).unwrap_err();
    assert!(matches!(err, Error::Sqlite(_)));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.db");

    let card = {
        let store = CardStore::open(&path).unwrap();
        seed(&store, "danke", "de")
    };

    let reopened = CardStore::open(&path).unwrap();
    assert_eq!(reopened.fetch_one(&CardLookup::Newest).unwrap(), Some(card));
}

#[test]
fn test_clones_share_connection() {
    let store = memory_store();
    let clone = store.clone();

    let card = seed(&clone, "ciao", "it");
    assert_eq!(store.fetch_one(&CardLookup::ById(card.id.clone())).unwrap(), Some(card));
}
