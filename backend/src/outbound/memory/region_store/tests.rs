//! Tests for the in-memory region store.

use std::sync::{Arc, Barrier};
use std::thread;

use super::*;
use crate::domain::Coordinate;
use rstest::{fixture, rstest};

fn region(name: &str) -> Region {
    Region::new(
        name,
        [[0.0, 0.0], [2.0, 2.0], [1.0, 1.0], [0.0, 0.0]]
            .map(Coordinate::from)
            .to_vec(),
    )
    .expect("valid region")
}

#[fixture]
fn store() -> RegionStore {
    let store = RegionStore::new();
    store.create(region("valid")).expect("seed region");
    store
}

#[rstest]
#[case("VALID")]
#[case("Valid")]
#[case("vALiD")]
#[case("valid")]
fn lookup_ignores_case(store: RegionStore, #[case] name: &str) {
    let found = store.get_by_name(name).expect("region is stored");
    assert_eq!(found.name(), "Valid");
}

#[rstest]
#[case("")]
#[case(".valid")]
#[case("Valid ")]
#[case("not here")]
fn lookup_reports_the_requested_name(store: RegionStore, #[case] name: &str) {
    let err = store.get_by_name(name).expect_err("no such region");
    assert_eq!(err, RegionRepositoryError::not_found(name));
}

#[rstest]
#[case("valid")]
#[case("VALID")]
#[case("vAlId")]
fn duplicate_names_are_rejected(store: RegionStore, #[case] name: &str) {
    let err = store.create(region(name)).expect_err("name is taken");
    assert_eq!(err, RegionRepositoryError::duplicate("Valid"));
    assert_eq!(store.len(), 1);
}

#[rstest]
fn create_returns_the_normalised_region() {
    let store = RegionStore::new();
    let created = store.create(region("new york")).expect("insert succeeds");
    assert_eq!(created.name(), "New York");
    assert_eq!(store.get_by_name("new york"), Ok(created));
}

#[rstest]
#[case("ßmall town", "Ssmall Town")]
#[case("ﬁre island", "Fire Island")]
#[case("new york", "New York")]
fn stored_name_finds_its_region(#[case] raw: &str, #[case] canonical: &str) {
    let store = RegionStore::new();
    let created = store.create(region(raw)).expect("insert succeeds");
    assert_eq!(created.name(), canonical);
    assert_eq!(store.get_by_name(created.name()), Ok(created.clone()));

    let again = store.create(region(created.name()));
    assert_eq!(again, Err(RegionRepositoryError::duplicate(canonical)));
    assert_eq!(store.len(), 1);

    assert!(store.delete(created.name()));
    assert!(store.is_empty());
}

#[rstest]
fn get_all_returns_a_snapshot(store: RegionStore) {
    let snapshot = store.get_all();
    store.create(region("other")).expect("insert succeeds");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(store.get_all().len(), 2);
}

#[rstest]
fn delete_is_case_insensitive_and_idempotent(store: RegionStore) {
    assert!(store.delete("VALID"));
    assert!(store.is_empty());
    assert!(store.get_all().is_empty());

    assert!(!store.delete("valid"));
    assert!(!store.delete("never existed"));
    assert!(store.is_empty());
}

#[rstest]
fn deleted_names_can_be_reused(store: RegionStore) {
    assert!(store.delete("valid"));
    store.create(region("Valid")).expect("name is free again");
    assert_eq!(store.len(), 1);
}

#[rstest]
fn concurrent_creates_admit_exactly_one() {
    const WRITERS: usize = 16;
    let store = Arc::new(RegionStore::new());
    let barrier = Arc::new(Barrier::new(WRITERS));

    let handles: Vec<_> = ["race", "RACE", "Race"]
        .into_iter()
        .cycle()
        .take(WRITERS)
        .map(|name| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.create(region(name))
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("writer thread completes"))
        .collect();

    let created = results.iter().filter(|result| result.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|result| matches!(result, Err(RegionRepositoryError::Duplicate { .. })))
        .count();
    assert_eq!(created, 1);
    assert_eq!(duplicates, WRITERS - 1);
    assert_eq!(store.len(), 1);
}

#[rstest]
#[tokio::test]
async fn repository_port_delegates_to_the_store(store: RegionStore) {
    let repository: &dyn RegionRepository = &store;
    assert_eq!(repository.list_regions().await.len(), 1);
    assert!(repository.get_region("VALID").await.is_ok());

    let created = repository
        .create_region(region("second"))
        .await
        .expect("insert succeeds");
    assert_eq!(created.name(), "Second");

    assert!(repository.delete_region("second").await);
    assert!(!repository.delete_region("second").await);
    assert!(matches!(
        repository.get_region("second").await,
        Err(RegionRepositoryError::NotFound { .. })
    ));
}
