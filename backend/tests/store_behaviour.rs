//! Behavioural tests for the region store through its public API.

use std::sync::{Arc, Barrier};
use std::thread;

use region_server::domain::ports::{RegionRepository, RegionRepositoryError};
use region_server::domain::{Coordinate, Polygon, PolygonError, Region, regions_containing};
use region_server::outbound::memory::RegionStore;
use rstest::{fixture, rstest};

const WRITERS: usize = 32;

fn ring(points: &[[f64; 2]]) -> Vec<Coordinate> {
    points.iter().copied().map(Coordinate::from).collect()
}

fn square(name: &str) -> Region {
    Region::new(
        name,
        ring(&[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]]),
    )
    .expect("valid region")
}

#[fixture]
fn store() -> RegionStore {
    RegionStore::new()
}

#[rstest]
fn region_lifecycle_is_case_insensitive(store: RegionStore) {
    let created = store.create(square("valid")).expect("create");
    assert_eq!(created.name(), "Valid");

    for name in ["VALID", "Valid", "vALiD"] {
        let found = store.get_by_name(name).expect("lookup ignores case");
        assert_eq!(found, created);
    }

    let missing = store.get_by_name("not here").expect_err("absent");
    assert_eq!(missing, RegionRepositoryError::not_found("not here"));

    let duplicate = store.create(square("VaLiD")).expect_err("duplicate");
    assert_eq!(duplicate, RegionRepositoryError::duplicate("Valid"));

    store.delete("valid");
    assert!(store.get_all().is_empty());
}

#[rstest]
fn counter_clockwise_ring_is_repaired_on_the_way_in(store: RegionStore) {
    let raw = ring(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [0.0, 0.0]]);
    assert!(matches!(
        Polygon::validate_ring(&raw),
        Err(PolygonError::CounterClockwise { angle }) if angle > 0.0
    ));

    let created = store
        .create(Region::new("Sliver", raw.clone()).expect("repaired"))
        .expect("create");
    let mut reversed = raw;
    reversed.reverse();
    assert_eq!(created.border().coordinates(), reversed.as_slice());
    created.border().validate().expect("stored ring is clockwise");
}

#[rstest]
fn concurrent_creates_admit_exactly_one(store: RegionStore) {
    let store = Arc::new(store);
    let barrier = Arc::new(Barrier::new(WRITERS));

    let handles: Vec<_> = (0..WRITERS)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.create(square("contested"))
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("writer thread"))
        .collect();

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .filter_map(|result| result.as_ref().err())
            .all(|err| *err == RegionRepositoryError::duplicate("Contested"))
    );
    assert_eq!(store.len(), 1);
}

#[rstest]
fn readers_see_whole_regions_while_writers_churn(store: RegionStore) {
    let store = Arc::new(store);
    let names: Vec<String> = (0..8).map(|index| format!("Region {index}")).collect();

    let writer = {
        let store = Arc::clone(&store);
        let names = names.clone();
        thread::spawn(move || {
            for _ in 0..50 {
                for name in &names {
                    store.create(square(name)).expect("name is free");
                }
                for name in &names {
                    store.delete(name);
                }
            }
        })
    };

    let reader = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for _ in 0..200 {
                for region in store.get_all() {
                    assert_eq!(region.border().len(), 5);
                    assert!(region.contains(Coordinate::lat_lng(5.0, 5.0)));
                }
            }
        })
    };

    writer.join().expect("writer thread");
    reader.join().expect("reader thread");
    assert!(store.is_empty());
}

#[rstest]
#[tokio::test]
async fn port_answers_location_queries(store: RegionStore) {
    let repo: Arc<dyn RegionRepository> = Arc::new(store);
    repo.create_region(square("Square")).await.expect("create");
    repo.create_region(
        Region::new(
            "Far",
            ring(&[[50.0, 50.0], [50.0, 60.0], [60.0, 60.0], [60.0, 50.0], [50.0, 50.0]]),
        )
        .expect("valid region"),
    )
    .await
    .expect("create");

    let regions = repo.list_regions().await;
    assert_eq!(
        regions_containing(&regions, Coordinate::lat_lng(5.0, 5.0)),
        ["Square"]
    );
    assert!(regions_containing(&regions, Coordinate::lat_lng(30.0, 30.0)).is_empty());
}
