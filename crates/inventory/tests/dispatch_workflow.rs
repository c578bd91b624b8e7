//! Black-box workflow tests: free text in, notices and ledger state out.

use stockroom_core::StockKey;
use stockroom_inventory::{Depot, DepotConfig, Notice, parse_pairs};

fn key(kind: char, quantity: i64) -> StockKey {
    StockKey::new(kind, quantity).unwrap()
}

fn seeded_depot() -> Depot {
    let mut depot = Depot::new(DepotConfig::default()).unwrap();
    let mut sink: Vec<Notice> = Vec::new();
    depot
        .bulk_receive(parse_pairs("A1, B2, C10, A3"), &mut sink)
        .unwrap();
    assert_eq!(sink, vec![Notice::Received { count: 4 }]);
    depot
}

#[test]
fn demo_scenario_fifo_backorder_and_threshold() {
    let mut depot = seeded_depot();
    let a1_id = depot
        .ledger()
        .iter()
        .find(|u| u.key() == key('A', 1))
        .map(|u| u.id_typed())
        .unwrap();

    // First A1 succeeds with the unit received as A1 (not A3); none remain, so it alerts.
    let mut sink: Vec<Notice> = Vec::new();
    let outcome = depot.bulk_dispatch(parse_pairs("a1"), &mut sink).unwrap();
    assert_eq!(outcome.parcel.layers()[0].unit_id, a1_id);
    assert_eq!(outcome.parcel.layers()[0].key, key('A', 1));
    assert_eq!(depot.ledger().count_matching(key('A', 3)), 1);
    assert_eq!(depot.alerts().render(), vec!["A1"]);

    // Second A1 is a backorder and alerts unconditionally.
    let mut sink: Vec<Notice> = Vec::new();
    let outcome = depot.bulk_dispatch(parse_pairs("A1"), &mut sink).unwrap();
    assert_eq!(outcome.backordered, vec![key('A', 1)]);
    assert!(outcome.parcel.is_empty());
    assert_eq!(
        sink.iter()
            .filter(|n| matches!(n, Notice::Backorder { .. }))
            .count(),
        1
    );
    assert_eq!(depot.alerts().render(), vec!["A1", "A1"]);

    // B2 succeeds; zero left is below the minimum of 2.
    let outcome = depot
        .bulk_dispatch(parse_pairs("B2"), &mut Vec::<Notice>::new())
        .unwrap();
    assert_eq!(outcome.parcel.quantities(), vec![2]);
    assert_eq!(depot.alerts().render(), vec!["A1", "A1", "B2"]);

    assert_eq!(depot.ledger().len(), 2);
}

#[test]
fn mixed_parcel_is_listed_smallest_first() {
    let mut depot = seeded_depot();
    let mut sink: Vec<Notice> = Vec::new();

    let outcome = depot
        .bulk_dispatch(parse_pairs("A1 C10 A3"), &mut sink)
        .unwrap();

    assert_eq!(outcome.parcel.quantities(), vec![1, 3, 10]);
    assert!(depot.ledger().iter().all(|u| u.key() == key('B', 2)));

    let listing: Vec<String> = sink
        .iter()
        .filter(|n| {
            matches!(
                n,
                Notice::ParcelOpened | Notice::ParcelLayer(_) | Notice::ParcelSealed { .. }
            )
        })
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        listing,
        vec![
            "--- PARCEL (top -> bottom) ---",
            "|  1: type A | vol 1 |",
            "|  2: type A | vol 3 |",
            "|  3: type C | vol 10 |",
            "| bottom ---------------------|",
        ]
    );
}

#[test]
fn alert_log_keeps_only_the_latest_three() {
    let mut depot = Depot::new(DepotConfig::default()).unwrap();
    let mut sink: Vec<Notice> = Vec::new();

    depot
        .bulk_dispatch(parse_pairs("W1 X2 Y3 Z4"), &mut sink)
        .unwrap();

    assert_eq!(depot.alerts().render(), vec!["X2", "Y3", "Z4"]);
    assert_eq!(depot.alerts().len(), 3);
}

#[test]
fn malformed_tokens_do_not_mask_valid_ones() {
    let mut depot = Depot::new(DepotConfig::default()).unwrap();

    let count = depot
        .bulk_receive(parse_pairs("A, B0, Cx, D-1, e5"), &mut Vec::<Notice>::new())
        .unwrap();

    assert_eq!(count, 1);
    assert_eq!(depot.ledger().count_matching(key('E', 5)), 1);
}
