// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use afflens::models::TrafficItem;
use afflens::pipeline::sort::{sort, Direction, SortState};
use chrono::NaiveDate;

fn item(id: &str, brand: &str, clicks: i64, day: u32) -> TrafficItem {
    TrafficItem {
        id: id.into(),
        brand: brand.into(),
        tracker_id: "TRK-101".into(),
        currency: "USD".into(),
        impressions: 10_000,
        clicks,
        signups: 10,
        deposits: 5,
        updated_at: NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
    }
}

fn ids(items: &[TrafficItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn numeric_ascending_and_descending() {
    let records = vec![item("T1", "A", 300, 1), item("T2", "B", 100, 2), item("T3", "C", 200, 3)];
    let asc = sort(&records, "clicks", Direction::Ascending);
    assert_eq!(ids(&asc), vec!["T2", "T3", "T1"]);

    let desc = sort(&records, "clicks", Direction::Descending);
    assert_eq!(ids(&desc), vec!["T1", "T3", "T2"]);
}

#[test]
fn descending_is_reverse_of_ascending_for_distinct_values() {
    let records = vec![item("T1", "A", 40, 1), item("T2", "B", 10, 2), item("T3", "C", 30, 3), item("T4", "D", 20, 4)];
    let asc = sort(&records, "clicks", Direction::Ascending);
    let desc = sort(&records, "clicks", Direction::Descending);
    let mut reversed = asc;
    reversed.reverse();
    assert_eq!(ids(&reversed), ids(&desc));
}

#[test]
fn sort_is_idempotent() {
    let records = vec![item("T1", "B", 100, 1), item("T2", "A", 100, 2), item("T3", "C", 50, 3)];
    let once = sort(&records, "clicks", Direction::Descending);
    let twice = sort(&once, "clicks", Direction::Descending);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn ties_preserve_input_order_in_both_directions() {
    let records = vec![item("T1", "B", 100, 1), item("T2", "A", 100, 2), item("T3", "C", 100, 3)];
    let asc = sort(&records, "clicks", Direction::Ascending);
    assert_eq!(ids(&asc), vec!["T1", "T2", "T3"]);
    let desc = sort(&records, "clicks", Direction::Descending);
    assert_eq!(ids(&desc), vec!["T1", "T2", "T3"]);
}

#[test]
fn string_and_timestamp_sorts() {
    let records = vec![item("T1", "Velobet", 1, 9), item("T2", "BetRoyal", 2, 3), item("T3", "NorthPeak", 3, 6)];
    let by_brand = sort(&records, "brand", Direction::Ascending);
    assert_eq!(ids(&by_brand), vec!["T2", "T3", "T1"]);

    let by_date = sort(&records, "updated_at", Direction::Descending);
    assert_eq!(ids(&by_date), vec!["T1", "T3", "T2"]);
}

#[test]
fn unknown_sort_key_leaves_order_alone() {
    let records = vec![item("T1", "B", 300, 1), item("T2", "A", 100, 2), item("T3", "C", 200, 3)];
    let out = sort(&records, "no_such_field", Direction::Descending);
    assert_eq!(ids(&out), vec!["T1", "T2", "T3"]);
}

#[test]
fn input_is_never_mutated() {
    let records = vec![item("T1", "B", 300, 1), item("T2", "A", 100, 2)];
    let _ = sort(&records, "clicks", Direction::Ascending);
    assert_eq!(ids(&records), vec!["T1", "T2"]);
}

#[test]
fn toggling_active_key_flips_direction() {
    let state = SortState::descending("clicks");
    let flipped = state.toggled("clicks");
    assert_eq!(flipped.direction, Direction::Ascending);
    let back = flipped.toggled("clicks");
    assert_eq!(back.direction, Direction::Descending);
}

#[test]
fn selecting_new_key_resets_to_descending() {
    let state = SortState {
        key: "clicks".into(),
        direction: Direction::Ascending,
    };
    let next = state.toggled("impressions");
    assert_eq!(next.key, "impressions");
    assert_eq!(next.direction, Direction::Descending);
}

#[test]
fn direction_parses_asc_and_desc_only() {
    assert_eq!("asc".parse::<Direction>().unwrap(), Direction::Ascending);
    assert_eq!("desc".parse::<Direction>().unwrap(), Direction::Descending);
    assert!("up".parse::<Direction>().is_err());
}
