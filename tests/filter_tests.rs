// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use afflens::models::GrossItem;
use afflens::pipeline::filter::{filter, FilterSpec};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn item(id: &str, brand: &str, ccy: &str, gross: i64, commission: i64, day: u32) -> GrossItem {
    GrossItem {
        id: id.into(),
        brand: brand.into(),
        category: "Casino".into(),
        deal_type: "CPA".into(),
        currency: ccy.into(),
        gross_revenue: Decimal::from(gross),
        commission: Decimal::from(commission),
        profit: Decimal::from(gross - commission),
        updated_at: NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    }
}

fn ids(items: &[GrossItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn empty_spec_is_identity() {
    let records = vec![
        item("G1", "Nike", "USD", 1000, 100, 1),
        item("G2", "Puma", "EUR", 2000, 200, 2),
    ];
    let out = filter(&records, &FilterSpec::new());
    assert_eq!(ids(&out), ids(&records));
}

#[test]
fn empty_collection_yields_empty_result() {
    let records: Vec<GrossItem> = Vec::new();
    let spec = FilterSpec::new().exact("brand", "Nike");
    assert!(filter(&records, &spec).is_empty());
}

#[test]
fn exact_brand_match_preserves_input_order() {
    // Ten records, three of them Nike.
    let mut records = Vec::new();
    for (i, brand) in ["Nike", "Puma", "Adidas", "Nike", "Bauer", "Puma", "Nike", "Asics", "Puma", "Adidas"]
        .iter()
        .enumerate()
    {
        records.push(item(&format!("G{}", i + 1), brand, "USD", 1000, 100, 1));
    }
    let out = filter(&records, &FilterSpec::new().exact("brand", "Nike"));
    assert_eq!(ids(&out), vec!["G1", "G4", "G7"]);
}

#[test]
fn empty_string_constraint_is_skipped() {
    let records = vec![
        item("G1", "Nike", "USD", 1000, 100, 1),
        item("G2", "Puma", "EUR", 2000, 200, 2),
    ];
    let spec = FilterSpec::new().exact("brand", "");
    assert_eq!(filter(&records, &spec).len(), 2);
}

#[test]
fn substring_match_is_case_insensitive() {
    let records = vec![
        item("G1", "LuckyOrbit", "USD", 1000, 100, 1),
        item("G2", "NorthPeak", "USD", 1000, 100, 1),
    ];
    let spec = FilterSpec::new().contains("brand", "LUCKY");
    assert_eq!(ids(&filter(&records, &spec)), vec!["G1"]);
}

#[test]
fn numeric_range_bounds_are_optional() {
    let records = vec![
        item("G1", "Nike", "USD", 500, 50, 1),
        item("G2", "Nike", "USD", 1500, 150, 1),
        item("G3", "Nike", "USD", 2500, 250, 1),
    ];
    let min_only = FilterSpec::new().range("gross_revenue", Some(Decimal::from(1000)), None);
    assert_eq!(ids(&filter(&records, &min_only)), vec!["G2", "G3"]);

    let max_only = FilterSpec::new().range("gross_revenue", None, Some(Decimal::from(2000)));
    assert_eq!(ids(&filter(&records, &max_only)), vec!["G1", "G2"]);
}

#[test]
fn derived_rate_range_uses_computed_rate() {
    let records = vec![
        item("G1", "Nike", "USD", 1000, 100, 1), // 10%
        item("G2", "Nike", "USD", 1000, 300, 1), // 30%
        item("G3", "Nike", "USD", 0, 0, 1),      // base 0 => rate 0
    ];
    let spec = FilterSpec::new().rate_range(
        "commission_rate",
        "commission",
        "gross_revenue",
        Some(Decimal::from(20)),
        None,
    );
    assert_eq!(ids(&filter(&records, &spec)), vec!["G2"]);

    // Zero-base records count as rate 0, so a max-only bound keeps them.
    let spec = FilterSpec::new().rate_range(
        "commission_rate",
        "commission",
        "gross_revenue",
        None,
        Some(Decimal::from(5)),
    );
    assert_eq!(ids(&filter(&records, &spec)), vec!["G3"]);
}

#[test]
fn date_range_bounds_are_inclusive_at_start_of_day() {
    let mut early = item("G1", "Nike", "USD", 1000, 100, 5);
    early.updated_at = NaiveDate::from_ymd_opt(2025, 3, 5)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let noon = item("G2", "Nike", "USD", 1000, 100, 10);

    let from = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
    let to = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let records = vec![early, noon];

    // G1 sits exactly on the start boundary and is kept. G2 is at noon on
    // the end date, which is past that day's start-of-day cutoff.
    let spec = FilterSpec::new().date_range("updated_at", Some(from), Some(to));
    assert_eq!(ids(&filter(&records, &spec)), vec!["G1"]);

    let spec = FilterSpec::new().date_range("updated_at", Some(from), None);
    assert_eq!(filter(&records, &spec).len(), 2);
}

#[test]
fn filters_compose_as_intersection() {
    let records = vec![
        item("G1", "Nike", "USD", 500, 50, 1),
        item("G2", "Nike", "USD", 1500, 150, 1),
        item("G3", "Puma", "USD", 1500, 150, 1),
        item("G4", "Nike", "EUR", 2500, 250, 1),
    ];
    let f1 = FilterSpec::new().exact("brand", "Nike");
    let f2 = FilterSpec::new().range("gross_revenue", Some(Decimal::from(1000)), None);

    let sequential = filter(&filter(&records, &f1), &f2);
    let combined = filter(&records, &f1.clone().and(f2));
    assert_eq!(ids(&sequential), ids(&combined));
    assert_eq!(ids(&sequential), vec!["G2", "G4"]);
}

#[test]
fn conjunction_requires_all_constraints() {
    let records = vec![
        item("G1", "Nike", "USD", 1500, 150, 1),
        item("G2", "Nike", "EUR", 1500, 150, 1),
    ];
    let spec = FilterSpec::new()
        .exact("brand", "Nike")
        .exact("currency", "EUR");
    assert_eq!(ids(&filter(&records, &spec)), vec!["G2"]);
}
