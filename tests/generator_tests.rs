// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use afflens::fx::{usd_rate, CURRENCIES};
use afflens::generator;
use rust_decimal::Decimal;

#[test]
fn sample_data_is_deterministic() {
    let a = generator::affiliates(30);
    let b = generator::affiliates(30);
    assert_eq!(a.len(), 30);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.username, y.username);
        assert_eq!(x.gross_revenue, y.gross_revenue);
        assert_eq!(x.sub_affiliates.len(), y.sub_affiliates.len());
    }
}

#[test]
fn smaller_count_is_a_prefix_of_a_larger_one() {
    let small = generator::gross_items(10);
    let large = generator::gross_items(40);
    for (s, l) in small.iter().zip(&large) {
        assert_eq!(s.id, l.id);
        assert_eq!(s.gross_revenue, l.gross_revenue);
    }
}

#[test]
fn measures_are_non_negative_and_rates_bounded() {
    for a in generator::affiliates(100) {
        assert!(a.gross_revenue >= Decimal::ZERO);
        assert!(a.commission >= Decimal::ZERO);
        assert!(a.commission <= a.gross_revenue);
        assert!(a.profit >= Decimal::ZERO);
        assert!(a.deposits >= 0);
        assert!(a.sub_affiliates.len() <= 4);
        for s in &a.sub_affiliates {
            assert_eq!(s.parent_id, a.id);
            assert!(s.commission <= s.gross_revenue);
        }
    }
    for t in generator::traffic_items(100) {
        assert!(t.clicks <= t.impressions);
    }
}

#[test]
fn generated_currencies_come_from_the_fixed_set() {
    for g in generator::gross_items(100) {
        assert!(CURRENCIES.contains(&g.currency.as_str()));
        // Every generated currency has a real rate, not the pass-through.
        assert!(usd_rate(&g.currency) > Decimal::ZERO);
    }
}

#[test]
fn unknown_currency_rate_is_one() {
    assert_eq!(usd_rate("JPY"), Decimal::ONE);
    assert_eq!(usd_rate(""), Decimal::ONE);
    assert_eq!(usd_rate("EUR"), Decimal::new(109, 2));
}
