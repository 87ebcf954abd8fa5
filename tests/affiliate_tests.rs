// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use afflens::commands::affiliates::{filter_affiliates, summarize, AffiliateFilter};
use afflens::models::{Affiliate, SubAffiliate};
use afflens::pipeline::filter::FilterSpec;
use rust_decimal::Decimal;

fn sub(parent: &str, n: usize, username: &str, gross: i64) -> SubAffiliate {
    SubAffiliate {
        id: format!("{}-S{}", parent, n),
        parent_id: parent.into(),
        username: username.into(),
        deal_type: "CPA".into(),
        currency: "USD".into(),
        gross_revenue: Decimal::from(gross),
        commission: Decimal::from(gross / 10),
        deposits: 3,
    }
}

fn affiliate(id: &str, brand: &str, subs: Vec<SubAffiliate>) -> Affiliate {
    Affiliate {
        id: id.into(),
        username: format!("user_{}", id),
        company: "Apex Media".into(),
        brand: brand.into(),
        category: "Casino".into(),
        deal_type: "CPA".into(),
        tracker_id: "TRK-101".into(),
        currency: "USD".into(),
        gross_revenue: Decimal::from(1000),
        commission: Decimal::from(100),
        profit: Decimal::from(900),
        deposits: 10,
        sub_affiliates: subs,
    }
}

#[test]
fn baseline_rule_drops_partners_without_children() {
    let records = vec![
        affiliate("A1", "BetRoyal", vec![sub("A1", 1, "kai_wolf1", 100)]),
        affiliate("A2", "BetRoyal", Vec::new()),
    ];
    let out = filter_affiliates(&records, &AffiliateFilter::default());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "A1");
}

#[test]
fn standard_filters_apply_per_parent() {
    let records = vec![
        affiliate("A1", "BetRoyal", vec![sub("A1", 1, "kai_wolf1", 100)]),
        affiliate("A2", "Velobet", vec![sub("A2", 1, "ivy_stone2", 100)]),
    ];
    let f = AffiliateFilter {
        spec: FilterSpec::new().exact("brand", "Velobet"),
        sub_username: String::new(),
    };
    let out = filter_affiliates(&records, &f);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "A2");
}

#[test]
fn sub_username_search_prunes_children_copy_on_write() {
    let records = vec![affiliate(
        "A1",
        "BetRoyal",
        vec![
            sub("A1", 1, "kai_wolf1", 100),
            sub("A1", 2, "ivy_stone2", 200),
        ],
    )];
    let f = AffiliateFilter {
        spec: FilterSpec::new(),
        sub_username: "IVY".into(),
    };
    let out = filter_affiliates(&records, &f);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].sub_affiliates.len(), 1);
    assert_eq!(out[0].sub_affiliates[0].username, "ivy_stone2");
    // Input tree untouched.
    assert_eq!(records[0].sub_affiliates.len(), 2);
}

#[test]
fn sub_username_search_drops_parents_without_matching_children() {
    let records = vec![
        affiliate("A1", "BetRoyal", vec![sub("A1", 1, "kai_wolf1", 100)]),
        affiliate("A2", "BetRoyal", vec![sub("A2", 1, "ivy_stone2", 100)]),
    ];
    let f = AffiliateFilter {
        spec: FilterSpec::new(),
        sub_username: "ivy".into(),
    };
    let out = filter_affiliates(&records, &f);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "A2");
}

#[test]
fn sub_username_search_replaces_the_other_filters() {
    // Historical dashboard behavior: while a sub-username query is active
    // the per-parent filters are ignored, so the Velobet-only constraint
    // does not drop A1 here.
    let records = vec![
        affiliate("A1", "BetRoyal", vec![sub("A1", 1, "ivy_stone1", 100)]),
        affiliate("A2", "Velobet", vec![sub("A2", 1, "ivy_stone2", 100)]),
    ];
    let f = AffiliateFilter {
        spec: FilterSpec::new().exact("brand", "Velobet"),
        sub_username: "ivy".into(),
    };
    let out = filter_affiliates(&records, &f);
    assert_eq!(out.len(), 2);
}

#[test]
fn summary_folds_sub_affiliate_measures_into_totals() {
    // Parent: 1000 gross / 100 commission. Children: 100 + 200 gross with
    // 10 + 20 commission. All USD.
    let records = vec![affiliate(
        "A1",
        "BetRoyal",
        vec![
            sub("A1", 1, "kai_wolf1", 100),
            sub("A1", 2, "ivy_stone2", 200),
        ],
    )];
    let summary = summarize(&records);
    assert_eq!(summary.total("gross_revenue"), Decimal::from(1300));
    assert_eq!(summary.total("commission"), Decimal::from(130));
    // 130 / 1300 * 100 = 10%
    assert_eq!(summary.avg_rate, Decimal::from(10));
    // 1 parent + 2 children contributed.
    assert_eq!(summary.count, 3);
}

#[test]
fn empty_affiliate_collection_summarizes_to_zero() {
    let records: Vec<Affiliate> = Vec::new();
    let summary = summarize(&records);
    assert_eq!(summary.count, 0);
    assert_eq!(summary.avg_rate, Decimal::ZERO);
}
