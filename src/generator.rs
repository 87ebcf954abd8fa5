// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::fx::CURRENCIES;
use crate::models::{Affiliate, CpaItem, GrossItem, RevShareItem, SubAffiliate, TrafficItem};

pub const BRANDS: [&str; 6] = [
    "BetRoyal",
    "LuckyOrbit",
    "SpinCastle",
    "NorthPeak",
    "Velobet",
    "Casimba",
];

pub const CATEGORIES: [&str; 5] = ["Casino", "Sportsbook", "Poker", "Bingo", "Esports"];

/// Commission-structure tags. This order is also the tie-break order for the
/// best-performing bucket pick in summaries.
pub const DEAL_TYPES: [&str; 5] = ["CPA", "CPS", "CPL", "RevShare", "Hybrid"];

pub const TRACKERS: [&str; 6] = [
    "TRK-101", "TRK-102", "TRK-103", "TRK-104", "TRK-105", "TRK-106",
];

const FIRST_NAMES: [&str; 10] = [
    "aria", "max", "nova", "leo", "ivy", "finn", "zara", "kai", "mila", "otto",
];
const LAST_NAMES: [&str; 8] = [
    "wolf", "stone", "rivers", "quinn", "sharp", "banks", "frost", "vale",
];
const COMPANIES: [&str; 6] = [
    "Apex Media",
    "Blue Harbor Digital",
    "Cascade Partners",
    "Delta Reach",
    "Echo Traffic Co",
    "Fortuna Group",
];

/// All sample timestamps fall in a fixed 120-day window starting here, so
/// date-range filters have something to bite on.
static WINDOW_START: Lazy<NaiveDateTime> = Lazy::new(|| {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .expect("valid window start")
        .and_time(NaiveTime::MIN)
});

/// Small xorshift64* mixer. Seeded per collection so repeated runs render
/// identical sample data and a smaller `--count` is a prefix of a larger one.
struct SampleRng(u64);

impl SampleRng {
    fn new(seed: u64) -> Self {
        SampleRng(seed | 1)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }

    /// Non-negative amount with two decimal places, below `max` whole units.
    fn money(&mut self, max: u64) -> Decimal {
        Decimal::new(self.below(max * 100) as i64, 2)
    }

    /// Commission fraction in [0.00, 0.45] so derived rates stay in [0, 100].
    fn commission_frac(&mut self) -> Decimal {
        Decimal::new(self.below(46) as i64, 2)
    }

    fn timestamp(&mut self) -> NaiveDateTime {
        *WINDOW_START
            + Duration::days(self.below(120) as i64)
            + Duration::minutes(self.below(24 * 60) as i64)
    }

    fn username(&mut self, n: usize) -> String {
        format!(
            "{}_{}{}",
            self.pick(&FIRST_NAMES),
            self.pick(&LAST_NAMES),
            n
        )
    }
}

pub fn affiliates(count: usize) -> Vec<Affiliate> {
    let mut rng = SampleRng::new(0xAFF1_71A7_E000_0001);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let id = format!("AFF-{:04}", i + 1);
        let gross = rng.money(50_000);
        let commission = (gross * rng.commission_frac()).round_dp(2);
        let sub_count = rng.below(5) as usize;
        let mut subs = Vec::with_capacity(sub_count);
        for s in 0..sub_count {
            let sub_gross = rng.money(8_000);
            let sub_commission = (sub_gross * rng.commission_frac()).round_dp(2);
            subs.push(SubAffiliate {
                id: format!("{}-S{}", id, s + 1),
                parent_id: id.clone(),
                username: rng.username(i * 10 + s),
                deal_type: rng.pick(&DEAL_TYPES).to_string(),
                currency: rng.pick(&CURRENCIES).to_string(),
                gross_revenue: sub_gross,
                commission: sub_commission,
                deposits: rng.below(400) as i64,
            });
        }
        out.push(Affiliate {
            id,
            username: rng.username(i),
            company: rng.pick(&COMPANIES).to_string(),
            brand: rng.pick(&BRANDS).to_string(),
            category: rng.pick(&CATEGORIES).to_string(),
            deal_type: rng.pick(&DEAL_TYPES).to_string(),
            tracker_id: rng.pick(&TRACKERS).to_string(),
            currency: rng.pick(&CURRENCIES).to_string(),
            gross_revenue: gross,
            commission,
            profit: gross - commission,
            deposits: rng.below(2_000) as i64,
            sub_affiliates: subs,
        });
    }
    out
}

pub fn gross_items(count: usize) -> Vec<GrossItem> {
    let mut rng = SampleRng::new(0x6055_17E5_0000_0002);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let gross = rng.money(30_000);
        let commission = (gross * rng.commission_frac()).round_dp(2);
        out.push(GrossItem {
            id: format!("GRS-{:04}", i + 1),
            brand: rng.pick(&BRANDS).to_string(),
            category: rng.pick(&CATEGORIES).to_string(),
            deal_type: rng.pick(&DEAL_TYPES).to_string(),
            currency: rng.pick(&CURRENCIES).to_string(),
            gross_revenue: gross,
            commission,
            profit: gross - commission,
            updated_at: rng.timestamp(),
        });
    }
    out
}

pub fn cpa_items(count: usize) -> Vec<CpaItem> {
    let mut rng = SampleRng::new(0xC9A1_7E35_0000_0003);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let gross = rng.money(20_000);
        let commission = (gross * rng.commission_frac()).round_dp(2);
        out.push(CpaItem {
            id: format!("CPA-{:04}", i + 1),
            brand: rng.pick(&BRANDS).to_string(),
            deal_type: rng.pick(&DEAL_TYPES).to_string(),
            tracker_id: rng.pick(&TRACKERS).to_string(),
            currency: rng.pick(&CURRENCIES).to_string(),
            cpa_count: rng.below(500) as i64,
            deposits: rng.below(1_000) as i64,
            gross_revenue: gross,
            commission,
            updated_at: rng.timestamp(),
        });
    }
    out
}

pub fn traffic_items(count: usize) -> Vec<TrafficItem> {
    let mut rng = SampleRng::new(0x7AF1_C000_0000_0004);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let impressions = rng.below(500_000) as i64;
        // Clicks never exceed impressions, so CTR-style rates stay sane.
        let clicks = if impressions == 0 {
            0
        } else {
            rng.below(impressions as u64 / 10 + 1) as i64
        };
        out.push(TrafficItem {
            id: format!("TRF-{:04}", i + 1),
            brand: rng.pick(&BRANDS).to_string(),
            tracker_id: rng.pick(&TRACKERS).to_string(),
            currency: rng.pick(&CURRENCIES).to_string(),
            impressions,
            clicks,
            signups: rng.below(2_000) as i64,
            deposits: rng.below(800) as i64,
            updated_at: rng.timestamp(),
        });
    }
    out
}

pub fn revshare_items(count: usize) -> Vec<RevShareItem> {
    let mut rng = SampleRng::new(0x2E55_4A2E_0000_0005);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let gross = rng.money(40_000);
        let share = (gross * rng.commission_frac()).round_dp(2);
        out.push(RevShareItem {
            id: format!("RVS-{:04}", i + 1),
            brand: rng.pick(&BRANDS).to_string(),
            deal_type: rng.pick(&DEAL_TYPES).to_string(),
            tracker_id: rng.pick(&TRACKERS).to_string(),
            currency: rng.pick(&CURRENCIES).to_string(),
            share_amount: share,
            gross_revenue: gross,
            updated_at: rng.timestamp(),
        });
    }
    out
}
