// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::filter::derived_rate;
use super::{FieldValue, Record};
use crate::fx;

/// Names the two measures a report's rate is derived from, e.g. commission
/// over gross revenue. `convert` marks money rates whose components must be
/// USD-normalized before summing; count rates (clicks over impressions)
/// sum as-is.
#[derive(Debug, Clone, Copy)]
pub struct RateSpec {
    pub partial: &'static str,
    pub base: &'static str,
    pub convert: bool,
}

/// Per-report aggregation descriptor: which money measures to sum (USD
/// normalized), which count measures to sum (unit-less), how the average
/// rate is derived, and which categorical field buckets the "best bucket"
/// pick. `bucket_order` is the fixed vocabulary enumeration; its order is
/// the tie-break for equal rates.
#[derive(Debug, Clone, Copy)]
pub struct SummaryConfig {
    pub money_measures: &'static [&'static str],
    pub count_measures: &'static [&'static str],
    pub rate: Option<RateSpec>,
    pub bucket_key: Option<&'static str>,
    pub bucket_order: &'static [&'static str],
    pub currency_key: &'static str,
}

/// Totals over one record subset. Money sums are normalized to USD through
/// the fixed exchange-rate table; the raw rate components are kept so two
/// summaries can be merged without skewing the average.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub count: usize,
    pub totals: BTreeMap<String, Decimal>,
    pub avg_rate: Decimal,
    pub best_bucket: Option<String>,
    #[serde(skip)]
    rate_partial: Decimal,
    #[serde(skip)]
    rate_base: Decimal,
    #[serde(skip)]
    buckets: BTreeMap<String, (Decimal, Decimal)>,
}

impl Summary {
    fn empty() -> Self {
        Summary {
            count: 0,
            totals: BTreeMap::new(),
            avg_rate: Decimal::ZERO,
            best_bucket: None,
            rate_partial: Decimal::ZERO,
            rate_base: Decimal::ZERO,
            buckets: BTreeMap::new(),
        }
    }

    /// Fold another summary into this one (used to pull sub-affiliate
    /// measures into their parents' totals). The average rate and bucket
    /// pick are recomputed from the merged raw sums.
    pub fn absorb(&mut self, other: Summary, bucket_order: &[&str]) {
        self.count += other.count;
        for (k, v) in other.totals {
            *self.totals.entry(k).or_insert(Decimal::ZERO) += v;
        }
        self.rate_partial += other.rate_partial;
        self.rate_base += other.rate_base;
        for (k, (p, b)) in other.buckets {
            let e = self
                .buckets
                .entry(k)
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            e.0 += p;
            e.1 += b;
        }
        self.finish(bucket_order);
    }

    pub fn total(&self, measure: &str) -> Decimal {
        self.totals.get(measure).copied().unwrap_or(Decimal::ZERO)
    }

    fn finish(&mut self, bucket_order: &[&str]) {
        self.avg_rate = derived_rate(self.rate_partial, self.rate_base);
        self.best_bucket = None;
        let mut best = Decimal::ZERO;
        for name in bucket_order {
            if let Some((p, b)) = self.buckets.get(*name) {
                if b.is_zero() {
                    continue;
                }
                let rate = derived_rate(*p, *b);
                // Strictly greater: a tie keeps the earlier bucket.
                if self.best_bucket.is_none() || rate > best {
                    best = rate;
                    self.best_bucket = Some((*name).to_string());
                }
            }
        }
    }
}

fn numeric_field<R: Record>(record: &R, key: &str) -> Decimal {
    match record.field(key) {
        Some(FieldValue::Num(v)) => v,
        _ => Decimal::ZERO,
    }
}

/// Reduce a record subset into totals, an average rate, and the
/// best-performing bucket. Total function over degenerate input: an empty
/// subset yields zero totals and rate 0, never a division error.
pub fn aggregate<R: Record>(records: &[R], cfg: &SummaryConfig) -> Summary {
    let mut summary = Summary::empty();
    summary.count = records.len();

    for record in records {
        let fx = match record.field(cfg.currency_key) {
            Some(FieldValue::Str(code)) => fx::usd_rate(code),
            _ => Decimal::ONE,
        };

        for measure in cfg.money_measures {
            let v = numeric_field(record, measure) * fx;
            *summary
                .totals
                .entry((*measure).to_string())
                .or_insert(Decimal::ZERO) += v;
        }
        for measure in cfg.count_measures {
            let v = numeric_field(record, measure);
            *summary
                .totals
                .entry((*measure).to_string())
                .or_insert(Decimal::ZERO) += v;
        }

        if let Some(rate) = &cfg.rate {
            let factor = if rate.convert { fx } else { Decimal::ONE };
            let p = numeric_field(record, rate.partial) * factor;
            let b = numeric_field(record, rate.base) * factor;
            summary.rate_partial += p;
            summary.rate_base += b;
            if let Some(bucket_key) = cfg.bucket_key {
                if let Some(FieldValue::Str(bucket)) = record.field(bucket_key) {
                    let e = summary
                        .buckets
                        .entry(bucket.to_string())
                        .or_insert((Decimal::ZERO, Decimal::ZERO));
                    e.0 += p;
                    e.1 += b;
                }
            }
        }
    }

    summary.finish(cfg.bucket_order);
    summary
}

/// `filtered / total * 100`, with 0 when the total is 0. Used for the
/// percent-of-total readout comparing a filtered summary against the
/// summary over the whole collection.
pub fn percent_of_total(filtered: Decimal, total: Decimal) -> Decimal {
    derived_rate(filtered, total)
}
