// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FieldValue, Record};

/// One per-field constraint. All constraints in a [`FilterSpec`] must hold
/// for a record to survive the pass (logical AND).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Constraint {
    /// Field must equal the value exactly. An empty value is a no-op.
    Exact(String),
    /// Case-insensitive substring containment. An empty query is a no-op.
    Contains(String),
    /// Stored numeric field within [min, max]; either bound may be absent.
    Range {
        min: Option<Decimal>,
        max: Option<Decimal>,
    },
    /// Derived rate `(partial / base) * 100` within [min, max]. The rate is
    /// computed on the fly, never read from a stored field; a zero base
    /// yields rate 0 rather than a division error.
    RateRange {
        partial: String,
        base: String,
        min: Option<Decimal>,
        max: Option<Decimal>,
    },
    /// Timestamp between start-of-day of `start` and start-of-day of `end`,
    /// both inclusive; either bound may be absent.
    DateRange {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

/// A conjunction of per-field constraints keyed by field name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    constraints: BTreeMap<String, Constraint>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match constraint; skipped entirely when the value is empty,
    /// so an untouched filter field never excludes anything.
    pub fn exact(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.constraints.insert(key.into(), Constraint::Exact(value));
        }
        self
    }

    pub fn contains(mut self, key: &str, query: impl Into<String>) -> Self {
        let query = query.into();
        if !query.is_empty() {
            self.constraints
                .insert(key.into(), Constraint::Contains(query));
        }
        self
    }

    pub fn range(mut self, key: &str, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        if min.is_some() || max.is_some() {
            self.constraints
                .insert(key.into(), Constraint::Range { min, max });
        }
        self
    }

    pub fn rate_range(
        mut self,
        key: &str,
        partial: &str,
        base: &str,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> Self {
        if min.is_some() || max.is_some() {
            self.constraints.insert(
                key.into(),
                Constraint::RateRange {
                    partial: partial.into(),
                    base: base.into(),
                    min,
                    max,
                },
            );
        }
        self
    }

    pub fn date_range(mut self, key: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        if start.is_some() || end.is_some() {
            self.constraints
                .insert(key.into(), Constraint::DateRange { start, end });
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Intersection of two specs. Keys present in both take `other`'s
    /// constraint, which is what re-filtering an already-filtered set with a
    /// tighter bound produces anyway.
    pub fn and(mut self, other: FilterSpec) -> Self {
        self.constraints.extend(other.constraints);
        self
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.constraints
            .iter()
            .all(|(key, c)| constraint_holds(record, key, c))
    }
}

fn constraint_holds<R: Record>(record: &R, key: &str, c: &Constraint) -> bool {
    match c {
        Constraint::Exact(value) => {
            if value.is_empty() {
                return true;
            }
            matches!(record.field(key), Some(FieldValue::Str(s)) if s == value.as_str())
        }
        Constraint::Contains(query) => {
            if query.is_empty() {
                return true;
            }
            match record.field(key) {
                Some(FieldValue::Str(s)) => s.to_lowercase().contains(&query.to_lowercase()),
                _ => false,
            }
        }
        Constraint::Range { min, max } => match record.field(key) {
            Some(FieldValue::Num(v)) => within(v, *min, *max),
            _ => false,
        },
        Constraint::RateRange {
            partial,
            base,
            min,
            max,
        } => {
            let p = match record.field(partial) {
                Some(FieldValue::Num(v)) => v,
                _ => return false,
            };
            let b = match record.field(base) {
                Some(FieldValue::Num(v)) => v,
                _ => return false,
            };
            within(derived_rate(p, b), *min, *max)
        }
        Constraint::DateRange { start, end } => match record.field(key) {
            Some(FieldValue::Time(t)) => {
                if let Some(s) = start {
                    if t < s.and_time(NaiveTime::MIN) {
                        return false;
                    }
                }
                if let Some(e) = end {
                    if t > e.and_time(NaiveTime::MIN) {
                        return false;
                    }
                }
                true
            }
            _ => false,
        },
    }
}

fn within(v: Decimal, min: Option<Decimal>, max: Option<Decimal>) -> bool {
    if let Some(lo) = min {
        if v < lo {
            return false;
        }
    }
    if let Some(hi) = max {
        if v > hi {
            return false;
        }
    }
    true
}

/// `(partial / base) * 100`, with 0 when the base is 0.
pub fn derived_rate(partial: Decimal, base: Decimal) -> Decimal {
    if base.is_zero() {
        Decimal::ZERO
    } else {
        partial / base * Decimal::ONE_HUNDRED
    }
}

/// Pure filter pass: returns the records satisfying every constraint, in
/// input order. An empty spec is the identity; an empty collection yields an
/// empty result, never an error.
pub fn filter<R: Record + Clone>(records: &[R], spec: &FilterSpec) -> Vec<R> {
    records
        .iter()
        .filter(|r| spec.matches(*r))
        .cloned()
        .collect()
}
