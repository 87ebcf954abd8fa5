// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

/// Currency codes the platform reports in. Order is the enumeration order
/// used by the sample-data generator.
pub const CURRENCIES: [&str; 5] = ["USD", "EUR", "GBP", "CAD", "AUD"];

/// Fixed USD-equivalent multipliers used for aggregation only; rates are
/// never stored per record.
static USD_RATES: Lazy<BTreeMap<&'static str, Decimal>> = Lazy::new(|| {
    BTreeMap::from([
        ("USD", Decimal::ONE),
        ("EUR", Decimal::new(109, 2)),
        ("GBP", Decimal::new(128, 2)),
        ("CAD", Decimal::new(73, 2)),
        ("AUD", Decimal::new(66, 2)),
    ])
});

/// USD multiplier for a currency code. An unrecognized code passes through
/// at 1.0; it is never an error.
pub fn usd_rate(code: &str) -> Decimal {
    USD_RATES.get(code).copied().unwrap_or(Decimal::ONE)
}

pub fn to_usd(amount: Decimal, code: &str) -> Decimal {
    amount * usd_rate(code)
}
