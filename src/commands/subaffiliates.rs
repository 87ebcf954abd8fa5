// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use crate::commands::{arg_str, decimal_arg, sample_count, view_state, NO_RECORDS};
use crate::generator;
use crate::models::SubAffiliate;
use crate::pipeline::filter::{derived_rate, FilterSpec};
use crate::pipeline::page::page;
use crate::pipeline::state::apply;
use crate::utils::{fmt_rate, maybe_print_json, pretty_table};

/// The sub-affiliate report is the flattened child view: every sub-affiliate
/// of every generated partner, with its parent back-reference.
pub fn flatten(count: usize) -> Vec<SubAffiliate> {
    generator::affiliates(count)
        .into_iter()
        .flat_map(|a| a.sub_affiliates)
        .collect()
}

pub(crate) fn filter_from_args(sub: &ArgMatches) -> Result<FilterSpec> {
    Ok(FilterSpec::new()
        .contains("username", arg_str(sub, "username"))
        .exact("deal_type", arg_str(sub, "deal-type"))
        .exact("currency", arg_str(sub, "currency").to_uppercase())
        .range(
            "gross_revenue",
            decimal_arg(sub, "min-revenue")?,
            decimal_arg(sub, "max-revenue")?,
        )
        .rate_range(
            "commission_rate",
            "commission",
            "gross_revenue",
            decimal_arg(sub, "min-rate")?,
            decimal_arg(sub, "max-rate")?,
        ))
}

pub(crate) const TABLE_HEADERS: [&str; 8] = [
    "ID", "Parent", "Username", "Deal", "CCY", "Gross", "Commission", "Rate",
];

pub(crate) fn table_rows(items: &[SubAffiliate]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.parent_id.clone(),
                s.username.clone(),
                s.deal_type.clone(),
                s.currency.clone(),
                format!("{:.2}", s.gross_revenue),
                format!("{:.2}", s.commission),
                fmt_rate(&derived_rate(s.commission, s.gross_revenue)),
            ]
        })
        .collect()
}

pub fn handle(m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(sub)?,
        _ => {}
    }
    Ok(())
}

fn list(sub: &ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let records = flatten(sample_count(sub));
    let state = view_state(sub, filter_from_args(sub)?)?;

    let rows = apply(&records, &state);
    let visible = page(&rows, state.page, state.page_size);

    if maybe_print_json(json_flag, jsonl_flag, &visible)? {
        return Ok(());
    }
    if visible.is_empty() {
        println!("{}", NO_RECORDS);
        return Ok(());
    }
    println!("{}", pretty_table(&TABLE_HEADERS, table_rows(visible)));
    Ok(())
}
