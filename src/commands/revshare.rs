// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use crate::commands::{arg_str, date_arg, decimal_arg, sample_count, view_state, NO_RECORDS};
use crate::generator::{self, DEAL_TYPES};
use crate::models::RevShareItem;
use crate::pipeline::aggregate::{aggregate, percent_of_total, RateSpec, SummaryConfig};
use crate::pipeline::filter::{derived_rate, filter, FilterSpec};
use crate::pipeline::page::page;
use crate::pipeline::state::apply;
use crate::utils::{fmt_rate, maybe_print_json, pretty_table};

const SUMMARY: SummaryConfig = SummaryConfig {
    money_measures: &["share_amount", "gross_revenue"],
    count_measures: &[],
    rate: Some(RateSpec {
        partial: "share_amount",
        base: "gross_revenue",
        convert: true,
    }),
    bucket_key: Some("deal_type"),
    bucket_order: &DEAL_TYPES,
    currency_key: "currency",
};

pub(crate) fn filter_from_args(sub: &ArgMatches) -> Result<FilterSpec> {
    Ok(FilterSpec::new()
        .exact("brand", arg_str(sub, "brand"))
        .exact("deal_type", arg_str(sub, "deal-type"))
        .exact("tracker_id", arg_str(sub, "tracker"))
        .exact("currency", arg_str(sub, "currency").to_uppercase())
        .range(
            "gross_revenue",
            decimal_arg(sub, "min-revenue")?,
            decimal_arg(sub, "max-revenue")?,
        )
        .rate_range(
            "share_pct",
            "share_amount",
            "gross_revenue",
            decimal_arg(sub, "min-share")?,
            decimal_arg(sub, "max-share")?,
        )
        .date_range("updated_at", date_arg(sub, "from")?, date_arg(sub, "to")?))
}

pub(crate) const TABLE_HEADERS: [&str; 9] = [
    "ID", "Brand", "Deal", "Tracker", "CCY", "Share", "Gross", "Share %", "Updated",
];

pub(crate) fn table_rows(items: &[RevShareItem]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.brand.clone(),
                r.deal_type.clone(),
                r.tracker_id.clone(),
                r.currency.clone(),
                format!("{:.2}", r.share_amount),
                format!("{:.2}", r.gross_revenue),
                fmt_rate(&derived_rate(r.share_amount, r.gross_revenue)),
                r.updated_at.format("%Y-%m-%d %H:%M").to_string(),
            ]
        })
        .collect()
}

pub fn handle(m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(sub)?,
        Some(("summary", sub)) => summary(sub)?,
        _ => {}
    }
    Ok(())
}

fn list(sub: &ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let records = generator::revshare_items(sample_count(sub));
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

fn summary(sub: &ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let records = generator::revshare_items(sample_count(sub));
    let spec = filter_from_args(sub)?;

    let filtered = filter(&records, &spec);
    let all = aggregate(&records, &SUMMARY);
    let current = aggregate(&filtered, &SUMMARY);
    let share_pct = percent_of_total(current.total("share_amount"), all.total("share_amount"));

    let view = serde_json::json!({
        "records": current.count,
        "share_amount_usd": current.total("share_amount"),
        "gross_revenue_usd": current.total("gross_revenue"),
        "avg_share_pct": current.avg_rate,
        "best_deal_type": current.best_bucket,
        "share_pct_of_total": share_pct,
    });
    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }

    let rows = vec![
        vec!["Records".into(), current.count.to_string()],
        vec![
            "Share amount (USD)".into(),
            format!("{:.2}", current.total("share_amount")),
        ],
        vec![
            "Gross revenue (USD)".into(),
            format!("{:.2}", current.total("gross_revenue")),
        ],
        vec!["Avg share".into(), fmt_rate(&current.avg_rate)],
        vec![
            "Best deal type".into(),
            current.best_bucket.clone().unwrap_or_else(|| "-".into()),
        ],
        vec!["% of total share".into(), fmt_rate(&share_pct)],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    Ok(())
}
