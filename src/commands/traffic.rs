// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use crate::commands::{arg_str, date_arg, decimal_arg, sample_count, view_state, NO_RECORDS};
use crate::generator::{self, BRANDS};
use crate::models::TrafficItem;
use crate::pipeline::aggregate::{aggregate, percent_of_total, RateSpec, SummaryConfig};
use crate::pipeline::filter::{derived_rate, filter, FilterSpec};
use crate::pipeline::page::page;
use crate::pipeline::state::apply;
use crate::utils::{fmt_rate, maybe_print_json, pretty_table};

// Click-through rate over impressions; counts carry no currency so nothing
// here is FX-converted.
const SUMMARY: SummaryConfig = SummaryConfig {
    money_measures: &[],
    count_measures: &["impressions", "clicks", "signups", "deposits"],
    rate: Some(RateSpec {
        partial: "clicks",
        base: "impressions",
        convert: false,
    }),
    bucket_key: Some("brand"),
    bucket_order: &BRANDS,
    currency_key: "currency",
};

pub(crate) fn filter_from_args(sub: &ArgMatches) -> Result<FilterSpec> {
    Ok(FilterSpec::new()
        .exact("brand", arg_str(sub, "brand"))
        .exact("tracker_id", arg_str(sub, "tracker"))
        .exact("currency", arg_str(sub, "currency").to_uppercase())
        .range(
            "impressions",
            decimal_arg(sub, "min-impressions")?,
            decimal_arg(sub, "max-impressions")?,
        )
        .range(
            "clicks",
            decimal_arg(sub, "min-clicks")?,
            decimal_arg(sub, "max-clicks")?,
        )
        .range(
            "deposits",
            decimal_arg(sub, "min-deposits")?,
            decimal_arg(sub, "max-deposits")?,
        )
        .date_range("updated_at", date_arg(sub, "from")?, date_arg(sub, "to")?))
}

pub(crate) const TABLE_HEADERS: [&str; 9] = [
    "ID", "Brand", "Tracker", "Impressions", "Clicks", "CTR", "Signups", "Deposits", "Updated",
];

pub(crate) fn table_rows(items: &[TrafficItem]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|t| {
            vec![
                t.id.clone(),
                t.brand.clone(),
                t.tracker_id.clone(),
                t.impressions.to_string(),
                t.clicks.to_string(),
                fmt_rate(&derived_rate(t.clicks.into(), t.impressions.into())),
                t.signups.to_string(),
                t.deposits.to_string(),
                t.updated_at.format("%Y-%m-%d %H:%M").to_string(),
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
    let records = generator::traffic_items(sample_count(sub));
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
    let records = generator::traffic_items(sample_count(sub));
    let spec = filter_from_args(sub)?;

    let filtered = filter(&records, &spec);
    let all = aggregate(&records, &SUMMARY);
    let current = aggregate(&filtered, &SUMMARY);
    let clicks_pct = percent_of_total(current.total("clicks"), all.total("clicks"));

    let view = serde_json::json!({
        "records": current.count,
        "impressions": current.total("impressions"),
        "clicks": current.total("clicks"),
        "signups": current.total("signups"),
        "deposits": current.total("deposits"),
        "avg_ctr": current.avg_rate,
        "best_brand": current.best_bucket,
        "clicks_pct_of_total": clicks_pct,
    });
    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }

    let rows = vec![
        vec!["Records".into(), current.count.to_string()],
        vec![
            "Impressions".into(),
            current.total("impressions").to_string(),
        ],
        vec!["Clicks".into(), current.total("clicks").to_string()],
        vec!["Signups".into(), current.total("signups").to_string()],
        vec!["Deposits".into(), current.total("deposits").to_string()],
        vec!["Avg CTR".into(), fmt_rate(&current.avg_rate)],
        vec![
            "Best brand".into(),
            current.best_bucket.clone().unwrap_or_else(|| "-".into()),
        ],
        vec!["% of total clicks".into(), fmt_rate(&clicks_pct)],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    Ok(())
}
