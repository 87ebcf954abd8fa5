// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use crate::commands::{arg_str, date_arg, decimal_arg, sample_count, view_state, NO_RECORDS};
use crate::generator::{self, DEAL_TYPES};
use crate::models::CpaItem;
use crate::pipeline::aggregate::{aggregate, percent_of_total, RateSpec, SummaryConfig};
use crate::pipeline::filter::{filter, FilterSpec};
use crate::pipeline::page::page;
use crate::pipeline::state::apply;
use crate::utils::{fmt_rate, maybe_print_json, pretty_table};

const SUMMARY: SummaryConfig = SummaryConfig {
    money_measures: &["gross_revenue", "commission"],
    count_measures: &["cpa_count", "deposits"],
    rate: Some(RateSpec {
        partial: "commission",
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
            "deposits",
            decimal_arg(sub, "min-deposits")?,
            decimal_arg(sub, "max-deposits")?,
        )
        .rate_range(
            "commission_rate",
            "commission",
            "gross_revenue",
            decimal_arg(sub, "min-rate")?,
            decimal_arg(sub, "max-rate")?,
        )
        .date_range("updated_at", date_arg(sub, "from")?, date_arg(sub, "to")?))
}

pub(crate) const TABLE_HEADERS: [&str; 10] = [
    "ID", "Brand", "Deal", "Tracker", "CCY", "CPA count", "Deposits", "Gross", "Commission",
    "Updated",
];

pub(crate) fn table_rows(items: &[CpaItem]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|c| {
            vec![
                c.id.clone(),
                c.brand.clone(),
                c.deal_type.clone(),
                c.tracker_id.clone(),
                c.currency.clone(),
                c.cpa_count.to_string(),
                c.deposits.to_string(),
                format!("{:.2}", c.gross_revenue),
                format!("{:.2}", c.commission),
                c.updated_at.format("%Y-%m-%d %H:%M").to_string(),
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
    let records = generator::cpa_items(sample_count(sub));
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
    let records = generator::cpa_items(sample_count(sub));
    let spec = filter_from_args(sub)?;

    let filtered = filter(&records, &spec);
    let all = aggregate(&records, &SUMMARY);
    let current = aggregate(&filtered, &SUMMARY);
    let cpa_pct = percent_of_total(current.total("cpa_count"), all.total("cpa_count"));

    let view = serde_json::json!({
        "records": current.count,
        "cpa_count": current.total("cpa_count"),
        "deposits": current.total("deposits"),
        "gross_revenue_usd": current.total("gross_revenue"),
        "commission_usd": current.total("commission"),
        "avg_commission_rate": current.avg_rate,
        "best_deal_type": current.best_bucket,
        "cpa_pct_of_total": cpa_pct,
    });
    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }

    let rows = vec![
        vec!["Records".into(), current.count.to_string()],
        vec!["CPA count".into(), current.total("cpa_count").to_string()],
        vec!["Deposits".into(), current.total("deposits").to_string()],
        vec![
            "Gross revenue (USD)".into(),
            format!("{:.2}", current.total("gross_revenue")),
        ],
        vec![
            "Commission (USD)".into(),
            format!("{:.2}", current.total("commission")),
        ],
        vec!["Avg commission rate".into(), fmt_rate(&current.avg_rate)],
        vec![
            "Best deal type".into(),
            current.best_bucket.clone().unwrap_or_else(|| "-".into()),
        ],
        vec!["% of total CPA count".into(), fmt_rate(&cpa_pct)],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    Ok(())
}
