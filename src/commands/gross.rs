// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use crate::commands::{arg_str, date_arg, decimal_arg, sample_count, view_state, NO_RECORDS};
use crate::generator::{self, DEAL_TYPES};
use crate::models::GrossItem;
use crate::pipeline::aggregate::{aggregate, percent_of_total, RateSpec, SummaryConfig};
use crate::pipeline::filter::{derived_rate, filter, FilterSpec};
use crate::pipeline::page::page;
use crate::pipeline::state::apply;
use crate::utils::{fmt_rate, maybe_print_json, pretty_table};

const SUMMARY: SummaryConfig = SummaryConfig {
    money_measures: &["gross_revenue", "commission", "profit"],
    count_measures: &[],
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
        .exact("category", arg_str(sub, "category"))
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
        )
        .date_range("updated_at", date_arg(sub, "from")?, date_arg(sub, "to")?))
}

pub(crate) const TABLE_HEADERS: [&str; 10] = [
    "ID", "Brand", "Category", "Deal", "CCY", "Gross", "Commission", "Rate", "Profit", "Updated",
];

pub(crate) fn table_rows(items: &[GrossItem]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|g| {
            vec![
                g.id.clone(),
                g.brand.clone(),
                g.category.clone(),
                g.deal_type.clone(),
                g.currency.clone(),
                format!("{:.2}", g.gross_revenue),
                format!("{:.2}", g.commission),
                fmt_rate(&derived_rate(g.commission, g.gross_revenue)),
                format!("{:.2}", g.profit),
                g.updated_at.format("%Y-%m-%d %H:%M").to_string(),
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
    let records = generator::gross_items(sample_count(sub));
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
    let records = generator::gross_items(sample_count(sub));
    let spec = filter_from_args(sub)?;

    let filtered = filter(&records, &spec);
    let all = aggregate(&records, &SUMMARY);
    let current = aggregate(&filtered, &SUMMARY);
    let revenue_pct = percent_of_total(current.total("gross_revenue"), all.total("gross_revenue"));

    let view = serde_json::json!({
        "records": current.count,
        "gross_revenue_usd": current.total("gross_revenue"),
        "commission_usd": current.total("commission"),
        "profit_usd": current.total("profit"),
        "avg_commission_rate": current.avg_rate,
        "best_deal_type": current.best_bucket,
        "revenue_pct_of_total": revenue_pct,
    });
    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }

    let rows = vec![
        vec!["Records".into(), current.count.to_string()],
        vec![
            "Gross revenue (USD)".into(),
            format!("{:.2}", current.total("gross_revenue")),
        ],
        vec![
            "Commission (USD)".into(),
            format!("{:.2}", current.total("commission")),
        ],
        vec![
            "Profit (USD)".into(),
            format!("{:.2}", current.total("profit")),
        ],
        vec!["Avg commission rate".into(), fmt_rate(&current.avg_rate)],
        vec![
            "Best deal type".into(),
            current.best_bucket.clone().unwrap_or_else(|| "-".into()),
        ],
        vec!["% of total revenue".into(), fmt_rate(&revenue_pct)],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));
    Ok(())
}
