// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use crate::commands::{arg_str, decimal_arg, sample_count, view_state, NO_RECORDS};
use crate::generator::{self, DEAL_TYPES};
use crate::models::{Affiliate, SubAffiliate};
use crate::pipeline::aggregate::{aggregate, percent_of_total, RateSpec, Summary, SummaryConfig};
use crate::pipeline::filter::{derived_rate, FilterSpec};
use crate::pipeline::page::page;
use crate::pipeline::sort::sort;
use crate::utils::{fmt_rate, maybe_print_json, pretty_table};

const SUMMARY: SummaryConfig = SummaryConfig {
    money_measures: &["gross_revenue", "commission", "profit"],
    count_measures: &["deposits"],
    rate: Some(RateSpec {
        partial: "commission",
        base: "gross_revenue",
        convert: true,
    }),
    bucket_key: Some("deal_type"),
    bucket_order: &DEAL_TYPES,
    currency_key: "currency",
};

const SUB_SUMMARY: SummaryConfig = SummaryConfig {
    money_measures: &["gross_revenue", "commission"],
    count_measures: &["deposits"],
    rate: Some(RateSpec {
        partial: "commission",
        base: "gross_revenue",
        convert: true,
    }),
    bucket_key: Some("deal_type"),
    bucket_order: &DEAL_TYPES,
    currency_key: "currency",
};

/// Filter input for the affiliate report. The standard per-parent spec and
/// the sub-affiliate username search are mutually exclusive in effect: while
/// a sub-username query is set it takes over the whole pass.
#[derive(Debug, Clone, Default)]
pub struct AffiliateFilter {
    pub spec: FilterSpec,
    pub sub_username: String,
}

/// Filter pass for the affiliate tree. A baseline rule always restricts the
/// report to partners with at least one sub-affiliate. With a sub-username
/// query set, surviving parents are rebuilt with only their matching
/// children (the input tree is never touched); the other per-parent filters
/// are ignored for that pass, which mirrors the dashboard's historical
/// behavior.
pub fn filter_affiliates(records: &[Affiliate], f: &AffiliateFilter) -> Vec<Affiliate> {
    let with_subs = records.iter().filter(|a| !a.sub_affiliates.is_empty());
    if f.sub_username.is_empty() {
        return with_subs.filter(|a| f.spec.matches(*a)).cloned().collect();
    }
    let query = f.sub_username.to_lowercase();
    with_subs
        .filter_map(|a| {
            let subs: Vec<SubAffiliate> = a
                .sub_affiliates
                .iter()
                .filter(|s| s.username.to_lowercase().contains(&query))
                .cloned()
                .collect();
            if subs.is_empty() {
                None
            } else {
                Some(Affiliate {
                    sub_affiliates: subs,
                    ..a.clone()
                })
            }
        })
        .collect()
}

/// Totals for the affiliate report. Sub-affiliate measures are first-class
/// contributors: each surviving parent's children are folded into the same
/// totals, not summarized on their own.
pub fn summarize(records: &[Affiliate]) -> Summary {
    let mut summary = aggregate(records, &SUMMARY);
    let subs: Vec<SubAffiliate> = records
        .iter()
        .flat_map(|a| a.sub_affiliates.iter().cloned())
        .collect();
    summary.absorb(aggregate(&subs, &SUB_SUMMARY), &DEAL_TYPES);
    summary
}

pub(crate) fn filter_from_args(sub: &ArgMatches) -> Result<AffiliateFilter> {
    let spec = FilterSpec::new()
        .exact("brand", arg_str(sub, "brand"))
        .exact("category", arg_str(sub, "category"))
        .exact("deal_type", arg_str(sub, "deal-type"))
        .exact("tracker_id", arg_str(sub, "tracker"))
        .exact("currency", arg_str(sub, "currency").to_uppercase())
        .contains("username", arg_str(sub, "username"))
        .contains("company", arg_str(sub, "company"))
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
        );
    Ok(AffiliateFilter {
        spec,
        sub_username: arg_str(sub, "sub-username"),
    })
}

pub(crate) fn table_rows(items: &[Affiliate]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|a| {
            vec![
                a.id.clone(),
                a.username.clone(),
                a.company.clone(),
                a.brand.clone(),
                a.category.clone(),
                a.deal_type.clone(),
                a.tracker_id.clone(),
                a.currency.clone(),
                format!("{:.2}", a.gross_revenue),
                format!("{:.2}", a.commission),
                fmt_rate(&derived_rate(a.commission, a.gross_revenue)),
                format!("{:.2}", a.profit),
                a.deposits.to_string(),
                a.sub_affiliates.len().to_string(),
            ]
        })
        .collect()
}

pub(crate) const TABLE_HEADERS: [&str; 14] = [
    "ID", "Username", "Company", "Brand", "Category", "Deal", "Tracker", "CCY", "Gross",
    "Commission", "Rate", "Profit", "Deposits", "Subs",
];

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
    let records = generator::affiliates(sample_count(sub));
    let f = filter_from_args(sub)?;
    let state = view_state(sub, FilterSpec::new())?;

    let filtered = filter_affiliates(&records, &f);
    let rows = match &state.sort {
        Some(s) => sort(&filtered, &s.key, s.direction),
        None => filtered,
    };
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
    let records = generator::affiliates(sample_count(sub));
    let f = filter_from_args(sub)?;

    let filtered = filter_affiliates(&records, &f);
    let all = summarize(&records);
    let current = summarize(&filtered);
    let revenue_pct = percent_of_total(current.total("gross_revenue"), all.total("gross_revenue"));

    let view = serde_json::json!({
        "affiliates": filtered.len(),
        "contributing_records": current.count,
        "gross_revenue_usd": current.total("gross_revenue"),
        "commission_usd": current.total("commission"),
        "profit_usd": current.total("profit"),
        "deposits": current.total("deposits"),
        "avg_commission_rate": current.avg_rate,
        "best_deal_type": current.best_bucket,
        "revenue_pct_of_total": revenue_pct,
    });
    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }

    let rows = vec![
        vec!["Affiliates".into(), filtered.len().to_string()],
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
        vec!["Deposits".into(), current.total("deposits").to_string()],
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
