// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn opt(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .action(ArgAction::SetTrue)
        .help(help)
}

fn json_args() -> Vec<Arg> {
    vec![
        flag("json", "Print as pretty JSON"),
        flag("jsonl", "Print as JSON lines"),
    ]
}

fn view_args() -> Vec<Arg> {
    vec![
        Arg::new("count")
            .long("count")
            .value_parser(clap::value_parser!(usize))
            .default_value("250")
            .help("Sample records to generate"),
        opt("sort", "Sort key (a record field name)"),
        opt("dir", "Sort direction: asc or desc (default desc)"),
        Arg::new("page")
            .long("page")
            .value_parser(clap::value_parser!(usize))
            .default_value("0")
            .help("Zero-based page index"),
        Arg::new("page-size")
            .long("page-size")
            .value_parser(clap::value_parser!(usize))
            .default_value("25")
            .help("Rows per page: 10, 25, 50 or 100"),
    ]
}

fn count_arg() -> Arg {
    Arg::new("count")
        .long("count")
        .value_parser(clap::value_parser!(usize))
        .default_value("250")
        .help("Sample records to generate")
}

fn date_args() -> Vec<Arg> {
    vec![
        opt("from", "Only records updated on or after this date (YYYY-MM-DD)"),
        opt("to", "Only records updated up to this date (YYYY-MM-DD)"),
    ]
}

fn rate_args() -> Vec<Arg> {
    vec![
        opt("min-rate", "Minimum derived rate in percent"),
        opt("max-rate", "Maximum derived rate in percent"),
    ]
}

fn revenue_args() -> Vec<Arg> {
    vec![
        opt("min-revenue", "Minimum gross revenue"),
        opt("max-revenue", "Maximum gross revenue"),
    ]
}

fn affiliate_filter_args() -> Vec<Arg> {
    let mut args = vec![
        opt("brand", "Exact brand"),
        opt("category", "Exact category"),
        opt("deal-type", "Exact deal type (CPA, CPS, CPL, RevShare, Hybrid)"),
        opt("tracker", "Exact tracker id"),
        opt("currency", "Exact currency code"),
        opt("username", "Username contains (case-insensitive)"),
        opt("company", "Company name contains (case-insensitive)"),
        opt(
            "sub-username",
            "Sub-affiliate username contains; replaces the other filters while set",
        ),
    ];
    args.extend(revenue_args());
    args.extend(rate_args());
    args
}

fn subaffiliate_filter_args() -> Vec<Arg> {
    let mut args = vec![
        opt("username", "Username contains (case-insensitive)"),
        opt("deal-type", "Exact deal type"),
        opt("currency", "Exact currency code"),
    ];
    args.extend(revenue_args());
    args.extend(rate_args());
    args
}

fn gross_filter_args() -> Vec<Arg> {
    let mut args = vec![
        opt("brand", "Exact brand"),
        opt("category", "Exact category"),
        opt("deal-type", "Exact deal type"),
        opt("currency", "Exact currency code"),
    ];
    args.extend(revenue_args());
    args.extend(rate_args());
    args.extend(date_args());
    args
}

fn cpa_filter_args() -> Vec<Arg> {
    let mut args = vec![
        opt("brand", "Exact brand"),
        opt("deal-type", "Exact deal type"),
        opt("tracker", "Exact tracker id"),
        opt("currency", "Exact currency code"),
        opt("min-deposits", "Minimum deposits"),
        opt("max-deposits", "Maximum deposits"),
    ];
    args.extend(rate_args());
    args.extend(date_args());
    args
}

fn traffic_filter_args() -> Vec<Arg> {
    let mut args = vec![
        opt("brand", "Exact brand"),
        opt("tracker", "Exact tracker id"),
        opt("currency", "Exact currency code"),
        opt("min-impressions", "Minimum impressions"),
        opt("max-impressions", "Maximum impressions"),
        opt("min-clicks", "Minimum clicks"),
        opt("max-clicks", "Maximum clicks"),
        opt("min-deposits", "Minimum deposits"),
        opt("max-deposits", "Maximum deposits"),
    ];
    args.extend(date_args());
    args
}

fn revshare_filter_args() -> Vec<Arg> {
    let mut args = vec![
        opt("brand", "Exact brand"),
        opt("deal-type", "Exact deal type"),
        opt("tracker", "Exact tracker id"),
        opt("currency", "Exact currency code"),
        opt("min-share", "Minimum share percentage"),
        opt("max-share", "Maximum share percentage"),
    ];
    args.extend(revenue_args());
    args.extend(date_args());
    args
}

fn report_cmd(name: &'static str, about: &'static str, filters: Vec<Arg>) -> Command {
    Command::new(name)
        .about(about)
        .subcommand(
            Command::new("list")
                .about("Render one page of the filtered, sorted report")
                .args(filters.clone())
                .args(view_args())
                .args(json_args()),
        )
        .subcommand(
            Command::new("summary")
                .about("Aggregate totals over the filtered report")
                .args(filters)
                .arg(count_arg())
                .args(json_args()),
        )
}

fn export_target(name: &'static str, filters: Vec<Arg>) -> Command {
    Command::new(name)
        .args(filters)
        .args(view_args())
        .arg(
            opt("format", "Output format: csv or json")
                .required(true),
        )
        .arg(opt("out", "Output file path").required(true))
}

pub fn build_cli() -> Command {
    Command::new("afflens")
        .about("Affiliate-marketing analytics reports over generated sample data")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(report_cmd(
            "affiliates",
            "Affiliate performance report (partners with their sub-affiliates)",
            affiliate_filter_args(),
        ))
        .subcommand(
            Command::new("subaffiliates")
                .about("Flattened sub-affiliate report")
                .subcommand(
                    Command::new("list")
                        .about("Render one page of the filtered, sorted report")
                        .args(subaffiliate_filter_args())
                        .args(view_args())
                        .args(json_args()),
                ),
        )
        .subcommand(report_cmd(
            "gross",
            "Gross revenue report",
            gross_filter_args(),
        ))
        .subcommand(report_cmd("cpa", "CPA counts report", cpa_filter_args()))
        .subcommand(report_cmd(
            "traffic",
            "Traffic report (impressions, clicks, signups)",
            traffic_filter_args(),
        ))
        .subcommand(report_cmd(
            "revshare",
            "Revenue share report",
            revshare_filter_args(),
        ))
        .subcommand(
            Command::new("export")
                .about("Write the full filtered row set of a report to a file")
                .subcommand(export_target("affiliates", affiliate_filter_args()))
                .subcommand(export_target("subaffiliates", subaffiliate_filter_args()))
                .subcommand(export_target("gross", gross_filter_args()))
                .subcommand(export_target("cpa", cpa_filter_args()))
                .subcommand(export_target("traffic", traffic_filter_args()))
                .subcommand(export_target("revshare", revshare_filter_args())),
        )
}
