// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use clap::ArgMatches;
use serde::Serialize;

use crate::commands::{affiliates, cpa, gross, revshare, sample_count, subaffiliates, traffic, view_state};
use crate::generator;
use crate::pipeline::sort::sort;
use crate::pipeline::state::apply;

pub fn handle(m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("affiliates", sub)) => export_affiliates(sub),
        Some(("subaffiliates", sub)) => export_subaffiliates(sub),
        Some(("gross", sub)) => export_gross(sub),
        Some(("cpa", sub)) => export_cpa(sub),
        Some(("traffic", sub)) => export_traffic(sub),
        Some(("revshare", sub)) => export_revshare(sub),
        _ => Ok(()),
    }
}

/// Export always covers the full filtered set, never just the current page.
/// CSV gets the flattened table rows; JSON gets the records themselves.
fn write_export<T: Serialize>(
    sub: &ArgMatches,
    headers: &[&str],
    rows: Vec<Vec<String>>,
    records: &T,
) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(headers)?;
            let n = rows.len();
            for r in rows {
                wtr.write_record(&r)?;
            }
            wtr.flush()?;
            println!("Exported {} rows to {}", n, out);
        }
        "json" => {
            let n = rows.len();
            std::fs::write(out, serde_json::to_string_pretty(records)?)?;
            println!("Exported {} rows to {}", n, out);
        }
        other => {
            bail!("Unknown format: {} (use csv|json)", other);
        }
    }
    Ok(())
}

fn export_affiliates(sub: &ArgMatches) -> Result<()> {
    let records = generator::affiliates(sample_count(sub));
    let f = affiliates::filter_from_args(sub)?;
    let state = view_state(sub, crate::pipeline::filter::FilterSpec::new())?;

    let filtered = affiliates::filter_affiliates(&records, &f);
    let rows = match &state.sort {
        Some(s) => sort(&filtered, &s.key, s.direction),
        None => filtered,
    };
    write_export(
        sub,
        &affiliates::TABLE_HEADERS,
        affiliates::table_rows(&rows),
        &rows,
    )
}

fn export_subaffiliates(sub: &ArgMatches) -> Result<()> {
    let records = subaffiliates::flatten(sample_count(sub));
    let state = view_state(sub, subaffiliates::filter_from_args(sub)?)?;
    let rows = apply(&records, &state);
    write_export(
        sub,
        &subaffiliates::TABLE_HEADERS,
        subaffiliates::table_rows(&rows),
        &rows,
    )
}

fn export_gross(sub: &ArgMatches) -> Result<()> {
    let records = generator::gross_items(sample_count(sub));
    let state = view_state(sub, gross::filter_from_args(sub)?)?;
    let rows = apply(&records, &state);
    write_export(sub, &gross::TABLE_HEADERS, gross::table_rows(&rows), &rows)
}

fn export_cpa(sub: &ArgMatches) -> Result<()> {
    let records = generator::cpa_items(sample_count(sub));
    let state = view_state(sub, cpa::filter_from_args(sub)?)?;
    let rows = apply(&records, &state);
    write_export(sub, &cpa::TABLE_HEADERS, cpa::table_rows(&rows), &rows)
}

fn export_traffic(sub: &ArgMatches) -> Result<()> {
    let records = generator::traffic_items(sample_count(sub));
    let state = view_state(sub, traffic::filter_from_args(sub)?)?;
    let rows = apply(&records, &state);
    write_export(
        sub,
        &traffic::TABLE_HEADERS,
        traffic::table_rows(&rows),
        &rows,
    )
}

fn export_revshare(sub: &ArgMatches) -> Result<()> {
    let records = generator::revshare_items(sample_count(sub));
    let state = view_state(sub, revshare::filter_from_args(sub)?)?;
    let rows = apply(&records, &state);
    write_export(
        sub,
        &revshare::TABLE_HEADERS,
        revshare::table_rows(&rows),
        &rows,
    )
}
