// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use afflens::{cli, commands::exporter, generator};
use tempfile::tempdir;

fn run_export(args: &[&str]) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_gross_writes_pretty_json() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("gross.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&[
        "afflens", "export", "gross", "--format", "json", "--out", &out_str, "--count", "40",
    ])
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 40);
    assert!(rows[0].get("gross_revenue").is_some());
    assert!(rows[0].get("brand").is_some());
}

#[test]
fn export_covers_the_full_filtered_set_not_just_one_page() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("gross.csv");
    let out_str = out_path.to_string_lossy().to_string();

    // Page args must not shrink the export: everything matching the filter
    // lands in the file.
    run_export(&[
        "afflens",
        "export",
        "gross",
        "--format",
        "csv",
        "--out",
        &out_str,
        "--count",
        "60",
        "--brand",
        "BetRoyal",
        "--page",
        "1",
        "--page-size",
        "10",
    ])
    .unwrap();

    let expected = generator::gross_items(60)
        .iter()
        .filter(|g| g.brand == "BetRoyal")
        .count();
    let contents = std::fs::read_to_string(&out_path).unwrap();
    let data_lines = contents.lines().count() - 1; // header
    assert_eq!(data_lines, expected);
    assert!(contents.lines().next().unwrap().contains("Brand"));
}

#[test]
fn export_subaffiliates_flattens_children() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("subs.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&[
        "afflens",
        "export",
        "subaffiliates",
        "--format",
        "json",
        "--out",
        &out_str,
        "--count",
        "25",
    ])
    .unwrap();

    let expected: usize = generator::affiliates(25)
        .iter()
        .map(|a| a.sub_affiliates.len())
        .sum();
    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), expected);
}

#[test]
fn export_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("gross.xml");
    let out_str = out_path.to_string_lossy().to_string();

    let res = run_export(&[
        "afflens", "export", "gross", "--format", "xml", "--out", &out_str,
    ]);
    assert!(res.is_err());
    assert!(!out_path.exists());
}
