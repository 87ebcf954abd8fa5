// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use afflens::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("affiliates", sub)) => commands::affiliates::handle(sub)?,
        Some(("subaffiliates", sub)) => commands::subaffiliates::handle(sub)?,
        Some(("gross", sub)) => commands::gross::handle(sub)?,
        Some(("cpa", sub)) => commands::cpa::handle(sub)?,
        Some(("traffic", sub)) => commands::traffic::handle(sub)?,
        Some(("revshare", sub)) => commands::revshare::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
