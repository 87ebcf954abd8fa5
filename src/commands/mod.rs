// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod affiliates;
pub mod cpa;
pub mod exporter;
pub mod gross;
pub mod revshare;
pub mod subaffiliates;
pub mod traffic;

use anyhow::Result;
use chrono::NaiveDate;
use clap::ArgMatches;
use rust_decimal::Decimal;

use crate::pipeline::filter::FilterSpec;
use crate::pipeline::page::PageSize;
use crate::pipeline::sort::{Direction, SortState};
use crate::pipeline::state::ViewState;
use crate::utils::{parse_date, parse_decimal};

pub(crate) fn sample_count(sub: &ArgMatches) -> usize {
    sub.get_one::<usize>("count").copied().unwrap_or(250)
}

pub(crate) fn arg_str(sub: &ArgMatches, name: &str) -> String {
    sub.get_one::<String>(name).cloned().unwrap_or_default()
}

pub(crate) fn decimal_arg(sub: &ArgMatches, name: &str) -> Result<Option<Decimal>> {
    sub.get_one::<String>(name)
        .map(|s| parse_decimal(s))
        .transpose()
}

pub(crate) fn date_arg(sub: &ArgMatches, name: &str) -> Result<Option<NaiveDate>> {
    sub.get_one::<String>(name)
        .map(|s| parse_date(s))
        .transpose()
}

/// Build the per-view state from shared CLI args. Page size is applied
/// before the page index because changing rows-per-page resets the page.
pub(crate) fn view_state(sub: &ArgMatches, filters: FilterSpec) -> Result<ViewState> {
    let mut state = ViewState::default().with_filters(filters);
    if let Some(key) = sub.get_one::<String>("sort") {
        let direction = match sub.get_one::<String>("dir") {
            Some(d) => d.parse::<Direction>()?,
            None => Direction::Descending,
        };
        state.sort = Some(SortState {
            key: key.clone(),
            direction,
        });
    }
    if let Some(n) = sub.get_one::<usize>("page-size") {
        state = state.with_page_size(PageSize::try_from(*n)?);
    }
    if let Some(p) = sub.get_one::<usize>("page") {
        state = state.with_page(*p);
    }
    Ok(state)
}

pub(crate) const NO_RECORDS: &str = "No records found";
