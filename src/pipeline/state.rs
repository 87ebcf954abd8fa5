// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

use super::filter::{filter, FilterSpec};
use super::page::{page, PageSize};
use super::sort::{sort, SortState};
use super::Record;

/// Per-view interaction state: the active filters, sort column, and page
/// window. Immutable; every transition returns a new value, so the pipeline
/// stays a pure function of (records, state).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewState {
    pub filters: FilterSpec,
    pub sort: Option<SortState>,
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            filters: FilterSpec::new(),
            sort: None,
            page: 0,
            page_size: PageSize::TwentyFive,
        }
    }
}

impl ViewState {
    /// Replacing the filter set jumps back to the first page so a shrunken
    /// result can never leave the view stranded on an empty page.
    pub fn with_filters(&self, filters: FilterSpec) -> ViewState {
        ViewState {
            filters,
            page: 0,
            ..self.clone()
        }
    }

    /// Header-click transition: flip direction on the active key, or select
    /// the new key descending.
    pub fn toggle_sort(&self, key: &str) -> ViewState {
        let sort = match &self.sort {
            Some(s) => s.toggled(key),
            None => SortState::descending(key),
        };
        ViewState {
            sort: Some(sort),
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: usize) -> ViewState {
        ViewState {
            page,
            ..self.clone()
        }
    }

    /// Changing rows-per-page always returns to the first page.
    pub fn with_page_size(&self, page_size: PageSize) -> ViewState {
        ViewState {
            page_size,
            page: 0,
            ..self.clone()
        }
    }
}

/// Filter then sort, returning the full result set (what summaries and
/// exports consume).
pub fn apply<R: Record + Clone>(records: &[R], state: &ViewState) -> Vec<R> {
    let filtered = filter(records, &state.filters);
    match &state.sort {
        Some(s) => sort(&filtered, &s.key, s.direction),
        None => filtered,
    }
}

/// Filter, sort, and slice out the current page (what the table renders).
pub fn run<R: Record + Clone>(records: &[R], state: &ViewState) -> Vec<R> {
    let rows = apply(records, state);
    page(&rows, state.page, state.page_size).to_vec()
}
