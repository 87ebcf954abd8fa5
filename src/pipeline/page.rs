// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

use super::PipelineError;

/// Rows-per-page, restricted to the sizes the report views offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub fn as_usize(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PipelineError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            10 => Ok(PageSize::Ten),
            25 => Ok(PageSize::TwentyFive),
            50 => Ok(PageSize::Fifty),
            100 => Ok(PageSize::Hundred),
            other => Err(PipelineError::InvalidPageSize(other)),
        }
    }
}

/// The window `[index*size, index*size + size)` clamped to the collection.
/// An index past the end yields an empty slice, never a panic, so a filter
/// that shrinks the result set cannot break rendering.
pub fn page<R>(records: &[R], index: usize, size: PageSize) -> &[R] {
    let n = size.as_usize();
    let start = index.saturating_mul(n);
    if start >= records.len() {
        return &[];
    }
    let end = (start + n).min(records.len());
    &records[start..end]
}
