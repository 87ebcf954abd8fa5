// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{FieldValue, PipelineError, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn flipped(self) -> Direction {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

impl FromStr for Direction {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Direction::Ascending),
            "desc" => Ok(Direction::Descending),
            other => Err(PipelineError::InvalidDirection(other.to_string())),
        }
    }
}

/// Active sort column and direction for one report view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub direction: Direction,
}

impl SortState {
    /// A fresh selection always starts descending; users want the biggest
    /// numbers on top when they first click a column.
    pub fn descending(key: impl Into<String>) -> Self {
        SortState {
            key: key.into(),
            direction: Direction::Descending,
        }
    }

    /// Header-click semantics: re-selecting the active key flips direction,
    /// selecting a different key resets to descending.
    pub fn toggled(&self, key: &str) -> SortState {
        if self.key == key {
            SortState {
                key: self.key.clone(),
                direction: self.direction.flipped(),
            }
        } else {
            SortState::descending(key)
        }
    }
}

fn compare<R: Record>(a: &R, b: &R, key: &str) -> Ordering {
    match (a.field(key), b.field(key)) {
        (Some(FieldValue::Str(x)), Some(FieldValue::Str(y))) => x.cmp(y),
        (Some(FieldValue::Num(x)), Some(FieldValue::Num(y))) => x.cmp(&y),
        (Some(FieldValue::Time(x)), Some(FieldValue::Time(y))) => x.cmp(&y),
        // Unknown key or mismatched kinds: every pair compares equal and the
        // stable sort leaves the input order alone.
        _ => Ordering::Equal,
    }
}

/// Stable sort into a new vector; the input is never mutated. Ties keep
/// their relative input order in both directions.
pub fn sort<R: Record + Clone>(records: &[R], key: &str, direction: Direction) -> Vec<R> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });
    out
}
