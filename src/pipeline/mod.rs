// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod filter;
pub mod page;
pub mod sort;
pub mod state;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// A single field value read off a record. Every report record exposes its
/// fields through [`Record::field`] so the filter and sort engines can stay
/// generic over the six report shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Num(Decimal),
    Time(NaiveDateTime),
}

/// Schema descriptor implemented by every report record kind.
///
/// `field` returns `None` for keys the record does not carry; the engines
/// treat an unknown key as "no opinion" (sort) or "no match" (filter).
pub trait Record {
    fn field(&self, key: &str) -> Option<FieldValue<'_>>;
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid page size {0}, expected one of 10, 25, 50, 100")]
    InvalidPageSize(usize),
    #[error("Invalid sort direction '{0}', expected 'asc' or 'desc'")]
    InvalidDirection(String),
}
