// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pipeline::{FieldValue, Record};

/// Top-level partner row on the affiliate performance report. Owns its
/// sub-affiliates outright; they have no lifecycle of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Affiliate {
    pub id: String,
    pub username: String,
    pub company: String,
    pub brand: String,
    pub category: String,
    pub deal_type: String,
    pub tracker_id: String,
    pub currency: String,
    pub gross_revenue: Decimal,
    pub commission: Decimal,
    pub profit: Decimal,
    pub deposits: i64,
    pub sub_affiliates: Vec<SubAffiliate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubAffiliate {
    pub id: String,
    pub parent_id: String,
    pub username: String,
    pub deal_type: String,
    pub currency: String,
    pub gross_revenue: Decimal,
    pub commission: Decimal,
    pub deposits: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrossItem {
    pub id: String,
    pub brand: String,
    pub category: String,
    pub deal_type: String,
    pub currency: String,
    pub gross_revenue: Decimal,
    pub commission: Decimal,
    pub profit: Decimal,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpaItem {
    pub id: String,
    pub brand: String,
    pub deal_type: String,
    pub tracker_id: String,
    pub currency: String,
    pub cpa_count: i64,
    pub deposits: i64,
    pub gross_revenue: Decimal,
    pub commission: Decimal,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficItem {
    pub id: String,
    pub brand: String,
    pub tracker_id: String,
    pub currency: String,
    pub impressions: i64,
    pub clicks: i64,
    pub signups: i64,
    pub deposits: i64,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevShareItem {
    pub id: String,
    pub brand: String,
    pub deal_type: String,
    pub tracker_id: String,
    pub currency: String,
    pub share_amount: Decimal,
    pub gross_revenue: Decimal,
    pub updated_at: NaiveDateTime,
}

impl Record for Affiliate {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Str(&self.id)),
            "username" => Some(FieldValue::Str(&self.username)),
            "company" => Some(FieldValue::Str(&self.company)),
            "brand" => Some(FieldValue::Str(&self.brand)),
            "category" => Some(FieldValue::Str(&self.category)),
            "deal_type" => Some(FieldValue::Str(&self.deal_type)),
            "tracker_id" => Some(FieldValue::Str(&self.tracker_id)),
            "currency" => Some(FieldValue::Str(&self.currency)),
            "gross_revenue" => Some(FieldValue::Num(self.gross_revenue)),
            "commission" => Some(FieldValue::Num(self.commission)),
            "profit" => Some(FieldValue::Num(self.profit)),
            "deposits" => Some(FieldValue::Num(Decimal::from(self.deposits))),
            _ => None,
        }
    }
}

impl Record for SubAffiliate {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Str(&self.id)),
            "parent_id" => Some(FieldValue::Str(&self.parent_id)),
            "username" => Some(FieldValue::Str(&self.username)),
            "deal_type" => Some(FieldValue::Str(&self.deal_type)),
            "currency" => Some(FieldValue::Str(&self.currency)),
            "gross_revenue" => Some(FieldValue::Num(self.gross_revenue)),
            "commission" => Some(FieldValue::Num(self.commission)),
            "deposits" => Some(FieldValue::Num(Decimal::from(self.deposits))),
            _ => None,
        }
    }
}

impl Record for GrossItem {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Str(&self.id)),
            "brand" => Some(FieldValue::Str(&self.brand)),
            "category" => Some(FieldValue::Str(&self.category)),
            "deal_type" => Some(FieldValue::Str(&self.deal_type)),
            "currency" => Some(FieldValue::Str(&self.currency)),
            "gross_revenue" => Some(FieldValue::Num(self.gross_revenue)),
            "commission" => Some(FieldValue::Num(self.commission)),
            "profit" => Some(FieldValue::Num(self.profit)),
            "updated_at" => Some(FieldValue::Time(self.updated_at)),
            _ => None,
        }
    }
}

impl Record for CpaItem {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Str(&self.id)),
            "brand" => Some(FieldValue::Str(&self.brand)),
            "deal_type" => Some(FieldValue::Str(&self.deal_type)),
            "tracker_id" => Some(FieldValue::Str(&self.tracker_id)),
            "currency" => Some(FieldValue::Str(&self.currency)),
            "cpa_count" => Some(FieldValue::Num(Decimal::from(self.cpa_count))),
            "deposits" => Some(FieldValue::Num(Decimal::from(self.deposits))),
            "gross_revenue" => Some(FieldValue::Num(self.gross_revenue)),
            "commission" => Some(FieldValue::Num(self.commission)),
            "updated_at" => Some(FieldValue::Time(self.updated_at)),
            _ => None,
        }
    }
}

impl Record for TrafficItem {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Str(&self.id)),
            "brand" => Some(FieldValue::Str(&self.brand)),
            "tracker_id" => Some(FieldValue::Str(&self.tracker_id)),
            "currency" => Some(FieldValue::Str(&self.currency)),
            "impressions" => Some(FieldValue::Num(Decimal::from(self.impressions))),
            "clicks" => Some(FieldValue::Num(Decimal::from(self.clicks))),
            "signups" => Some(FieldValue::Num(Decimal::from(self.signups))),
            "deposits" => Some(FieldValue::Num(Decimal::from(self.deposits))),
            "updated_at" => Some(FieldValue::Time(self.updated_at)),
            _ => None,
        }
    }
}

impl Record for RevShareItem {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "id" => Some(FieldValue::Str(&self.id)),
            "brand" => Some(FieldValue::Str(&self.brand)),
            "deal_type" => Some(FieldValue::Str(&self.deal_type)),
            "tracker_id" => Some(FieldValue::Str(&self.tracker_id)),
            "currency" => Some(FieldValue::Str(&self.currency)),
            "share_amount" => Some(FieldValue::Num(self.share_amount)),
            "gross_revenue" => Some(FieldValue::Num(self.gross_revenue)),
            "updated_at" => Some(FieldValue::Time(self.updated_at)),
            _ => None,
        }
    }
}
