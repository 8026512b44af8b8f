//! Value objects for booking and payout pricing.
//!
//! All amounts are integer minor currency units (cents). Nothing here is
//! persisted; values are rebuilt from backend data on each page view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Unit a service variant's price is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PriceUnit {
    Hour,
    Day,
    Week,
    Month,
    Flat,
}

impl From<&str> for PriceUnit {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "hour" => PriceUnit::Hour,
            "day" => PriceUnit::Day,
            "week" => PriceUnit::Week,
            "month" => PriceUnit::Month,
            _ => PriceUnit::Flat,
        }
    }
}

impl From<String> for PriceUnit {
    fn from(value: String) -> Self {
        PriceUnit::from(value.as_str())
    }
}

/// How an add-on option is meant to scale
///
/// Only `Flat` is applied today: every option is added once to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum OptionPriceType {
    #[default]
    Flat,
    PerDay,
    PerUnit,
}

impl From<&str> for OptionPriceType {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "per_day" => OptionPriceType::PerDay,
            "per_unit" => OptionPriceType::PerUnit,
            _ => OptionPriceType::Flat,
        }
    }
}

impl From<String> for OptionPriceType {
    fn from(value: String) -> Self {
        OptionPriceType::from(value.as_str())
    }
}

/// A bookable variant of a service (e.g. "dog walk, 1 hour")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceVariant {
    pub price: i64,
    pub price_unit: PriceUnit,
    pub duration_minutes: Option<i64>,
}

impl ServiceVariant {
    pub fn new(price: i64, price_unit: PriceUnit) -> Self {
        Self {
            price,
            price_unit,
            duration_minutes: None,
        }
    }

    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }
}

/// Add-on selected on top of the variant (e.g. "medication given")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOption {
    pub price: i64,
    #[serde(default)]
    pub price_type: OptionPriceType,
}

impl ServiceOption {
    pub fn flat(price: i64) -> Self {
        Self {
            price,
            price_type: OptionPriceType::Flat,
        }
    }
}

/// Calendar date range of a booking, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl BookingDateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }
}

/// A completed mission whose payment has not been paid out yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPayment {
    pub id: String,
    pub amount: i64,
}

impl PendingPayment {
    pub fn new(id: impl Into<String>, amount: i64) -> Self {
        Self {
            id: id.into(),
            amount,
        }
    }
}

/// Payout an announcer submits for a batch of missions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoutRequest {
    pub amount: i64,
    pub selected_mission_ids: BTreeSet<String>,
    pub commission_rate: u32,
    pub commission_fee: i64,
    pub net_amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_unit_from_str() {
        assert_eq!(PriceUnit::from("hour"), PriceUnit::Hour);
        assert_eq!(PriceUnit::from("DAY"), PriceUnit::Day);
        assert_eq!(PriceUnit::from(" week "), PriceUnit::Week);
        assert_eq!(PriceUnit::from("month"), PriceUnit::Month);
        assert_eq!(PriceUnit::from("flat"), PriceUnit::Flat);
        assert_eq!(PriceUnit::from("per_visit"), PriceUnit::Flat);
    }

    #[test]
    fn test_price_unit_serde() {
        let unit: PriceUnit = serde_json::from_str("\"hour\"").unwrap();
        assert_eq!(unit, PriceUnit::Hour);
        let unit: PriceUnit = serde_json::from_str("\"session\"").unwrap();
        assert_eq!(unit, PriceUnit::Flat);
        assert_eq!(serde_json::to_string(&PriceUnit::Day).unwrap(), "\"day\"");
    }

    #[test]
    fn test_option_price_type_serde() {
        let kind: OptionPriceType = serde_json::from_str("\"per_day\"").unwrap();
        assert_eq!(kind, OptionPriceType::PerDay);
        let kind: OptionPriceType = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(kind, OptionPriceType::Flat);
        assert_eq!(
            serde_json::to_string(&OptionPriceType::PerUnit).unwrap(),
            "\"per_unit\""
        );
    }

    #[test]
    fn test_option_defaults_to_flat() {
        let option: ServiceOption = serde_json::from_str(r#"{"price": 500}"#).unwrap();
        assert_eq!(option, ServiceOption::flat(500));
    }

    #[test]
    fn test_variant_builder() {
        let variant = ServiceVariant::new(1000, PriceUnit::Hour).with_duration(90);
        assert_eq!(variant.duration_minutes, Some(90));
    }
}
