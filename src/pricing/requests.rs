//! Request DTOs mirroring booking and payout form state.
//!
//! Form fields arrive loosely typed (numbers, numeric strings, empty
//! strings, nulls). Amounts that cannot be read coerce to 0; durations and
//! dates that cannot be read are treated as absent.

use chrono::{DateTime, NaiveDate};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use crate::error::Result;

use super::calculators::round_money;
use super::models::{
    BookingDateRange, OptionPriceType, PendingPayment, PriceUnit, ServiceOption, ServiceVariant,
};

/// Read a loosely typed value as a whole number, if possible.
///
/// Fractional values round half-up.
fn read_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .and_then(Decimal::from_f64)
                .and_then(|d| round_money(d, 0).to_i64())
        }),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                trimmed
                    .parse::<Decimal>()
                    .ok()
                    .and_then(|d| round_money(d, 0).to_i64())
            })
        }
        _ => None,
    }
}

/// Coerce an amount in cents; anything unreadable becomes 0.
pub fn coerce_cents(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        other => read_integer(other).unwrap_or_else(|| {
            warn!("Unreadable amount {}, using 0", other);
            0
        }),
    }
}

/// `deserialize_with` adapter for cent amounts
pub fn lenient_cents<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_cents(&value))
}

/// `deserialize_with` adapter for optional minute counts
pub fn lenient_minutes<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        other => {
            let minutes = read_integer(other);
            if minutes.is_none() {
                warn!("Unreadable duration {}, ignoring", other);
            }
            minutes
        }
    })
}

/// Parse a form date: `YYYY-MM-DD` or an RFC 3339 timestamp (its date part).
pub fn parse_form_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            warn!("Unreadable date '{}', ignoring", raw);
            None
        })
}

/// Variant as sent by the booking form
#[derive(Debug, Deserialize)]
pub struct ServiceVariantRequest {
    #[serde(default, deserialize_with = "lenient_cents")]
    pub price: i64,
    #[serde(default, alias = "priceUnit")]
    pub price_unit: Option<String>,
    #[serde(default, alias = "durationMinutes", deserialize_with = "lenient_minutes")]
    pub duration_minutes: Option<i64>,
}

impl ServiceVariantRequest {
    pub fn to_variant(&self) -> ServiceVariant {
        ServiceVariant {
            price: self.price,
            price_unit: self
                .price_unit
                .as_deref()
                .map(PriceUnit::from)
                .unwrap_or(PriceUnit::Flat),
            duration_minutes: self.duration_minutes,
        }
    }
}

/// Selected option as sent by the booking form
#[derive(Debug, Deserialize)]
pub struct ServiceOptionRequest {
    #[serde(default, deserialize_with = "lenient_cents")]
    pub price: i64,
    #[serde(default, alias = "priceType")]
    pub price_type: Option<String>,
}

impl ServiceOptionRequest {
    pub fn to_option(&self) -> ServiceOption {
        ServiceOption {
            price: self.price,
            price_type: self
                .price_type
                .as_deref()
                .map(OptionPriceType::from)
                .unwrap_or_default(),
        }
    }
}

/// Request to quote a booking
#[derive(Debug, Deserialize)]
pub struct BookingQuoteRequest {
    pub variant: ServiceVariantRequest,
    #[serde(default, alias = "selectedOptions")]
    pub options: Vec<ServiceOptionRequest>,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, alias = "endDate")]
    pub end_date: Option<String>,
}

impl BookingQuoteRequest {
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn options(&self) -> Vec<ServiceOption> {
        self.options.iter().map(ServiceOptionRequest::to_option).collect()
    }

    /// Range is only available when both dates parse
    pub fn date_range(&self) -> Option<BookingDateRange> {
        let start = self.start_date.as_deref().and_then(parse_form_date)?;
        let end = self.end_date.as_deref().and_then(parse_form_date)?;
        Some(BookingDateRange::new(start, end))
    }
}

/// Pending payment row as listed on the payouts page
#[derive(Debug, Deserialize)]
pub struct PendingPaymentRequest {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_cents")]
    pub amount: i64,
}

impl PendingPaymentRequest {
    pub fn to_pending_payment(&self) -> PendingPayment {
        PendingPayment::new(self.id.clone(), self.amount)
    }
}

/// Request to preview a payout for selected missions
#[derive(Debug, Deserialize)]
pub struct PayoutPreviewRequest {
    #[serde(default)]
    pub pending: Vec<PendingPaymentRequest>,
    #[serde(default, alias = "selectedMissionIds")]
    pub selected_ids: Vec<String>,
}

impl PayoutPreviewRequest {
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn pending_payments(&self) -> Vec<PendingPayment> {
        self.pending
            .iter()
            .map(PendingPaymentRequest::to_pending_payment)
            .collect()
    }
}
