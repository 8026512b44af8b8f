//! Core booking pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no state.
//! Amounts are integer cents; intermediate divisions go through `Decimal`.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::PricingConfig;

use super::models::{BookingDateRange, PriceUnit, ServiceOption, ServiceVariant};

const MINUTES_PER_HOUR: i64 = 60;

/// Round to specified decimal places, halves away from zero (ROUND_HALF_UP).
///
/// Every division in booking and commission math goes through this helper
/// so rounding stays consistent.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use petcare_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));
/// assert_eq!(round_money(dec!(1.235), 2), dec!(1.24));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a major-unit amount (euros) to cents, rounding half-up.
///
/// Values that do not fit in an `i64` collapse to 0.
pub fn major_to_cents(amount: Decimal) -> i64 {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|cents| round_money(cents, 0))
        .and_then(|cents| cents.to_i64())
        .unwrap_or_else(|| {
            warn!("Amount {} out of range, treating as 0", amount);
            0
        })
}

/// Prorate an hourly price over a duration in minutes.
///
/// `round(price * minutes / 60)`, halves rounded up.
pub fn prorate_hourly(price_per_hour: i64, minutes: i64) -> i64 {
    Decimal::from(price_per_hour)
        .checked_mul(Decimal::from(minutes))
        .map(|total| round_money(total / Decimal::from(MINUTES_PER_HOUR), 0))
        .and_then(|total| total.to_i64())
        .unwrap_or_else(|| {
            warn!(
                "Hourly proration overflow ({} x {} min), treating as 0",
                price_per_hour, minutes
            );
            0
        })
}

/// Number of billed days in a range, both ends inclusive.
///
/// An inverted range (end before start) bills a single day.
pub fn billable_days(range: &BookingDateRange) -> i64 {
    let days = (range.end_date - range.start_date).num_days() + 1;
    if days < 1 {
        warn!(
            "Inverted booking range {} -> {}, billing one day",
            range.start_date, range.end_date
        );
        return 1;
    }
    days
}

/// Breakdown of a booking total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingQuote {
    /// Variant price after hourly or daily scaling
    pub base: i64,
    /// Sum of selected option prices
    pub options_total: i64,
    pub total: i64,
    /// Set when the base was scaled by a day count
    pub billed_days: Option<i64>,
    /// Set when the base was prorated by a duration
    pub billed_minutes: Option<i64>,
}

/// Calculate the booking total with its breakdown.
///
/// Base amount:
/// 1. hourly variant with a duration: prorated over the duration
/// 2. daily variant with a date range: price x inclusive day count
/// 3. anything else: the raw price
///
/// Options are added once each, whatever their `price_type`.
pub fn calculate_booking_quote(
    variant: &ServiceVariant,
    options: &[ServiceOption],
    range: Option<&BookingDateRange>,
) -> BookingQuote {
    let mut billed_days = None;
    let mut billed_minutes = None;

    let base = match (variant.price_unit, variant.duration_minutes, range) {
        (PriceUnit::Hour, Some(minutes), _) => {
            billed_minutes = Some(minutes);
            prorate_hourly(variant.price, minutes)
        }
        (PriceUnit::Day, _, Some(range)) => {
            let days = billable_days(range);
            billed_days = Some(days);
            variant.price.saturating_mul(days)
        }
        _ => variant.price,
    };

    let options_total = options
        .iter()
        .fold(0i64, |acc, option| acc.saturating_add(option.price));

    BookingQuote {
        base,
        options_total,
        total: base.saturating_add(options_total),
        billed_days,
        billed_minutes,
    }
}

/// Calculate the amount in cents a client owes for one booking.
pub fn calculate_booking_total(
    variant: &ServiceVariant,
    options: &[ServiceOption],
    range: Option<&BookingDateRange>,
) -> i64 {
    calculate_booking_quote(variant, options, range).total
}

/// Format cents for display, e.g. `1500` -> `"15,00 EUR"`.
pub fn format_cents(cents: i64, config: &PricingConfig) -> String {
    let amount = Decimal::new(cents, 2).to_string();
    let amount = if config.decimal_separator == '.' {
        amount
    } else {
        amount.replace('.', &config.decimal_separator.to_string())
    };
    format!("{} {}", amount, config.currency)
}
