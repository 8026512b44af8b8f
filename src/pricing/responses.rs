//! Response DTOs returned to the booking and payout views.

use serde::Serialize;

use crate::config::PricingConfig;

use super::calculators::format_cents;

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoneyResponse {
    /// Minor units (cents)
    pub amount: i64,
    pub currency: String,
    pub formatted: String,
}

impl MoneyResponse {
    pub fn new(amount: i64, config: &PricingConfig) -> Self {
        Self {
            amount,
            currency: config.currency.clone(),
            formatted: format_cents(amount, config),
        }
    }
}

/// Response for a booking quote
#[derive(Debug, Serialize)]
pub struct BookingQuoteResponse {
    pub base: MoneyResponse,
    pub options_total: MoneyResponse,
    pub total: MoneyResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billed_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billed_minutes: Option<i64>,
}

/// Response for a commission preview
#[derive(Debug, Serialize)]
pub struct CommissionResponse {
    pub gross: MoneyResponse,
    /// Percent
    pub rate: u32,
    pub fee: MoneyResponse,
    pub net: MoneyResponse,
}

/// Response for a payout preview over the selected missions
#[derive(Debug, Serialize)]
pub struct PayoutPreviewResponse {
    pub selected_count: usize,
    pub all_selected: bool,
    pub commission: CommissionResponse,
    /// False when the selected amount is not positive
    pub can_submit: bool,
}

/// One row of the commission grid
#[derive(Debug, Serialize)]
pub struct CommissionTierResponse {
    pub min: MoneyResponse,
    pub max: Option<MoneyResponse>,
    pub rate: u32,
    pub label: String,
}
