//! Pricing service functions consumed by the booking and payout views.
//!
//! Each function takes a request DTO, runs the pure calculators and builds
//! the response DTO. None of them can fail.

use tracing::{debug, info};

use crate::config::PricingConfig;

use super::calculators::{calculate_booking_quote, format_cents};
use super::commission::{commission_tiers, resolve_commission, Commission};
use super::payouts::PendingPayouts;
use super::requests::{BookingQuoteRequest, PayoutPreviewRequest};
use super::responses::{
    BookingQuoteResponse, CommissionResponse, CommissionTierResponse, MoneyResponse,
    PayoutPreviewResponse,
};

/// Quote the amount a client owes for a booking.
pub fn quote_booking(config: &PricingConfig, request: &BookingQuoteRequest) -> BookingQuoteResponse {
    let variant = request.variant.to_variant();
    let options = request.options();
    let range = request.date_range();

    let quote = calculate_booking_quote(&variant, &options, range.as_ref());

    debug!(
        price = variant.price,
        unit = ?variant.price_unit,
        options = options.len(),
        base = quote.base,
        total = quote.total,
        "Booking quoted"
    );

    BookingQuoteResponse {
        base: MoneyResponse::new(quote.base, config),
        options_total: MoneyResponse::new(quote.options_total, config),
        total: MoneyResponse::new(quote.total, config),
        billed_days: quote.billed_days,
        billed_minutes: quote.billed_minutes,
    }
}

fn commission_response(config: &PricingConfig, gross: i64, commission: Commission) -> CommissionResponse {
    CommissionResponse {
        gross: MoneyResponse::new(gross, config),
        rate: commission.rate,
        fee: MoneyResponse::new(commission.fee, config),
        net: MoneyResponse::new(commission.net, config),
    }
}

/// Preview the commission split for a gross payout in cents.
pub fn preview_commission(config: &PricingConfig, amount: i64) -> CommissionResponse {
    let commission = resolve_commission(amount);
    debug!(
        amount,
        rate = commission.rate,
        fee = commission.fee,
        "Commission resolved"
    );
    commission_response(config, amount, commission)
}

/// Preview the payout for the missions selected on the payouts page.
pub fn preview_payout(
    config: &PricingConfig,
    request: &PayoutPreviewRequest,
) -> PayoutPreviewResponse {
    let mut payouts = PendingPayouts::new(request.pending_payments());
    for id in &request.selected_ids {
        if !payouts.selection().contains(id) {
            payouts.toggle(id);
        }
    }

    let preview = payouts.preview();
    let can_submit = payouts.build_request().is_some();

    info!(
        pending = payouts.records().len(),
        selected = preview.selected_count,
        amount = preview.selected_amount,
        rate = preview.commission.rate,
        "Payout previewed"
    );

    PayoutPreviewResponse {
        selected_count: preview.selected_count,
        all_selected: payouts.is_all_selected(),
        commission: commission_response(config, preview.selected_amount, preview.commission),
        can_submit,
    }
}

/// The commission grid shown next to the payout form.
pub fn list_commission_tiers(config: &PricingConfig) -> Vec<CommissionTierResponse> {
    commission_tiers()
        .iter()
        .map(|tier| {
            let label = match tier.max_cents {
                Some(max) => format!(
                    "{} - {}: {}%",
                    format_cents(tier.min_cents, config),
                    format_cents(max, config),
                    tier.rate
                ),
                None => format!("{}+: {}%", format_cents(tier.min_cents, config), tier.rate),
            };
            CommissionTierResponse {
                min: MoneyResponse::new(tier.min_cents, config),
                max: tier.max_cents.map(|max| MoneyResponse::new(max, config)),
                rate: tier.rate,
                label,
            }
        })
        .collect()
}
