//! Pricing engine for the pet-care marketplace.
//!
//! Computes what a client owes for a booking and what an announcer keeps
//! from a payout after the platform's tiered commission.

pub mod calculators;
pub mod commission;
pub mod models;
pub mod payouts;
pub mod requests;
pub mod responses;
pub mod services;

// Re-export commonly used items
pub use calculators::{calculate_booking_quote, calculate_booking_total, round_money, BookingQuote};
pub use commission::{resolve_commission, resolve_commission_major, Commission, CommissionTier};
pub use models::{
    BookingDateRange, OptionPriceType, PayoutRequest, PendingPayment, PriceUnit, ServiceOption,
    ServiceVariant,
};
pub use payouts::{selected_amount, PayoutPreview, PayoutSelection, PendingPayouts};
