//! Tiered platform commission on announcer payouts.
//!
//! The lower the payout, the higher the rate. Tiers are fixed constants:
//!
//! | payout (EUR)      | rate |
//! |-------------------|------|
//! | 0 - 149.99        | 15 % |
//! | 150 - 499.99      | 10 % |
//! | 500 - 999.99      |  7 % |
//! | 1000 - 1499.99    |  5 % |
//! | 1500 and above    |  3 % |

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::calculators::{major_to_cents, round_money};

/// Rate applied when no tier matches (only reachable with negative amounts)
pub const FALLBACK_RATE: u32 = 15;

/// One commission bracket, bounds in cents and inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionTier {
    pub min_cents: i64,
    /// `None` means unbounded
    pub max_cents: Option<i64>,
    pub rate: u32,
}

impl CommissionTier {
    pub fn contains(&self, amount: i64) -> bool {
        amount >= self.min_cents && self.max_cents.map_or(true, |max| amount <= max)
    }
}

const COMMISSION_TIERS: [CommissionTier; 5] = [
    CommissionTier {
        min_cents: 0,
        max_cents: Some(14_999),
        rate: 15,
    },
    CommissionTier {
        min_cents: 15_000,
        max_cents: Some(49_999),
        rate: 10,
    },
    CommissionTier {
        min_cents: 50_000,
        max_cents: Some(99_999),
        rate: 7,
    },
    CommissionTier {
        min_cents: 100_000,
        max_cents: Some(149_999),
        rate: 5,
    },
    CommissionTier {
        min_cents: 150_000,
        max_cents: None,
        rate: 3,
    },
];

/// The ordered tier table
pub fn commission_tiers() -> &'static [CommissionTier] {
    &COMMISSION_TIERS
}

/// First tier containing `amount`, scanning in order
pub fn find_tier(amount: i64) -> Option<&'static CommissionTier> {
    COMMISSION_TIERS.iter().find(|tier| tier.contains(amount))
}

/// Fee / net split of a payout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commission {
    pub rate: u32,
    pub fee: i64,
    pub net: i64,
}

/// Resolve the commission for a gross payout in cents.
///
/// `fee = round_half_up(amount * rate / 100)` and `net = amount - fee`,
/// so `fee + net == amount` always holds.
pub fn resolve_commission(amount: i64) -> Commission {
    let rate = find_tier(amount).map_or(FALLBACK_RATE, |tier| tier.rate);

    // i64 * 15 / 100 is exact in Decimal's 96-bit mantissa
    let fee = round_money(
        Decimal::from(amount) * Decimal::from(rate) / Decimal::ONE_HUNDRED,
        0,
    )
    .to_i64()
    .unwrap_or(0);

    Commission {
        rate,
        fee,
        net: amount - fee,
    }
}

/// Resolve the commission for a payout expressed in euros.
pub fn resolve_commission_major(amount: Decimal) -> Commission {
    resolve_commission(major_to_cents(amount))
}
