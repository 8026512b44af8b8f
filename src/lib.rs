//! Booking price and payout commission engine for the pet-care marketplace.
//!
//! Synchronous, side-effect free library: the booking and payout views
//! call into [`pricing::services`] and render the returned DTOs.

pub mod config;
pub mod error;
pub mod pricing;
pub mod telemetry;

pub use config::PricingConfig;
pub use error::{AppError, Result};
