//! Tax-inclusive price derivation.
//!
//! Prices are derived once per run from [`PricingConfig`] and never
//! change afterwards.

use crate::{config::PricingConfig, types::Money};

/// Apply the tax rate to a base price.
pub fn with_tax(base: Money, tax_rate: f64) -> Money {
    base + base * tax_rate
}

/// The tax-inclusive prices the simulator compares the balance
/// against. Invariant: each derived price >= its base price for any
/// validated (non-negative) tax rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSheet {
    pub phone_price: Money,
    pub accessory_price: Money,
}

impl PriceSheet {
    pub fn derive(config: &PricingConfig) -> Self {
        Self {
            phone_price: with_tax(config.base_phone_price, config.tax_rate),
            accessory_price: with_tax(config.base_accessory_price, config.tax_rate),
        }
    }
}
