//! Pricing configuration — the constants fixed for one run.
//!
//! Base prices are pre-tax; the tax-inclusive figures the simulator
//! compares against live in [`crate::pricing::PriceSheet`].

use crate::{
    error::{ShopError, ShopResult},
    types::Money,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Fractional tax multiplier, e.g. 0.08 for 8%.
    pub tax_rate: f64,
    pub base_phone_price: Money,
    pub base_accessory_price: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.08,
            base_phone_price: 600.0,
            base_accessory_price: 60.0,
        }
    }
}

impl PricingConfig {
    /// Load a pricing config from a JSON file and validate it.
    pub fn load(path: &Path) -> ShopResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PricingConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the simulator cannot run against. The accessory
    /// loop terminates only because accessory_price > 0, so a
    /// non-positive base price is a hard error, not a warning.
    pub fn validate(&self) -> ShopResult<()> {
        if !self.tax_rate.is_finite() || self.tax_rate < 0.0 {
            return Err(ShopError::Config(format!(
                "tax_rate must be a non-negative finite fraction, got {}",
                self.tax_rate
            )));
        }
        if !(self.base_phone_price > 0.0) {
            return Err(ShopError::Config(format!(
                "base_phone_price must be positive, got {}",
                self.base_phone_price
            )));
        }
        if !(self.base_accessory_price > 0.0) {
            return Err(ShopError::Config(format!(
                "base_accessory_price must be positive, got {}",
                self.base_accessory_price
            )));
        }
        Ok(())
    }
}
