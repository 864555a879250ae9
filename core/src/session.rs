//! Session orchestration — wires the input provider, the price
//! derivation, and the simulator together for one run.

use crate::{
    config::PricingConfig,
    error::ShopResult,
    event::PurchaseEvent,
    input::{parse_funds, InputProvider},
    pricing::PriceSheet,
    simulator::PurchaseSimulator,
    sink::OutputSink,
    types::Money,
};

/// What a completed session looks like from the outside.
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// The parsed starting amount. NaN if the input was non-numeric.
    pub starting_balance: Money,
    pub remaining_balance: Money,
    /// Count of accessory deductions. Redundant with the event
    /// transcript but spares callers the quirky total-spent figure.
    pub accessories_bought: usize,
    pub events: Vec<PurchaseEvent>,
}

pub struct PurchaseSession {
    config: PricingConfig,
}

impl PurchaseSession {
    pub fn new(config: PricingConfig) -> ShopResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run one purchase session end to end. The only error here is a
    /// failing provider; everything downstream of a successfully read
    /// input is infallible by design.
    pub fn run(
        &self,
        provider: &mut dyn InputProvider,
        sink: &mut dyn OutputSink,
    ) -> ShopResult<SessionReport> {
        let raw = provider.starting_funds()?;
        let starting_balance = parse_funds(&raw);
        let prices = PriceSheet::derive(&self.config);

        log::info!(
            "session: starting_balance={starting_balance} phone_price={} accessory_price={}",
            prices.phone_price,
            prices.accessory_price
        );

        let mut events = vec![PurchaseEvent::SessionStarted { starting_balance }];

        let mut simulator = PurchaseSimulator::new(starting_balance, prices);
        events.extend(simulator.run(sink));

        let accessories_bought = events
            .iter()
            .filter(|e| matches!(e, PurchaseEvent::AccessoryPurchased { .. }))
            .count();

        Ok(SessionReport {
            starting_balance,
            remaining_balance: simulator.remaining_balance(),
            accessories_bought,
            events,
        })
    }
}
