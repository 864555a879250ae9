//! The purchase simulator — one phone, then accessories while
//! affordable.
//!
//! RULES:
//!   - Affordability checks are strict `>`: a balance exactly equal
//!     to a price does not buy.
//!   - The accessory loop is reachable only from the successful
//!     phone-purchase branch. A balance that could afford accessories
//!     but not the phone buys nothing. Intentionally kept that way;
//!     do not "fix" the coupling.
//!   - The final "wanted to spend" figure subtracts the current
//!     balance from the original starting amount, so it includes the
//!     phone. Also kept as-is.

use crate::{
    event::PurchaseEvent,
    pricing::PriceSheet,
    sink::OutputSink,
    types::{format_usd, Money},
};

/// Where a session is in its lifecycle. PurchasingAccessories is only
/// ever entered on a successful phone purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPhonePurchase,
    PurchasingAccessories,
    Done,
}

pub struct PurchaseSimulator {
    prices:         PriceSheet,
    initial_amount: Money,
    balance:        Money,
    phase:          Phase,
}

impl PurchaseSimulator {
    pub fn new(starting_balance: Money, prices: PriceSheet) -> Self {
        Self {
            prices,
            initial_amount: starting_balance,
            balance: starting_balance,
            phase: Phase::AwaitingPhonePurchase,
        }
    }

    /// Run the session to completion. Emits one status line per
    /// deduction step and returns the event transcript in the same
    /// order. Never fails: an unaffordable (or NaN) balance just
    /// produces zero lines and zero events.
    pub fn run(&mut self, sink: &mut dyn OutputSink) -> Vec<PurchaseEvent> {
        let mut events = Vec::new();

        if self.balance > self.prices.phone_price {
            self.balance -= self.prices.phone_price;
            self.phase = Phase::PurchasingAccessories;
            log::debug!(
                "simulator: phone bought, {} left for accessories",
                format_usd(self.balance)
            );

            sink.write_line(&format!(
                "Let's add some accessories I have {} to spend on accessories.",
                format_usd(self.balance)
            ));
            events.push(PurchaseEvent::PhonePurchased {
                remaining: self.balance,
            });

            while self.balance > self.prices.accessory_price {
                sink.write_line(&format!(
                    "Let's add some MORE accessories!! I still have {} to spend.",
                    format_usd(self.balance)
                ));
                events.push(PurchaseEvent::AccessoryPurchased {
                    balance_before: self.balance,
                });

                self.balance -= self.prices.accessory_price;

                if self.balance < self.prices.accessory_price {
                    let total_spent = self.initial_amount - self.balance;
                    sink.write_line(&format!(
                        "Better stop, I only wanted to spend {}",
                        format_usd(total_spent)
                    ));
                    events.push(PurchaseEvent::SpendingStopped { total_spent });
                }
            }
        } else {
            log::debug!(
                "simulator: phone at {} not affordable with {}, session ends",
                format_usd(self.prices.phone_price),
                format_usd(self.balance)
            );
        }

        self.phase = Phase::Done;
        events
    }

    pub fn remaining_balance(&self) -> Money {
        self.balance
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}
