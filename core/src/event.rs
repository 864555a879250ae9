//! Purchase events — the machine-readable mirror of the status lines.
//!
//! RULE: one event per deduction step, in emission order, plus the
//! session-start marker. Variants are never removed or reordered.

use crate::types::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PurchaseEvent {
    SessionStarted {
        starting_balance: Money,
    },
    /// The phone was affordable and has been deducted.
    /// `remaining` is the balance left for accessories.
    PhonePurchased {
        remaining: Money,
    },
    /// One accessory deduction is about to apply; `balance_before`
    /// is what the status line reports.
    AccessoryPurchased {
        balance_before: Money,
    },
    /// The deduction just applied was the last affordable one.
    /// `total_spent` is the original starting amount minus the
    /// current balance, so it covers the phone as well — the figure
    /// the final status line has always reported.
    SpendingStopped {
        total_spent: Money,
    },
}

/// Stable string name for an event variant. Used by tooling when
/// dumping a transcript.
pub fn event_type_name(event: &PurchaseEvent) -> &'static str {
    match event {
        PurchaseEvent::SessionStarted { .. }    => "session_started",
        PurchaseEvent::PhonePurchased { .. }    => "phone_purchased",
        PurchaseEvent::AccessoryPurchased { .. } => "accessory_purchased",
        PurchaseEvent::SpendingStopped { .. }   => "spending_stopped",
    }
}
