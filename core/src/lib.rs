//! shopsim-core — the phone purchase simulator.
//!
//! One run = one purchase session: buy the phone if affordable, then
//! accessories while affordable, one status line per deduction.
//! All boundaries (funds input, status output) are injected traits so
//! runs are deterministic and testable without a console.

pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod pricing;
pub mod session;
pub mod simulator;
pub mod sink;
pub mod types;
