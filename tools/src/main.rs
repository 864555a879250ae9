//! shop-runner: headless runner for the phone purchase simulator.
//!
//! Usage:
//!   shop-runner --funds 2000
//!   shop-runner --funds 2000 --config pricing.json --json
//!   shop-runner              (prompts for funds on stdin)

use anyhow::Result;
use shopsim_core::{
    config::PricingConfig,
    event::event_type_name,
    input::{FixedInput, InputProvider, StdinProvider},
    session::PurchaseSession,
    sink::ConsoleSink,
    types::format_usd,
};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let funds = args
        .windows(2)
        .find(|w| w[0] == "--funds")
        .map(|w| w[1].clone());
    let config_path = args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].clone());
    let json_out = args.iter().any(|a| a == "--json");

    let config = match &config_path {
        Some(path) => PricingConfig::load(Path::new(path))?,
        None => PricingConfig::default(),
    };

    if !json_out {
        println!("shopsim — shop-runner");
        println!("  tax_rate:        {}", config.tax_rate);
        println!("  phone (base):    {}", format_usd(config.base_phone_price));
        println!("  accessory (base): {}", format_usd(config.base_accessory_price));
        println!();
    }

    let mut provider: Box<dyn InputProvider> = match funds {
        Some(raw) => Box::new(FixedInput(raw)),
        None => Box::new(StdinProvider),
    };

    let session = PurchaseSession::new(config)?;
    let report = session.run(provider.as_mut(), &mut ConsoleSink)?;
    log::debug!("runner: session complete, {} events", report.events.len());

    if json_out {
        for event in &report.events {
            println!("{}", serde_json::to_string(event)?);
        }
        return Ok(());
    }

    println!();
    println!("=== SESSION SUMMARY ===");
    println!("  starting balance:   {}", format_usd(report.starting_balance));
    println!("  remaining balance:  {}", format_usd(report.remaining_balance));
    println!("  accessories bought: {}", report.accessories_bought);
    println!(
        "  events:             {}",
        report
            .events
            .iter()
            .map(event_type_name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
