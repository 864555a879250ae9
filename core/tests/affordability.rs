use shopsim_core::{
    config::PricingConfig,
    input::FixedInput,
    pricing::PriceSheet,
    session::PurchaseSession,
    simulator::{Phase, PurchaseSimulator},
    sink::MemorySink,
};

fn run_with_funds(funds: &str) -> (shopsim_core::session::SessionReport, Vec<String>) {
    let session = PurchaseSession::new(PricingConfig::default()).unwrap();
    let mut provider = FixedInput(funds.into());
    let mut sink = MemorySink::default();
    let report = session.run(&mut provider, &mut sink).unwrap();
    (report, sink.lines)
}

#[test]
fn five_hundred_short_of_phone_buys_nothing() {
    let (report, lines) = run_with_funds("500");

    assert!(lines.is_empty());
    assert_eq!(report.remaining_balance, 500.0);
    assert_eq!(report.accessories_bought, 0);
    // Only the SessionStarted marker, no purchase events.
    assert_eq!(report.events.len(), 1);
}

#[test]
fn balance_equal_to_phone_price_does_not_buy() {
    // Strict `>`: exactly the phone price is not enough.
    let prices = PriceSheet::derive(&PricingConfig::default());
    let mut sim = PurchaseSimulator::new(prices.phone_price, prices);
    let mut sink = MemorySink::default();

    let events = sim.run(&mut sink);

    assert!(sink.lines.is_empty());
    assert!(events.is_empty());
    assert_eq!(sim.remaining_balance(), prices.phone_price);
    assert_eq!(sim.phase(), Phase::Done);
}

#[test]
fn balance_landing_exactly_on_accessory_price_skips_stop_message() {
    // 150 - 100 = 50 > 25, buy one accessory, balance 25. The stop
    // message needs balance < accessory_price strictly; 25 < 25 is
    // false, so the loop just ends silently.
    let prices = PriceSheet {
        phone_price: 100.0,
        accessory_price: 25.0,
    };
    let mut sim = PurchaseSimulator::new(150.0, prices);
    let mut sink = MemorySink::default();

    sim.run(&mut sink);

    assert_eq!(sink.lines.len(), 2); // phone line + one accessory line
    assert!(!sink.lines[1].starts_with("Better stop"));
    assert_eq!(sim.remaining_balance(), 25.0);
}

#[test]
fn accessories_unreachable_without_phone_purchase() {
    // $100 affords an accessory ($64.80) but not the phone; the
    // accessory loop only runs after a phone purchase, so nothing
    // happens.
    let (report, lines) = run_with_funds("100");

    assert!(lines.is_empty());
    assert_eq!(report.remaining_balance, 100.0);
    assert_eq!(report.accessories_bought, 0);
}

#[test]
fn non_numeric_input_buys_nothing_without_error() {
    let (report, lines) = run_with_funds("abc");

    assert!(lines.is_empty());
    assert!(report.starting_balance.is_nan());
    assert!(report.remaining_balance.is_nan());
    assert_eq!(report.accessories_bought, 0);
}

#[test]
fn empty_input_buys_nothing() {
    let (report, lines) = run_with_funds("");

    assert!(lines.is_empty());
    assert!(report.starting_balance.is_nan());
}

#[test]
fn negative_and_zero_balances_buy_nothing() {
    for funds in ["-50", "0"] {
        let (report, lines) = run_with_funds(funds);
        assert!(lines.is_empty(), "funds={funds} produced output");
        assert_eq!(report.remaining_balance, report.starting_balance);
    }
}
