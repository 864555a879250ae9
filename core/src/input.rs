//! Input provider boundary — supplies the starting funds.
//!
//! RULE: the provider returns free-form text. Conversion happens in
//! exactly one place, [`parse_funds`], and a failed conversion is
//! NaN, never an error: NaN fails every affordability check, so the
//! simulator silently buys nothing.

use crate::{error::ShopResult, types::Money};
use std::io::{self, BufRead, Write};

/// The injected source of the one value a session needs.
pub trait InputProvider {
    /// How much money is available for this purchase, as entered.
    fn starting_funds(&mut self) -> ShopResult<String>;
}

/// Interactive provider: prompts on stdout, reads one line from stdin.
pub struct StdinProvider;

impl InputProvider for StdinProvider {
    fn starting_funds(&mut self) -> ShopResult<String> {
        print!("How much money do you have for this purchase today? ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Canned provider for tests and non-interactive runs.
pub struct FixedInput(pub String);

impl InputProvider for FixedInput {
    fn starting_funds(&mut self) -> ShopResult<String> {
        Ok(self.0.clone())
    }
}

/// Convert the raw funds text to a Money value. Any text that does
/// not parse as a number becomes NaN.
pub fn parse_funds(raw: &str) -> Money {
    raw.trim().parse::<Money>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_funds("2000"), 2000.0);
        assert_eq!(parse_funds("  700.50 \n"), 700.5);
        assert_eq!(parse_funds("-5"), -5.0);
    }

    #[test]
    fn non_numeric_text_becomes_nan() {
        assert!(parse_funds("abc").is_nan());
        assert!(parse_funds("").is_nan());
        assert!(parse_funds("$700").is_nan());
    }
}
