use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::{Error, Result};

/// Decimal places kept on computed interest.
pub const INTEREST_DECIMALS: u32 = 2;

pub const DAYS_PER_YEAR: i64 = 365;

/// Annual interest rate for a balance.
///
/// Tiers are inclusive at the top: up to 1 000 earns 1%, up to 10 000 earns 2%,
/// anything above earns 3%.
pub fn annual_rate(balance: Decimal) -> Decimal {
    if balance <= Decimal::ONE_THOUSAND {
        Decimal::new(1, 2)
    } else if balance <= Decimal::new(10_000, 0) {
        Decimal::new(2, 2)
    } else {
        Decimal::new(3, 2)
    }
}

/// Simple interest on `balance` over `days`, rounded half-to-even to two places.
///
/// Callers validate `days` first. Fails with [`Error::Overflow`] when the
/// product does not fit in a `Decimal`.
pub fn simple_interest(balance: Decimal, days: i64) -> Result<Decimal> {
    let raw = balance
        .checked_mul(annual_rate(balance))
        .and_then(|yearly| yearly.checked_mul(Decimal::from(days)))
        .and_then(|total| total.checked_div(Decimal::from(DAYS_PER_YEAR)))
        .ok_or(Error::Overflow("interest"))?;
    Ok(raw.round_dp(INTEREST_DECIMALS))
}

/// Parses an amount from untyped input.
///
/// Only the format is checked here; sign is the operation's business.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::InvalidFormat("empty amount".to_string()));
    }
    Decimal::from_str(s).map_err(|e| Error::InvalidFormat(format!("amount {s:?}: {e}")))
}

/// Parses a whole number of days from untyped input. `"30.0"` is not a day count.
pub fn parse_days(s: &str) -> Result<i64> {
    let s = s.trim();
    i64::from_str(s).map_err(|_| Error::InvalidFormat(format!("days {s:?} is not an integer")))
}
