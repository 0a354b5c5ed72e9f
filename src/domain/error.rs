use rust_decimal::Decimal;

use crate::domain::Status;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way an account operation can be refused.
///
/// None of these are transient: retrying the same call against the same state
/// fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Invalid number of days: {0}")]
    InvalidDays(i64),

    #[error("Operation {operation} not allowed for account status {status}")]
    InvalidStatusOperation {
        operation: &'static str,
        status: Status,
    },

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Account is already closed")]
    AlreadyClosed,

    #[error("Cannot close account with non-zero balance {0}")]
    NonZeroBalance(Decimal),

    #[error("Cannot activate locked account, unblock it first")]
    CannotActivateLocked,

    #[error("Cannot activate closed account")]
    CannotActivateClosed,

    #[error("Account is not blocked (status {0})")]
    NotLocked(Status),

    #[error("Invalid account status: {0}")]
    InvalidStatusValue(String),

    #[error("Cannot change status of closed account")]
    ClosedIsTerminal,

    #[error("Arithmetic overflow computing {0}")]
    Overflow(&'static str),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}
