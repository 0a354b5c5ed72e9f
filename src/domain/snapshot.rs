use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Result, Status};

/// Plain-data copy of an account's state, for hosts that persist accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub balance: Decimal,
    pub status: Status,
    pub last_operation_date: DateTime<Utc>,
    pub failed_withdrawal_count: u32,
}

impl AccountSnapshot {
    /// Rejects states no sequence of operations could have produced.
    pub fn validate(&self) -> Result<()> {
        if self.balance < Decimal::ZERO {
            return Err(Error::InvalidSnapshot(format!(
                "negative balance {}",
                self.balance
            )));
        }
        if self.status == Status::Closed && !self.balance.is_zero() {
            return Err(Error::InvalidSnapshot(format!(
                "closed account holds {}",
                self.balance
            )));
        }
        Ok(())
    }
}
