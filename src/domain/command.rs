use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Error, Status, money::parse_amount};

/// A state-changing account operation, as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
    Close,
    Activate,
    Unblock,
    CheckActivity,
    ResetFailedWithdrawals,
    ChangeStatus { status: Status },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Deposit { .. } => "deposit",
            Command::Withdraw { .. } => "withdraw",
            Command::Close => "close",
            Command::Activate => "activate",
            Command::Unblock => "unblock",
            Command::CheckActivity => "check_activity",
            Command::ResetFailedWithdrawals => "reset_failed_withdrawals",
            Command::ChangeStatus { .. } => "change_status",
        }
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::Deposit { amount } | Command::Withdraw { amount } => {
                write!(f, "{},amount={}", self.name(), amount)
            }
            Command::ChangeStatus { status } => write!(f, "{},status={}", self.name(), status),
            _ => f.write_str(self.name()),
        }
    }
}

/// Untyped shape of a command as it arrives from outside the process.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCommand {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TryFrom<RawCommand> for Command {
    type Error = Error;

    fn try_from(raw: RawCommand) -> Result<Self, Self::Error> {
        let kind = raw.kind.trim().to_ascii_lowercase();
        let amount = || {
            raw.amount
                .as_deref()
                .ok_or_else(|| Error::InvalidFormat(format!("{kind} requires an amount")))
                .and_then(parse_amount)
        };

        let command = match kind.as_str() {
            "deposit" => Command::Deposit { amount: amount()? },
            "withdraw" | "withdrawal" => Command::Withdraw { amount: amount()? },
            "close" => Command::Close,
            "activate" => Command::Activate,
            "unblock" => Command::Unblock,
            "check_activity" => Command::CheckActivity,
            "reset_failed_withdrawals" => Command::ResetFailedWithdrawals,
            "change_status" => {
                let status = raw
                    .status
                    .as_deref()
                    .ok_or_else(|| Error::InvalidStatusValue(String::new()))?
                    .parse::<Status>()?;
                Command::ChangeStatus { status }
            }
            other => {
                return Err(Error::InvalidFormat(format!("Invalid command type: {other}")));
            }
        };

        Ok(command)
    }
}
