use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::clock::SystemClock;
use crate::domain::{AccountSnapshot, Clock, Command, Error, Result, Status, money};

/// Consecutive insufficient-funds withdrawals that lock the account.
pub const LOCKOUT_THRESHOLD: u32 = 3;

/// Days without a deposit or withdrawal after which an active account goes inactive.
pub const INACTIVITY_DAYS: i64 = 365;

/// A single savings account.
///
/// All state lives behind read-only accessors and changes only through the
/// operations below. The account is not synchronized; a host sharing one
/// between threads must serialize access to it.
#[derive(Debug)]
pub struct Account<C: Clock = SystemClock> {
    balance: Decimal,
    status: Status,
    last_operation_date: DateTime<Utc>,
    failed_withdrawal_count: u32,
    clock: C,
}

impl Default for Account<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> Account<C> {
    /// Opens an empty, inactive account stamped with the clock's current time.
    pub fn new(clock: C) -> Self {
        Self {
            balance: Decimal::ZERO,
            status: Status::Inactive,
            last_operation_date: clock.now(),
            failed_withdrawal_count: 0,
            clock,
        }
    }

    /// Rebuilds an account from a previously taken snapshot.
    pub fn restore(snapshot: AccountSnapshot, clock: C) -> Result<Self> {
        snapshot.validate()?;
        Ok(Self {
            balance: snapshot.balance,
            status: snapshot.status,
            last_operation_date: snapshot.last_operation_date,
            failed_withdrawal_count: snapshot.failed_withdrawal_count,
            clock,
        })
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            balance: self.balance,
            status: self.status,
            last_operation_date: self.last_operation_date,
            failed_withdrawal_count: self.failed_withdrawal_count,
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn last_operation_date(&self) -> DateTime<Utc> {
        self.last_operation_date
    }

    pub fn failed_withdrawal_count(&self) -> u32 {
        self.failed_withdrawal_count
    }

    /// Adds funds. An inactive account becomes active.
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }
        if matches!(self.status, Status::Closed | Status::Locked) {
            return Err(self.refuse("deposit"));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::Overflow("balance"))?;
        self.last_operation_date = self.clock.now();
        debug!(%amount, balance = %self.balance, "deposit");

        if self.status == Status::Inactive {
            self.status = Status::Active;
            info!("account activated by deposit");
        }
        Ok(())
    }

    /// Removes funds from an active account.
    ///
    /// A withdrawal larger than the balance fails, but still counts towards
    /// the lockout: the counter is incremented, and on reaching
    /// [`LOCKOUT_THRESHOLD`] the account is locked, before the error is returned.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }
        if self.status != Status::Active {
            return Err(self.refuse("withdraw"));
        }

        if amount > self.balance {
            self.failed_withdrawal_count = self.failed_withdrawal_count.saturating_add(1);
            warn!(
                %amount,
                balance = %self.balance,
                failures = self.failed_withdrawal_count,
                "withdrawal exceeds balance"
            );
            if self.failed_withdrawal_count >= LOCKOUT_THRESHOLD {
                self.status = Status::Locked;
                warn!(failures = self.failed_withdrawal_count, "account locked");
            }
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        self.last_operation_date = self.clock.now();
        self.failed_withdrawal_count = 0;
        debug!(%amount, balance = %self.balance, "withdraw");
        Ok(())
    }

    /// Interest the current balance would earn over `days`. Does not touch the account.
    pub fn calculate_interest(&self, days: i64) -> Result<Decimal> {
        if days <= 0 {
            return Err(Error::InvalidDays(days));
        }
        money::simple_interest(self.balance, days)
    }

    /// Closes an empty account for good.
    pub fn close_account(&mut self) -> Result<()> {
        if self.status == Status::Closed {
            return Err(Error::AlreadyClosed);
        }
        if !self.balance.is_zero() {
            return Err(Error::NonZeroBalance(self.balance));
        }
        self.transition(Status::Closed);
        Ok(())
    }

    pub fn activate_account(&mut self) -> Result<()> {
        match self.status {
            Status::Locked => Err(Error::CannotActivateLocked),
            Status::Closed => Err(Error::CannotActivateClosed),
            Status::Inactive | Status::Active => {
                self.transition(Status::Active);
                Ok(())
            }
        }
    }

    /// Lifts a lockout and clears the failure counter.
    pub fn unblock_account(&mut self) -> Result<()> {
        if self.status != Status::Locked {
            return Err(Error::NotLocked(self.status));
        }
        self.transition(Status::Active);
        self.failed_withdrawal_count = 0;
        Ok(())
    }

    /// Marks an active account inactive once more than [`INACTIVITY_DAYS`]
    /// have passed since its last deposit or withdrawal.
    pub fn check_activity(&mut self) {
        if self.status != Status::Active {
            return;
        }
        let idle = self.clock.now() - self.last_operation_date;
        if idle > TimeDelta::days(INACTIVITY_DAYS) {
            info!(idle_days = idle.num_days(), "account inactive");
            self.transition(Status::Inactive);
        }
    }

    /// Clears the failure counter. Closed accounts are left untouched.
    pub fn reset_failed_withdrawal_count(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        self.failed_withdrawal_count = 0;
    }

    /// Sets the status directly.
    ///
    /// Unlike [`activate_account`](Self::activate_account) and
    /// [`unblock_account`](Self::unblock_account) this does not gate
    /// `Locked -> Active` and leaves the failure counter alone. It only refuses
    /// to leave `Closed` or to close an account holding funds.
    pub fn change_status(&mut self, new_status: Status) -> Result<()> {
        if self.status == Status::Closed {
            return Err(Error::ClosedIsTerminal);
        }
        if new_status == Status::Closed && !self.balance.is_zero() {
            return Err(Error::NonZeroBalance(self.balance));
        }
        self.transition(new_status);
        Ok(())
    }

    /// Runs a command against the account.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        debug!(%command, "apply");
        match command {
            Command::Deposit { amount } => self.deposit(amount),
            Command::Withdraw { amount } => self.withdraw(amount),
            Command::Close => self.close_account(),
            Command::Activate => self.activate_account(),
            Command::Unblock => self.unblock_account(),
            Command::CheckActivity => {
                self.check_activity();
                Ok(())
            }
            Command::ResetFailedWithdrawals => {
                self.reset_failed_withdrawal_count();
                Ok(())
            }
            Command::ChangeStatus { status } => self.change_status(status),
        }
    }

    fn transition(&mut self, to: Status) {
        if self.status != to {
            info!(from = %self.status, %to, "status change");
        }
        self.status = to;
    }

    fn refuse(&self, operation: &'static str) -> Error {
        debug!(operation, status = %self.status, "operation refused");
        Error::InvalidStatusOperation {
            operation,
            status: self.status,
        }
    }
}
