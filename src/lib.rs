//! Lifecycle of a single savings account.
//!
//! An [`Account`] holds a balance and a [`Status`] and moves between
//! `Inactive`, `Active`, `Locked` and the terminal `Closed` only through its
//! operations. Time comes from an injected [`Clock`], so activity timeouts can
//! be replayed deterministically with [`ManualClock`].
//!
//! Persistence, scheduling of [`Account::check_activity`] and serializing
//! access across threads are left to the host.

pub mod clock;
pub mod domain;

pub use clock::{ManualClock, SystemClock};
pub use domain::{
    Account, AccountSnapshot, Clock, Command, Error, INACTIVITY_DAYS, LOCKOUT_THRESHOLD,
    RawCommand, Result, Status, parse_amount, parse_days,
};
