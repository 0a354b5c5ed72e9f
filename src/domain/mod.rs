pub mod account;
pub mod command;
pub mod error;
pub mod money;
pub mod snapshot;
pub mod status;
pub mod traits;

pub use account::{Account, INACTIVITY_DAYS, LOCKOUT_THRESHOLD};
pub use command::{Command, RawCommand};
pub use error::{Error, Result};
pub use money::{parse_amount, parse_days};
pub use snapshot::AccountSnapshot;
pub use status::Status;
pub use traits::Clock;
