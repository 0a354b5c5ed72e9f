use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Error;

/// Lifecycle state of an account. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Inactive,
    Active,
    Locked,
    Closed,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Inactive,
        Status::Active,
        Status::Locked,
        Status::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Inactive => "INACTIVE",
            Status::Active => "ACTIVE",
            Status::Locked => "LOCKED",
            Status::Closed => "CLOSED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Closed)
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INACTIVE" => Ok(Status::Inactive),
            "ACTIVE" => Ok(Status::Active),
            "LOCKED" => Ok(Status::Locked),
            "CLOSED" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatusValue(s.to_string())),
        }
    }
}
