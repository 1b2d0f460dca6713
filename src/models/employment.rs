use serde::{Deserialize, Serialize};
use std::fmt;

/// Employment fraction in percent. Stored as the bare integer (100 or 80).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Employment {
    Full,
    Partial,
}

impl Employment {
    pub fn percent(&self) -> u8 {
        match self {
            Employment::Full => 100,
            Employment::Partial => 80,
        }
    }
}

impl TryFrom<u8> for Employment {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            100 => Ok(Employment::Full),
            80 => Ok(Employment::Partial),
            other => Err(format!("employment must be 100 or 80, got {}", other)),
        }
    }
}

impl From<Employment> for u8 {
    fn from(e: Employment) -> Self {
        e.percent()
    }
}

impl fmt::Display for Employment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
