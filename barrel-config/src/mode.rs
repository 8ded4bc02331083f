//! Barrel placement modes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which directories of a tree receive a barrel file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationMode {
    /// Only the root directory
    #[default]
    Top,
    /// Each direct child of the root
    Below,
    /// Every directory
    All,
    /// Directories that already contain a barrel
    Replace,
    /// Directories that have sub-directories
    Branch,
}

impl LocationMode {
    /// Returns the mode identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationMode::Top => "top",
            LocationMode::Below => "below",
            LocationMode::All => "all",
            LocationMode::Replace => "replace",
            LocationMode::Branch => "branch",
        }
    }
}

impl fmt::Display for LocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LocationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(LocationMode::Top),
            "below" => Ok(LocationMode::Below),
            "all" => Ok(LocationMode::All),
            "replace" => Ok(LocationMode::Replace),
            "branch" => Ok(LocationMode::Branch),
            _ => Err(format!(
                "unknown location '{}', expected one of: top, below, all, replace, branch",
                s
            )),
        }
    }
}
