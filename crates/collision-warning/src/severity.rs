//! Ordinal warning severity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Warning level in `[0, 7]`; 0 is no warning, 7 is imminent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SeverityLevel(u8);

impl SeverityLevel {
    pub const NONE: SeverityLevel = SeverityLevel(0);
    pub const IMMINENT: SeverityLevel = SeverityLevel(7);

    /// `None` if `level` exceeds 7
    pub fn new(level: u8) -> Option<Self> {
        (level <= Self::IMMINENT.0).then_some(Self(level))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_warning(&self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<u8> for SeverityLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        SeverityLevel::new(level).ok_or_else(|| format!("severity level {} out of range 0..=7", level))
    }
}

impl From<SeverityLevel> for u8 {
    fn from(level: SeverityLevel) -> u8 {
        level.0
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
