// libs/shared/models/src/slot.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Hour-granularity grid slot label, e.g. "09:00".
///
/// Construction via [`TimeSlot::new`] is lenient: the grid treats malformed
/// labels as matching nothing rather than failing a render. Callers that
/// validate a slot list up front can use the strict [`FromStr`] impl.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TimeSlot(String);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimeSlotError {
    #[error("time slot label must start with a two-digit hour, got {0:?}")]
    Malformed(String),

    #[error("hour out of range in time slot label {0:?}")]
    HourOutOfRange(String),
}

impl TimeSlot {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hour component of the label, if well formed. Only the first two
    /// characters are read; minutes never participate in slot matching.
    pub fn hour(&self) -> Option<u32> {
        let hour = self.0.get(..2)?.parse::<u32>().ok()?;
        (hour < 24).then_some(hour)
    }
}

impl FromStr for TimeSlot {
    type Err = TimeSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hour: u32 = s
            .get(..2)
            .and_then(|h| h.parse().ok())
            .ok_or_else(|| TimeSlotError::Malformed(s.to_string()))?;
        if hour >= 24 {
            return Err(TimeSlotError::HourOutOfRange(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
