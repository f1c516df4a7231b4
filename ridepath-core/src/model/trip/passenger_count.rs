use serde::{Deserialize, Serialize};

/// a passenger count, always within [1, 100].
///
/// no value outside the range can exist: construction clamps rather than
/// rejects, favoring availability over strictness since passenger count is
/// low-risk (URL tampering should not break a search). serde goes through
/// `i64` so that out-of-range JSON input clamps the same way.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(from = "i64", into = "i64")]
pub struct PassengerCount(u8);

impl PassengerCount {
    pub const MIN: PassengerCount = PassengerCount(1);
    pub const MAX: PassengerCount = PassengerCount(100);

    /// constructs a count, clamping into [1, 100].
    pub fn clamped(value: i64) -> PassengerCount {
        if value < Self::MIN.0 as i64 {
            Self::MIN
        } else if value > Self::MAX.0 as i64 {
            Self::MAX
        } else {
            PassengerCount(value as u8)
        }
    }

    /// parses a decimal count from URL/user text. non-numeric input defaults
    /// to 1; numeric input clamps.
    pub fn parse(text: &str) -> PassengerCount {
        match text.trim().parse::<i64>() {
            Ok(n) => Self::clamped(n),
            Err(_) => Self::MIN,
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// one more passenger, saturating at the upper bound.
    pub fn increment(&self) -> PassengerCount {
        Self::clamped(self.0 as i64 + 1)
    }

    /// one fewer passenger, saturating at the lower bound.
    pub fn decrement(&self) -> PassengerCount {
        Self::clamped(self.0 as i64 - 1)
    }

    /// false at the upper bound; gates the "+" stepper control.
    pub fn can_increment(&self) -> bool {
        *self < Self::MAX
    }

    /// false at the lower bound; gates the "-" stepper control.
    pub fn can_decrement(&self) -> bool {
        *self > Self::MIN
    }
}

impl Default for PassengerCount {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<i64> for PassengerCount {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<PassengerCount> for i64 {
    fn from(value: PassengerCount) -> Self {
        value.0 as i64
    }
}

impl std::fmt::Display for PassengerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
