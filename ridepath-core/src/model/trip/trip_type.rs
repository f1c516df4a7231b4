use serde::{Deserialize, Serialize};

/// whether a transfer search is for a single leg or an out-and-back pair.
/// the two are mutually exclusive; a one-way query carries no return date.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    #[default]
    OneWay,
    RoundTrip,
}

impl TripType {
    /// the wire token used inside a URL path segment.
    pub fn token(&self) -> &'static str {
        match self {
            TripType::OneWay => "1",
            TripType::RoundTrip => "2",
        }
    }

    /// canonical token rule: `"2"` and only `"2"` means round trip. every
    /// other token, including the `"0"` sentinel, empty, or garbled input,
    /// maps to one-way, the state that demands no return date. this is the
    /// single place the rule lives; no call site interprets tokens itself.
    pub fn from_token(token: &str) -> TripType {
        match token {
            "2" => TripType::RoundTrip,
            _ => TripType::OneWay,
        }
    }

    pub fn is_round_trip(&self) -> bool {
        matches!(self, TripType::RoundTrip)
    }

    /// flips between the two variants, for the search form's toggle control.
    pub fn toggled(&self) -> TripType {
        match self {
            TripType::OneWay => TripType::RoundTrip,
            TripType::RoundTrip => TripType::OneWay,
        }
    }
}
