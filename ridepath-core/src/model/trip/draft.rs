use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PassengerCount, TripQuery, TripQueryError, TripType};

/// the in-progress, possibly-incomplete edit of a trip search. fields may be
/// blank or absent mid-edit; nothing is persisted until [`TripQueryDraft::validate`]
/// produces a full [`TripQuery`] at the commit checkpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct TripQueryDraft {
    pub pickup: String,
    pub dropoff: String,
    pub trip_type: TripType,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub passengers: PassengerCount,
}

impl TripQueryDraft {
    /// a draft mirroring a committed query, the state every edit session
    /// starts from.
    pub fn from_query(query: &TripQuery) -> TripQueryDraft {
        TripQueryDraft {
            pickup: query.pickup().to_string(),
            dropoff: query.dropoff().to_string(),
            trip_type: query.trip_type(),
            departure_date: Some(query.departure_date()),
            return_date: query.return_date(),
            passengers: query.passengers(),
        }
    }

    /// switches the trip type, clearing the return date when the draft
    /// becomes one-way so the invariant cannot be violated by a later commit.
    pub fn set_trip_type(&mut self, trip_type: TripType) {
        self.trip_type = trip_type;
        if !trip_type.is_round_trip() {
            self.return_date = None;
        }
    }

    /// the commit-time completeness check: pickup and dropoff non-blank,
    /// departure date present, and a return date present for round trips.
    /// returns the first failure; an incomplete draft blocks commit but is
    /// never an error while editing.
    pub fn validate(&self) -> Result<TripQuery, TripQueryError> {
        let departure_date = self
            .departure_date
            .ok_or(TripQueryError::MissingDepartureDate)?;
        TripQuery::new(
            &self.pickup,
            &self.dropoff,
            self.trip_type,
            departure_date,
            self.return_date,
            self.passengers,
        )
    }
}
