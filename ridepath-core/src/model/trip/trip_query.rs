use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PassengerCount, TripQueryError, TripType};

/// a validated transfer search: where from, where to, one-way or round trip,
/// when, and for how many passengers.
///
/// immutable once committed. constructed through [`TripQuery::new`] or
/// [`super::TripQueryDraft::validate`], both of which enforce:
///   - pickup and dropoff are non-blank
///   - one-way queries carry no return date
///   - round-trip queries carry a return date on or after the departure
///     (same-day round trips are allowed)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawTripQuery")]
pub struct TripQuery {
    pickup: String,
    dropoff: String,
    trip_type: TripType,
    departure_date: NaiveDate,
    return_date: Option<NaiveDate>,
    passengers: PassengerCount,
}

/// unvalidated deserialization shape; [`TripQuery`] invariants are enforced
/// in the `TryFrom` conversion so no serde input can bypass them.
#[derive(Deserialize, Clone, Debug)]
struct RawTripQuery {
    pickup: String,
    dropoff: String,
    #[serde(default)]
    trip_type: TripType,
    departure_date: NaiveDate,
    #[serde(default)]
    return_date: Option<NaiveDate>,
    #[serde(default)]
    passengers: PassengerCount,
}

impl TryFrom<RawTripQuery> for TripQuery {
    type Error = TripQueryError;

    fn try_from(raw: RawTripQuery) -> Result<Self, Self::Error> {
        TripQuery::new(
            &raw.pickup,
            &raw.dropoff,
            raw.trip_type,
            raw.departure_date,
            raw.return_date,
            raw.passengers,
        )
    }
}

impl TripQuery {
    pub fn new(
        pickup: &str,
        dropoff: &str,
        trip_type: TripType,
        departure_date: NaiveDate,
        return_date: Option<NaiveDate>,
        passengers: PassengerCount,
    ) -> Result<TripQuery, TripQueryError> {
        let pickup = pickup.trim();
        let dropoff = dropoff.trim();
        if pickup.is_empty() {
            return Err(TripQueryError::MissingPickup);
        }
        if dropoff.is_empty() {
            return Err(TripQueryError::MissingDropoff);
        }
        let return_date = match trip_type {
            // the trip type is authoritative: a stray return date on a
            // one-way query is dropped, not an error
            TripType::OneWay => None,
            TripType::RoundTrip => match return_date {
                None => return Err(TripQueryError::MissingReturnDate),
                Some(r) if r < departure_date => {
                    return Err(TripQueryError::ReturnBeforeDeparture {
                        departure_date,
                        return_date: r,
                    })
                }
                Some(r) => Some(r),
            },
        };
        Ok(TripQuery {
            pickup: pickup.to_string(),
            dropoff: dropoff.to_string(),
            trip_type,
            departure_date,
            return_date,
            passengers,
        })
    }

    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    pub fn dropoff(&self) -> &str {
        &self.dropoff
    }

    pub fn trip_type(&self) -> TripType {
        self.trip_type
    }

    pub fn departure_date(&self) -> NaiveDate {
        self.departure_date
    }

    pub fn return_date(&self) -> Option<NaiveDate> {
        self.return_date
    }

    pub fn passengers(&self) -> PassengerCount {
        self.passengers
    }
}
