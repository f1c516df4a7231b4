/// commit-time validation failures. these surface as blocking, user-facing
/// messages; they are never raised while a draft is being edited, only at
/// the commit checkpoint where completeness is enforced.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TripQueryError {
    #[error("pickup location is required")]
    MissingPickup,
    #[error("dropoff location is required")]
    MissingDropoff,
    #[error("departure date is required")]
    MissingDepartureDate,
    #[error("return date is required for a round trip")]
    MissingReturnDate,
    #[error("return date {return_date} is before departure date {departure_date}")]
    ReturnBeforeDeparture {
        departure_date: chrono::NaiveDate,
        return_date: chrono::NaiveDate,
    },
}
