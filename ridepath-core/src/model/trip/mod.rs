mod draft;
mod error;
mod passenger_count;
mod trip_query;
mod trip_type;

pub use draft::TripQueryDraft;
pub use error::TripQueryError;
pub use passenger_count::PassengerCount;
pub use trip_query::TripQuery;
pub use trip_type::TripType;
