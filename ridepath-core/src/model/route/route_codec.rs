use itertools::Itertools;

use super::{RouteBase, RouteError};
use crate::model::trip::{PassengerCount, TripQuery, TripQueryDraft, TripType};
use crate::util::{date_token, slug_ops};

/// segment count after the base prefix: pickup, dropoff, type, departure,
/// return, passengers, terminator. fixed arity regardless of trip type, so
/// a parser can always split on '/' and index.
const TRIP_SEGMENTS: usize = 7;

/// the final path segment; anchors the fixed-arity trip segment run.
const TERMINATOR: &str = "form";

/// the single canonical mapping from a valid trip query to a URL path:
///
/// `/{base}/{pickup-slug}/{dropoff-slug}/{1|2}/{YYMMDD}/{YYMMDD|0}/{n}/form`
///
/// one-way queries emit the `"0"` return sentinel to keep the shape fixed.
/// only defined for validated queries; callers surface validation errors
/// instead of invoking this, and navigation to the produced path is the
/// caller's own, separate action.
pub fn encode_route(base: RouteBase, query: &TripQuery) -> String {
    let segments = [
        base.prefix().to_string(),
        slug_ops::encode_slug(query.pickup()),
        slug_ops::encode_slug(query.dropoff()),
        query.trip_type().token().to_string(),
        date_token::encode(&query.departure_date()),
        date_token::encode_opt(query.return_date().as_ref()),
        query.passengers().to_string(),
        TERMINATOR.to_string(),
    ];
    format!("/{}", segments.iter().join("/"))
}

/// inverse of [`encode_route`], producing a draft rather than a validated
/// query: a hand-edited URL may be missing anything, and decode must
/// tolerate that.
///
/// degradation policy per field:
///   - unparseable date tokens (including the `"0"` sentinel for the
///     departure slot) decode to absent
///   - non-numeric passenger counts default to 1, numeric ones clamp
///   - any trip-type token other than `"2"` reads as one-way; the type
///     token is authoritative over the return sentinel, so a one-way path
///     never yields a return date no matter what its return segment says
///
/// only a structurally unusable path is an error: unknown base, wrong
/// segment arity, or a missing `form` terminator.
pub fn decode_route(path: &str) -> Result<(RouteBase, TripQueryDraft), RouteError> {
    let segments = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect_vec();

    let (base, consumed) = RouteBase::match_prefix(&segments)
        .ok_or_else(|| RouteError::UnknownBase(path.to_string()))?;
    let trip = &segments[consumed..];
    if trip.len() != TRIP_SEGMENTS {
        return Err(RouteError::WrongArity {
            path: path.to_string(),
            found: trip.len(),
            expected: TRIP_SEGMENTS,
        });
    }
    if trip[TRIP_SEGMENTS - 1] != TERMINATOR {
        return Err(RouteError::MissingTerminator(path.to_string()));
    }

    let trip_type = TripType::from_token(trip[2]);
    let return_date = if trip_type.is_round_trip() {
        date_token::decode(trip[4])
    } else {
        None
    };
    let draft = TripQueryDraft {
        pickup: slug_ops::decode_slug(trip[0]),
        dropoff: slug_ops::decode_slug(trip[1]),
        trip_type,
        departure_date: date_token::decode(trip[3]),
        return_date,
        passengers: PassengerCount::parse(trip[5]),
    };
    Ok((base, draft))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_encode_round_trip_query() {
        let query = sample_round_trip();
        let path = encode_route(RouteBase::Transfer, &query);
        assert_eq!(path, "/transfer/rome-airport/milan-central/2/250601/250610/3/form");
    }

    #[test]
    fn test_encode_home_base() {
        let query = sample_round_trip();
        let path = encode_route(RouteBase::HomeTransfer, &query);
        assert_eq!(
            path,
            "/home/transfer/rome-airport/milan-central/2/250601/250610/3/form"
        );
    }

    #[test]
    fn test_encode_one_way_emits_sentinel() {
        let query = TripQuery::new(
            "Rome Airport",
            "Milan Central",
            TripType::OneWay,
            NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
            None,
            PassengerCount::default(),
        )
        .unwrap();
        let path = encode_route(RouteBase::Transfer, &query);
        assert_eq!(path, "/transfer/rome-airport/milan-central/1/251225/0/1/form");
    }

    #[test]
    fn test_decode_inverse_of_encode() {
        let query = sample_round_trip();
        let path = encode_route(RouteBase::Transfer, &query);
        let (base, draft) = decode_route(&path).unwrap();
        assert_eq!(base, RouteBase::Transfer);
        // slugging is lossy for case, so locations compare case-insensitively
        assert_eq!(draft.pickup, query.pickup().to_lowercase());
        assert_eq!(draft.dropoff, query.dropoff().to_lowercase());
        assert_eq!(draft.trip_type, query.trip_type());
        assert_eq!(draft.departure_date, Some(query.departure_date()));
        assert_eq!(draft.return_date, query.return_date());
        assert_eq!(draft.passengers, query.passengers());
    }

    #[test]
    fn test_decode_home_base() {
        let path = "/home/transfer/rome-airport/milan-central/1/250601/0/2/form";
        let (base, draft) = decode_route(path).unwrap();
        assert_eq!(base, RouteBase::HomeTransfer);
        assert_eq!(draft.passengers.value(), 2);
    }

    #[test]
    fn test_decode_one_way_sentinel() {
        let path = "/transfer/rome-airport/milan-central/1/251225/0/1/form";
        let (_, draft) = decode_route(path).unwrap();
        assert_eq!(draft.trip_type, TripType::OneWay);
        assert_eq!(draft.return_date, None);
    }

    #[test]
    fn test_decode_type_token_authoritative_over_sentinel() {
        // a real return token on a one-way path is ignored: the type token
        // decides, not the sentinel slot
        let path = "/transfer/rome-airport/milan-central/1/250601/250610/1/form";
        let (_, draft) = decode_route(path).unwrap();
        assert_eq!(draft.trip_type, TripType::OneWay);
        assert_eq!(draft.return_date, None);

        // and a round-trip path with the sentinel stays round trip, with the
        // return date simply absent
        let path = "/transfer/rome-airport/milan-central/2/250601/0/1/form";
        let (_, draft) = decode_route(path).unwrap();
        assert_eq!(draft.trip_type, TripType::RoundTrip);
        assert_eq!(draft.return_date, None);
    }

    #[test]
    fn test_decode_degrades_garbled_fields() {
        let path = "/transfer/rome-airport/milan-central/9/999999/xyzzyx/lots/form";
        let (_, draft) = decode_route(path).unwrap();
        assert_eq!(draft.trip_type, TripType::OneWay);
        assert_eq!(draft.departure_date, None);
        assert_eq!(draft.return_date, None);
        assert_eq!(draft.passengers, PassengerCount::MIN);
    }

    #[test]
    fn test_decode_departure_sentinel_reads_as_absent() {
        let path = "/transfer/rome-airport/milan-central/1/0/0/1/form";
        let (_, draft) = decode_route(path).unwrap();
        assert_eq!(draft.departure_date, None);
    }

    #[test]
    fn test_decode_unknown_base() {
        let result = decode_route("/booking/rome/milan/1/250601/0/1/form");
        assert_eq!(
            result.unwrap_err(),
            RouteError::UnknownBase("/booking/rome/milan/1/250601/0/1/form".to_string())
        );
    }

    #[test]
    fn test_decode_wrong_arity() {
        let result = decode_route("/transfer/rome-airport/milan-central/1/250601/form");
        assert!(matches!(
            result.unwrap_err(),
            RouteError::WrongArity {
                found: 5,
                expected: 7,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_missing_terminator() {
        let result = decode_route("/transfer/rome-airport/milan-central/1/250601/0/1/summary");
        assert!(matches!(
            result.unwrap_err(),
            RouteError::MissingTerminator(_)
        ));
    }

    #[test]
    fn test_decode_tolerates_trailing_slash() {
        let path = "/transfer/rome-airport/milan-central/1/250601/0/1/form/";
        assert!(decode_route(path).is_ok());
    }

    #[test]
    fn test_decoded_draft_validates_into_query() {
        let path = "/transfer/rome-airport/milan-central/2/250601/250610/3/form";
        let (_, draft) = decode_route(path).unwrap();
        let query = draft.validate().unwrap();
        assert_eq!(query.pickup(), "rome airport");
        assert_eq!(query.trip_type(), TripType::RoundTrip);
        assert_eq!(
            query.return_date(),
            NaiveDate::from_ymd_opt(2025, 6, 10)
        );
        assert_eq!(query.passengers().value(), 3);
    }

    fn sample_round_trip() -> TripQuery {
        TripQuery::new(
            "Rome Airport",
            "Milan Central",
            TripType::RoundTrip,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 10),
            PassengerCount::clamped(3),
        )
        .unwrap()
    }
}
