use crate::model::trip::TripQueryDraft;
use crate::util::date_token;

/// the encoded-equality projection of a draft: exactly the fields, in
/// exactly the representation, that decide the route builder's output.
///
/// comparing fingerprints rather than raw values means two dates naming the
/// same calendar day compare equal whatever their underlying representation,
/// and location text differing only by surrounding whitespace does not count
/// as a change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fingerprint {
    pickup: String,
    dropoff: String,
    trip_type: &'static str,
    departure: String,
    return_date: String,
    passengers: u8,
}

impl Fingerprint {
    pub fn of(draft: &TripQueryDraft) -> Fingerprint {
        Fingerprint {
            pickup: draft.pickup.trim().to_string(),
            dropoff: draft.dropoff.trim().to_string(),
            trip_type: draft.trip_type.token(),
            departure: date_token::encode_opt(draft.departure_date.as_ref()),
            return_date: date_token::encode_opt(draft.return_date.as_ref()),
            passengers: draft.passengers.value(),
        }
    }
}

/// decides whether a working draft differs from the committed baseline, to
/// gate the commit control.
///
/// the very first evaluation after construction is skipped (reports no
/// change regardless), absorbing asynchronous state population at session
/// start; every later evaluation compares fingerprints.
#[derive(Debug)]
pub struct ChangeTracker {
    baseline: Fingerprint,
    evaluated_once: bool,
    has_changes: bool,
}

impl ChangeTracker {
    pub fn new(committed: &TripQueryDraft) -> ChangeTracker {
        ChangeTracker {
            baseline: Fingerprint::of(committed),
            evaluated_once: false,
            has_changes: false,
        }
    }

    /// re-evaluates against the baseline, returning the updated flag.
    pub fn evaluate(&mut self, working: &TripQueryDraft) -> bool {
        if !self.evaluated_once {
            self.evaluated_once = true;
            self.has_changes = false;
            return false;
        }
        self.has_changes = Fingerprint::of(working) != self.baseline;
        self.has_changes
    }

    /// the result of the most recent evaluation.
    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    /// replaces the baseline with a just-committed snapshot and resets the
    /// flag. the swap is atomic from the caller's view: after rebase, a
    /// no-op comparison reports no changes.
    pub fn rebase(&mut self, committed: &TripQueryDraft) {
        self.baseline = Fingerprint::of(committed);
        self.has_changes = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::trip::{PassengerCount, TripType};
    use chrono::NaiveDate;

    #[test]
    fn test_first_evaluation_skipped() {
        let committed = sample_draft();
        let mut tracker = ChangeTracker::new(&committed);
        // even a genuinely different draft reports no change on the first
        // evaluation, which absorbs async population at session start
        let mut different = committed.clone();
        different.pickup = "Naples Port".to_string();
        assert!(!tracker.evaluate(&different));
        // the second evaluation tells the truth
        assert!(tracker.evaluate(&different));
    }

    #[test]
    fn test_identical_draft_reports_no_change() {
        let committed = sample_draft();
        let mut tracker = ChangeTracker::new(&committed);
        tracker.evaluate(&committed);
        assert!(!tracker.evaluate(&committed.clone()));
    }

    #[test]
    fn test_mutate_then_revert_reports_no_change() {
        let committed = sample_draft();
        let mut tracker = ChangeTracker::new(&committed);
        tracker.evaluate(&committed);

        let mut working = committed.clone();
        working.passengers = working.passengers.increment();
        assert!(tracker.evaluate(&working));

        working.passengers = working.passengers.decrement();
        assert!(!tracker.evaluate(&working));
    }

    #[test]
    fn test_whitespace_only_edit_is_not_a_change() {
        let committed = sample_draft();
        let mut tracker = ChangeTracker::new(&committed);
        tracker.evaluate(&committed);

        let mut working = committed.clone();
        working.pickup = format!("  {}  ", committed.pickup);
        assert!(!tracker.evaluate(&working));
    }

    #[test]
    fn test_each_field_detected() {
        let committed = sample_draft();
        let mut tracker = ChangeTracker::new(&committed);
        tracker.evaluate(&committed);

        let mut working = committed.clone();
        working.dropoff = "Florence".to_string();
        assert!(tracker.evaluate(&working));

        let mut working = committed.clone();
        working.set_trip_type(TripType::OneWay);
        assert!(tracker.evaluate(&working));

        let mut working = committed.clone();
        working.departure_date = NaiveDate::from_ymd_opt(2025, 7, 1);
        assert!(tracker.evaluate(&working));

        let mut working = committed.clone();
        working.return_date = NaiveDate::from_ymd_opt(2025, 6, 11);
        assert!(tracker.evaluate(&working));
    }

    #[test]
    fn test_rebase_resets() {
        let committed = sample_draft();
        let mut tracker = ChangeTracker::new(&committed);
        tracker.evaluate(&committed);

        let mut working = committed.clone();
        working.passengers = PassengerCount::clamped(9);
        assert!(tracker.evaluate(&working));

        tracker.rebase(&working);
        assert!(!tracker.has_changes());
        assert!(!tracker.evaluate(&working));
        // and the old committed state now counts as a change
        assert!(tracker.evaluate(&committed));
    }

    fn sample_draft() -> TripQueryDraft {
        TripQueryDraft {
            pickup: "Rome Airport".to_string(),
            dropoff: "Milan Central".to_string(),
            trip_type: TripType::RoundTrip,
            departure_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            return_date: NaiveDate::from_ymd_opt(2025, 6, 10),
            passengers: PassengerCount::clamped(3),
        }
    }
}
