use std::sync::Arc;

use chrono::NaiveDate;

use super::ChangeTracker;
use crate::model::analytics::{AnalyticsEvent, AnalyticsSink, NoopAnalytics};
use crate::model::trip::{PassengerCount, TripQuery, TripQueryDraft, TripQueryError, TripType};

/// one search surface's edit state: the committed snapshot reflecting the
/// active URL, the working draft the user is mutating, and the tracker that
/// gates the commit control.
///
/// each surface owns exactly one session; sessions are never shared. the
/// committed snapshot is replaced only by a successful [`EditSession::commit`],
/// never field-by-field.
pub struct EditSession {
    committed: TripQueryDraft,
    working: TripQueryDraft,
    tracker: ChangeTracker,
    analytics: Arc<dyn AnalyticsSink>,
}

impl EditSession {
    /// the normal mount path: a session over a committed, validated query.
    pub fn new(committed: TripQuery) -> EditSession {
        Self::with_analytics(committed, Arc::new(NoopAnalytics))
    }

    pub fn with_analytics(committed: TripQuery, analytics: Arc<dyn AnalyticsSink>) -> EditSession {
        Self::from_draft_with_analytics(TripQueryDraft::from_query(&committed), analytics)
    }

    /// mount from a decoded URL that degraded to an incomplete draft (hand
    /// edits, stale links). the session behaves identically, but a commit
    /// will demand the missing fields first.
    pub fn from_draft(committed: TripQueryDraft) -> EditSession {
        Self::from_draft_with_analytics(committed, Arc::new(NoopAnalytics))
    }

    pub fn from_draft_with_analytics(
        committed: TripQueryDraft,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> EditSession {
        let working = committed.clone();
        let mut tracker = ChangeTracker::new(&committed);
        // the mount consumes the tracker's first-evaluation skip, so the
        // first real user mutation is evaluated truthfully
        tracker.evaluate(&working);
        EditSession {
            committed,
            working,
            tracker,
            analytics,
        }
    }

    pub fn committed(&self) -> &TripQueryDraft {
        &self.committed
    }

    pub fn working(&self) -> &TripQueryDraft {
        &self.working
    }

    /// whether the working draft differs from the committed snapshot in any
    /// field that affects the encoded route.
    pub fn has_changes(&self) -> bool {
        self.tracker.has_changes()
    }

    pub fn set_pickup(&mut self, pickup: &str) {
        self.working.pickup = pickup.to_string();
        self.tracker.evaluate(&self.working);
    }

    pub fn set_dropoff(&mut self, dropoff: &str) {
        self.working.dropoff = dropoff.to_string();
        self.tracker.evaluate(&self.working);
    }

    pub fn set_trip_type(&mut self, trip_type: TripType) {
        self.working.set_trip_type(trip_type);
        self.tracker.evaluate(&self.working);
        self.analytics.record(
            AnalyticsEvent::new("search", "toggle_trip_type").with_label(trip_type.token()),
        );
    }

    pub fn set_departure_date(&mut self, date: Option<NaiveDate>) {
        self.working.departure_date = date;
        self.tracker.evaluate(&self.working);
    }

    pub fn set_return_date(&mut self, date: Option<NaiveDate>) {
        self.working.return_date = date;
        self.tracker.evaluate(&self.working);
    }

    pub fn set_passengers(&mut self, passengers: PassengerCount) {
        self.working.passengers = passengers;
        self.tracker.evaluate(&self.working);
        self.analytics.record(
            AnalyticsEvent::new("search", "set_passengers")
                .with_value(passengers.value() as i64),
        );
    }

    pub fn increment_passengers(&mut self) {
        self.set_passengers(self.working.passengers.increment());
    }

    pub fn decrement_passengers(&mut self) {
        self.set_passengers(self.working.passengers.decrement());
    }

    /// validates the working draft and, on success, atomically replaces the
    /// committed snapshot with it, rebases the tracker (no changes pending),
    /// and returns the validated query for the caller to hand to the route
    /// builder. on failure nothing changes and the error carries the
    /// user-facing message.
    pub fn commit(&mut self) -> Result<TripQuery, TripQueryError> {
        let query = self.working.validate()?;
        self.committed = self.working.clone();
        self.tracker.rebase(&self.committed);
        log::debug!(
            "committed trip search {} -> {}",
            query.pickup(),
            query.dropoff()
        );
        self.analytics.record(
            AnalyticsEvent::new("search", "submit").with_label(query.trip_type().token()),
        );
        Ok(query)
    }
}
