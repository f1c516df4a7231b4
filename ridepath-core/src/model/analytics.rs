use std::sync::Mutex;

/// a discrete instrumentation event: category, action, optional label and
/// value. mirrors the shape the external analytics collaborator accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    pub label: Option<String>,
    pub value: Option<i64>,
}

impl AnalyticsEvent {
    pub fn new(category: &str, action: &str) -> AnalyticsEvent {
        AnalyticsEvent {
            category: category.to_string(),
            action: action.to_string(),
            label: None,
            value: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> AnalyticsEvent {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_value(mut self, value: i64) -> AnalyticsEvent {
        self.value = Some(value);
        self
    }
}

/// delivery seam for analytics events. implementations must be infallible
/// from the caller's point of view: a sink that cannot deliver swallows the
/// failure (logging it if it likes) rather than surfacing it, so that
/// instrumentation can never block or fail a search operation.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: AnalyticsEvent);
}

/// records events to the log at info level under the `analytics` target.
pub struct LogAnalytics;

impl AnalyticsSink for LogAnalytics {
    fn record(&self, event: AnalyticsEvent) {
        log::info!(
            target: "analytics",
            "{}/{} label={} value={}",
            event.category,
            event.action,
            event.label.as_deref().unwrap_or("-"),
            event.value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
        );
    }
}

/// drops all events. the default sink when instrumentation is disabled.
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn record(&self, _event: AnalyticsEvent) {}
}

/// collects events in memory for assertions in tests.
#[derive(Default)]
pub struct RecordingAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingAnalytics {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn record(&self, event: AnalyticsEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
