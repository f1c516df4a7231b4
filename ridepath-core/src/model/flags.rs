use serde::{Deserialize, Serialize};

/// explicit feature-flag state, passed to the surfaces that need it.
///
/// replaces ambient globally-mutable flags (the original attached a flag
/// setter to a browser global): reads and writes go through this object,
/// which some owner constructs once and hands down.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default, rename_all = "snake_case")]
pub struct FeatureFlags {
    debug_panel: bool,
    analytics_enabled: bool,
}

impl FeatureFlags {
    /// whether the admin debug panel is visible.
    pub fn debug_panel(&self) -> bool {
        self.debug_panel
    }

    pub fn set_debug_panel(&mut self, enabled: bool) {
        self.debug_panel = enabled;
    }

    /// whether search surfaces should emit analytics events.
    pub fn analytics_enabled(&self) -> bool {
        self.analytics_enabled
    }

    pub fn set_analytics_enabled(&mut self, enabled: bool) {
        self.analytics_enabled = enabled;
    }
}
