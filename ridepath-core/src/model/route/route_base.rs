use serde::{Deserialize, Serialize};

/// which booking flow a trip path belongs to. contextual: supplied by the
/// surface that triggers navigation, never inferred from the query itself.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteBase {
    /// the in-flow transfer pages, `/transfer/...`
    #[default]
    Transfer,
    /// searches initiated from the home page, `/home/transfer/...`
    HomeTransfer,
}

impl RouteBase {
    /// the leading path segments for this base, without surrounding slashes.
    pub fn prefix(&self) -> &'static str {
        match self {
            RouteBase::Transfer => "transfer",
            RouteBase::HomeTransfer => "home/transfer",
        }
    }

    /// matches a base against the leading segments of a split path,
    /// returning the base and how many segments it consumed.
    pub(super) fn match_prefix(segments: &[&str]) -> Option<(RouteBase, usize)> {
        match segments {
            ["home", "transfer", ..] => Some((RouteBase::HomeTransfer, 2)),
            ["transfer", ..] => Some((RouteBase::Transfer, 1)),
            _ => None,
        }
    }
}
