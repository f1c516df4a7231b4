mod change_tracker;
mod edit_session;

pub use change_tracker::{ChangeTracker, Fingerprint};
pub use edit_session::EditSession;
