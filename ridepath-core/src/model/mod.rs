pub mod analytics;
pub mod flags;
pub mod route;
pub mod session;
pub mod trip;
