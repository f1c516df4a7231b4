pub mod date_token;
pub mod readiness;
pub mod slug_ops;
