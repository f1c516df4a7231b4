/// failures decoding a URL path whose structure is unusable. field-level
/// garbage inside a structurally-sound path never errors; it degrades to
/// absent/default values instead (users can hand-edit URLs).
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("path '{0}' does not begin with a known booking flow base")]
    UnknownBase(String),
    #[error("path '{0}' does not end with the 'form' terminator")]
    MissingTerminator(String),
    #[error("path '{path}' has {found} trip segments where {expected} were expected")]
    WrongArity {
        path: String,
        found: usize,
        expected: usize,
    },
}
