use ridepath_core::model::route::RouteError;
use ridepath_core::model::trip::TripQueryError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failure reading input file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failure parsing JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("invalid trip query: {0}")]
    Query(#[from] TripQueryError),
}
