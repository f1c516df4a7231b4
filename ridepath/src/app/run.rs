use std::fs;

use ridepath_core::model::route::{decode_route, encode_route, RouteBase};
use ridepath_core::model::trip::{TripQuery, TripQueryDraft};
use serde_json::json;

use super::{AppError, CliArgs, Command};

/// dispatches a parsed command line, returning the text to print.
pub fn run(args: &CliArgs) -> Result<String, AppError> {
    match &args.command {
        Command::Encode { query_file, base } => {
            let json = read_input(query_file)?;
            encode_json(&json, (*base).into())
        }
        Command::Decode { path } => decode_path(path),
        Command::Validate { query_file, base } => {
            let json = read_input(query_file)?;
            validate_json(&json, (*base).into())
        }
    }
}

/// parses a complete trip query from JSON and prints its canonical path.
/// deserialization enforces the query invariants, so a malformed query
/// surfaces here as a JSON error carrying the validation message.
pub fn encode_json(json: &str, base: RouteBase) -> Result<String, AppError> {
    let query: TripQuery = serde_json::from_str(json)?;
    Ok(encode_route(base, &query))
}

/// decodes a URL path and prints the resulting draft (plus which booking
/// flow the path belongs to) as pretty JSON. garbled field values appear as
/// nulls/defaults rather than failing, matching the codec's degradation
/// policy.
pub fn decode_path(path: &str) -> Result<String, AppError> {
    let (base, draft) = decode_route(path)?;
    let output = json!({
        "base": base,
        "query": draft,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// runs the commit-time validation over a lenient draft JSON: on success
/// prints `ok` plus the canonical path the draft would navigate to, on
/// failure returns the user-facing validation message.
pub fn validate_json(json: &str, base: RouteBase) -> Result<String, AppError> {
    let draft: TripQueryDraft = serde_json::from_str(json)?;
    let query = draft.validate()?;
    Ok(format!("ok {}", encode_route(base, &query)))
}

fn read_input(path: &str) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|e| AppError::Io {
        path: path.to_string(),
        source: e,
    })
}
