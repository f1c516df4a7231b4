mod cli_args;
mod error;
pub mod run;

pub use cli_args::{BaseArg, CliArgs, Command};
pub use error::AppError;
