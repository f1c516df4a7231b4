use clap::{Parser, Subcommand, ValueEnum};
use ridepath_core::model::route::RouteBase;

#[derive(Parser, Debug)]
#[command(name = "ridepath", about = "trip search route codec tooling")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// encode a trip query JSON file into its canonical URL path
    Encode {
        /// JSON file holding a complete trip query
        query_file: String,
        /// booking flow the path belongs to
        #[arg(long, value_enum, default_value_t = BaseArg::Transfer)]
        base: BaseArg,
    },
    /// decode a URL path into its trip query draft, printed as JSON
    Decode {
        /// a path such as /transfer/rome-airport/milan-central/2/250601/250610/3/form
        path: String,
    },
    /// validate a (possibly incomplete) trip draft JSON file
    Validate {
        /// JSON file holding a trip query draft
        query_file: String,
        /// booking flow used for the canonical path printed on success
        #[arg(long, value_enum, default_value_t = BaseArg::Transfer)]
        base: BaseArg,
    },
}

/// CLI surface for [`RouteBase`].
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaseArg {
    Transfer,
    HomeTransfer,
}

impl From<BaseArg> for RouteBase {
    fn from(value: BaseArg) -> Self {
        match value {
            BaseArg::Transfer => RouteBase::Transfer,
            BaseArg::HomeTransfer => RouteBase::HomeTransfer,
        }
    }
}
