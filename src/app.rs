//! Application logic for the `sql-advise` CLI.
//!
//! Command handlers are kept apart from the entry point so they can run
//! against any [`AdviseClient`](crate::client::AdviseClient) in tests.

mod advise;
mod helpers;
mod split;
mod types;

pub use advise::run_advise;
pub use helpers::{
    calculate_exit_code, convert_format, create_output_options, read_sql_input, resolve_rules,
    resolve_server_config, resolve_session
};
pub use split::run_split;
pub use types::{AdviseParams, CommandOutput, SplitParams};
