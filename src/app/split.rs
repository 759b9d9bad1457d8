//! `split` command.

use super::{
    helpers::{create_output_options, read_sql_input, with_spinner},
    types::{CommandOutput, SplitParams}
};
use crate::{client::AdviseClient, error::AppResult, output::format_split};

/// Sends the input to the service for splitting and renders the statements.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the RPC fails.
pub async fn run_split(client: &AdviseClient, params: SplitParams) -> AppResult<CommandOutput> {
    let sql = read_sql_input(&params.input_path)?;
    let opts = create_output_options(params.output_format, params.no_color);
    let statements = with_spinner("Splitting SQL...", client.split_sql(&sql)).await?;
    Ok(CommandOutput {
        exit_code: 0,
        stdout:    vec![format_split(&statements, &opts)]
    })
}
