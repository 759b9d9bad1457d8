//! `advise` command.

use super::{
    helpers::{
        calculate_exit_code, create_output_options, read_sql_input, resolve_rules,
        resolve_session, with_spinner
    },
    types::{AdviseParams, CommandOutput}
};
use crate::{
    client::AdviseClient, config::Config, error::AppResult, model::CommitSql,
    output::format_advice
};

/// Reviews the input against the selected rules.
///
/// 1. **Split**: the service splits the input (skipped with `no_split`)
/// 2. **Advise**: statements, rule names and session go out in one request
/// 3. **Report**: advised statements are rendered and the exit code reflects
///    the highest advisory level
///
/// # Errors
///
/// Returns an error if no rules are selected, the input cannot be read, either
/// RPC fails, or the service replies with the wrong number of results.
pub async fn run_advise(
    client: &AdviseClient,
    params: AdviseParams,
    config: &Config
) -> AppResult<CommandOutput> {
    let rules = resolve_rules(params.rules, &config.rules)?;
    let session = resolve_session(params.session, config.session.clone());
    let sql = read_sql_input(&params.input_path)?;
    let opts = create_output_options(params.output_format, params.no_color);

    let statements = if params.no_split {
        vec![sql]
    } else {
        with_spinner("Splitting SQL...", client.split_sql(&sql)).await?
    };
    let mut commit_sqls = CommitSql::from_split(statements);

    if !commit_sqls.is_empty() {
        with_spinner(
            "Waiting for advice...",
            client.advise(&mut commit_sqls, &rules, &session)
        )
        .await?;
    }

    Ok(CommandOutput {
        exit_code: calculate_exit_code(&commit_sqls),
        stdout:    vec![format_advice(&commit_sqls, &opts)]
    })
}
