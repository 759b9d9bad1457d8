//! Helper functions for CLI operations.
//!
//! Reading input, merging command-line overrides into configuration,
//! computing exit codes and showing progress while the remote call runs.

use std::{
    fs::read_to_string,
    future::Future,
    io::{self, Read},
    time::Duration
};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    cli::{Format, ServerArgs, SessionArgs},
    config::{RulesConfig, ServerConfig},
    error::{AppResult, config_error, file_read_error},
    model::{AdviceSeverity, CommitSql, Rule, SessionDescriptor},
    output::{OutputFormat, OutputOptions}
};

/// Calculates the process exit code from advisory levels.
///
/// - `0` - No advice above informational
/// - `1` - At least one warning
/// - `2` - At least one error
///
/// # Example
///
/// ```
/// use sql_advise_client::{app::calculate_exit_code, model::CommitSql};
///
/// let sqls = vec![CommitSql::new(1, "SELECT 1;")];
/// assert_eq!(calculate_exit_code(&sqls), 0);
/// ```
pub fn calculate_exit_code(sqls: &[CommitSql]) -> i32 {
    match sqls.iter().map(CommitSql::severity).max() {
        Some(AdviceSeverity::Error) => 2,
        Some(AdviceSeverity::Warning) => 1,
        _ => 0
    }
}

/// Reads SQL from a file, or from stdin when the path is "-".
pub fn read_sql_input(path: &str) -> AppResult<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(path, e))
    }
}

/// Convert CLI format to internal OutputFormat
pub fn convert_format(format: Format) -> OutputFormat {
    match format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml
    }
}

/// Create output options from parameters
pub fn create_output_options(format: Format, no_color: bool) -> OutputOptions {
    OutputOptions {
        format:  convert_format(format),
        colored: !no_color
    }
}

/// Apply command-line endpoint overrides on top of the loaded config.
pub fn resolve_server_config(args: &ServerArgs, mut config: ServerConfig) -> ServerConfig {
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = &args.port {
        config.port = port.clone();
    }
    if let Some(version) = &args.protocol_version {
        config.version = version.clone();
    }
    config
}

/// Apply command-line session overrides on top of the loaded config.
pub fn resolve_session(args: SessionArgs, mut session: SessionDescriptor) -> SessionDescriptor {
    let overrides = [
        (args.user, &mut session.user),
        (args.password, &mut session.password),
        (args.db_host, &mut session.host),
        (args.db_port, &mut session.port),
        (args.database, &mut session.current_database),
        (args.schema, &mut session.current_schema)
    ];
    for (value, field) in overrides {
        if let Some(value) = value {
            *field = value;
        }
    }
    session
}

/// Rules from the command line, or the configured ones when none are given.
///
/// # Errors
///
/// Returns a config error when neither source names a rule.
pub fn resolve_rules(cli_rules: Vec<String>, config: &RulesConfig) -> AppResult<Vec<Rule>> {
    let names = if cli_rules.is_empty() {
        config.enabled.clone()
    } else {
        cli_rules
    };
    if names.is_empty() {
        return Err(config_error(
            "No rules to evaluate (use --rule or [rules] enabled in config)"
        ));
    }
    Ok(names.into_iter().map(Rule::from).collect())
}

/// Await `fut` while a spinner runs on stderr.
pub(super) async fn with_spinner<F: Future>(message: &'static str, fut: F) -> F::Output {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    let output = fut.await;
    pb.finish_and_clear();
    output
}
