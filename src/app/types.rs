//! Application types for CLI commands.

use crate::cli::{Format, SessionArgs};

/// Parameters for the split command.
#[derive(Debug, Clone)]
pub struct SplitParams {
    /// Path to the SQL file, or "-" for stdin.
    pub input_path:    String,
    pub output_format: Format,
    pub no_color:      bool
}

/// Parameters for the advise command.
///
/// # Example
///
/// ```
/// use sql_advise_client::{
///     app::AdviseParams,
///     cli::{Format, SessionArgs}
/// };
///
/// let params = AdviseParams {
///     input_path:    "review.sql".to_string(),
///     rules:         vec!["rule_no_select_star".to_string()],
///     no_split:      false,
///     session:       SessionArgs::default(),
///     output_format: Format::Text,
///     no_color:      false
/// };
/// ```
#[derive(Debug, Clone)]
pub struct AdviseParams {
    /// Path to the SQL file, or "-" for stdin.
    pub input_path:    String,
    /// Rule names from the command line; config rules apply when empty.
    pub rules:         Vec<String>,
    /// Send the whole input as one statement instead of splitting it first.
    pub no_split:      bool,
    /// Session overrides from the command line.
    pub session:       SessionArgs,
    pub output_format: Format,
    pub no_color:      bool
}

/// Output from CLI command execution.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code for the process (0=success, 1=warnings, 2=errors).
    pub exit_code: i32,
    /// Lines to print to stdout.
    pub stdout:    Vec<String>
}
