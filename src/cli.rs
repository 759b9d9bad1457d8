use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// SQL Advise - Split and review SQL Server statements with a remote advisory
/// service
#[derive(Parser, Debug)]
#[command(name = "sql-advise")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub server: ServerArgs,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value = "text")]
    pub output_format: Format,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands
}

/// Advisory service endpoint overrides
#[derive(Args, Debug, Clone, Default)]
pub struct ServerArgs {
    /// Advisory service host
    #[arg(long, global = true, env = "SQL_ADVISE_HOST")]
    pub host: Option<String>,

    /// Advisory service port
    #[arg(long, global = true, env = "SQL_ADVISE_PORT")]
    pub port: Option<String>,

    /// Protocol version tag selecting the dialect ruleset
    #[arg(long, global = true, env = "SQL_ADVISE_VERSION")]
    pub protocol_version: Option<String>
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a SQL file into individual statements
    Split {
        /// Path to SQL file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf
    },
    /// Review SQL statements against named rules
    Advise {
        /// Path to SQL file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Rule name to evaluate (repeatable)
        #[arg(short, long = "rule")]
        rules: Vec<String>,

        /// Treat the whole input as a single statement
        #[arg(long)]
        no_split: bool,

        #[command(flatten)]
        session: SessionArgs
    }
}

/// Audited database session overrides
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Database user
    #[arg(long)]
    pub user: Option<String>,

    /// Database password
    #[arg(long, env = "SQL_ADVISE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Database host
    #[arg(long)]
    pub db_host: Option<String>,

    /// Database port
    #[arg(long)]
    pub db_port: Option<String>,

    /// Current database
    #[arg(long)]
    pub database: Option<String>,

    /// Current schema
    #[arg(long)]
    pub schema: Option<String>
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
