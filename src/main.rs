//! # SQL Advise
//!
//! Command-line front end for a remote SQL Server advisory service.
//!
//! The service does all SQL work: it splits raw SQL into statements and
//! evaluates statements against named rules. This binary reads SQL from a file
//! or stdin, forwards it over gRPC and prints the results.
//!
//! # Quick Start
//!
//! ```bash
//! # Split a script into statements
//! sql-advise --host 10.0.0.5 --port 10001 split -i migration.sql
//!
//! # Review statements against rules
//! sql-advise advise -i migration.sql -r rule_no_select_star -r rule_need_index \
//!     --user sa --db-host 10.0.0.12 --db-port 1433 --database orders --schema dbo
//!
//! # Machine-readable output
//! cat migration.sql | sql-advise -f json advise -i - -r rule_no_select_star
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. Environment variables (`SQL_ADVISE_HOST`, `SQL_ADVISE_PASSWORD`, etc.)
//! 3. `.sql-advise.toml` in current directory
//! 4. `~/.config/sql-advise/config.toml`
//!
//! # Exit Codes
//!
//! - `0` - Success, no advice above informational
//! - `1` - Warnings found, or the command failed
//! - `2` - Errors found
//!
//! # Logging
//!
//! Diagnostics go to stderr and are filtered with `RUST_LOG`
//! (default `warn`).

use std::process;

use clap::Parser;
use sql_advise_client::{
    app::{AdviseParams, SplitParams, resolve_server_config, run_advise, run_split},
    cli::{Cli, Commands},
    client::AdviseClient,
    config::Config,
    error::AppResult
};
use tokio::main;
use tracing_subscriber::EnvFilter;

#[main]
async fn main() {
    init_logging();
    match run().await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let server = resolve_server_config(&cli.server, config.server.clone());
    let client = AdviseClient::from_config(&server).await?;

    let output = match cli.command {
        Commands::Split {
            input
        } => {
            let params = SplitParams {
                input_path:    input.display().to_string(),
                output_format: cli.output_format,
                no_color:      cli.no_color
            };
            run_split(&client, params).await?
        }
        Commands::Advise {
            input,
            rules,
            no_split,
            session
        } => {
            let params = AdviseParams {
                input_path: input.display().to_string(),
                rules,
                no_split,
                session,
                output_format: cli.output_format,
                no_color: cli.no_color
            };
            run_advise(&client, params, &config).await?
        }
    };

    for line in &output.stdout {
        println!("{}", line);
    }
    Ok(output.exit_code)
}
