//! Client for the remote SQL Server advisory service.
//!
//! All SQL handling happens on the server: this client forwards raw SQL for
//! splitting, forwards statements and rule names for advice, and copies the
//! replies back onto the caller's [`CommitSql`] records.
//!
//! Every call is a single unary RPC with no retry. The underlying
//! [`Channel`] multiplexes concurrent calls, so one [`AdviseClient`] can be
//! shared by reference across tasks.
//!
//! # Example
//!
//! ```no_run
//! use sql_advise_client::{
//!     client::AdviseClient,
//!     model::{CommitSql, Rule, SessionDescriptor}
//! };
//!
//! # async fn run() -> sql_advise_client::error::AppResult<()> {
//! let client = AdviseClient::connect("127.0.0.1", "10001")
//!     .await?
//!     .with_version("2019");
//!
//! let sqls = client.split_sql("SELECT 1; SELECT 2;").await?;
//! let mut commit_sqls = CommitSql::from_split(sqls);
//! let rules = [Rule::new("rule_no_select_star")];
//! client
//!     .advise(&mut commit_sqls, &rules, &SessionDescriptor::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::{sync::OnceLock, time::Duration};

use indexmap::IndexSet;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info, warn};

use crate::{
    config::ServerConfig,
    error::{AppResult, advise_mismatch_error, rpc_call_error, rpc_connect_error},
    model::{CommitSql, InspectStatus, Rule, SessionDescriptor},
    proto::{
        AdviseInput, SplitSqlsInput, SqlserverMeta,
        sqlserver_service_client::SqlserverServiceClient
    }
};

/// Process-wide handle, set at most once
static ADVISE_CLIENT: OnceLock<AdviseClient> = OnceLock::new();

/// Connection handle to the advisory service.
#[derive(Debug, Clone)]
pub struct AdviseClient {
    endpoint: String,
    version:  String,
    stub:     SqlserverServiceClient<Channel>
}

impl AdviseClient {
    /// Dial `host:port` over plaintext HTTP/2 with an empty protocol version.
    pub async fn connect(host: &str, port: &str) -> AppResult<Self> {
        Self::dial(host, port, None).await
    }

    /// Dial the service described by `config`, carrying its protocol version.
    pub async fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let client = Self::dial(&config.host, &config.port, config.connect_timeout()).await?;
        Ok(client.with_version(config.version.clone()))
    }

    async fn dial(host: &str, port: &str, timeout: Option<Duration>) -> AppResult<Self> {
        let endpoint = format!("http://{}:{}", host, port);
        let mut builder = Endpoint::from_shared(endpoint.clone())
            .map_err(|e| rpc_connect_error(&endpoint, e))?;
        if let Some(timeout) = timeout {
            builder = builder.connect_timeout(timeout);
        }
        let channel = builder
            .connect()
            .await
            .map_err(|e| rpc_connect_error(&endpoint, e))?;
        info!(%endpoint, "connected to SQL Server RPC service");
        Ok(Self {
            endpoint,
            version: String::new(),
            stub: SqlserverServiceClient::new(channel)
        })
    }

    /// Set the protocol version sent with every request
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Split a blob of SQL into individual statements, in server order.
    pub async fn split_sql(&self, sql: &str) -> AppResult<Vec<String>> {
        let request = SplitSqlsInput {
            version: self.version.clone(),
            sqls:    sql.to_string()
        };
        let output = self
            .stub
            .clone()
            .get_split_sqls(request)
            .await
            .map_err(|status| rpc_call_error("GetSplitSqls", status))?
            .into_inner();
        debug!(statements = output.sqls.len(), "split sql");
        Ok(output.sqls)
    }

    /// Ask the service to evaluate `commit_sqls` against `rules`.
    ///
    /// Replies are matched to records strictly by position. Each record gets
    /// the reply's level and message and is marked
    /// [`InspectStatus::Completed`]. If the reply count differs from the
    /// number of records, nothing is written and a mismatch error is
    /// returned.
    pub async fn advise(
        &self,
        commit_sqls: &mut [CommitSql],
        rules: &[Rule],
        session: &SessionDescriptor
    ) -> AppResult<()> {
        let sqls: Vec<String> = commit_sqls.iter().map(|s| s.content.clone()).collect();
        let rule_names: IndexSet<&str> = rules.iter().map(|r| r.name.as_str()).collect();
        let request = AdviseInput {
            version:        self.version.clone(),
            sqls,
            rule_names:     rule_names.into_iter().map(String::from).collect(),
            sqlserver_meta: Some(SqlserverMeta::from(session))
        };
        let results = self
            .stub
            .clone()
            .advise(request)
            .await
            .map_err(|status| rpc_call_error("Advise", status))?
            .into_inner()
            .advise_results;

        if results.len() != commit_sqls.len() {
            warn!(
                expected = commit_sqls.len(),
                received = results.len(),
                "advise result count mismatch"
            );
            return Err(advise_mismatch_error(commit_sqls.len(), results.len()));
        }

        for (commit_sql, result) in commit_sqls.iter_mut().zip(results) {
            commit_sql.inspect_level = result.advise_level;
            commit_sql.inspect_result = result.advise_result_message;
            commit_sql.inspect_status = InspectStatus::Completed;
        }
        debug!(statements = commit_sqls.len(), "advise completed");
        Ok(())
    }
}

/// Initialize the process-wide client.
///
/// Dials only while no handle is stored. On failure the handle stays unset.
/// Once set, later calls return the stored handle unchanged.
pub async fn init_client(config: &ServerConfig) -> AppResult<&'static AdviseClient> {
    if let Some(existing) = ADVISE_CLIENT.get() {
        return Ok(existing);
    }
    let client = AdviseClient::from_config(config).await?;
    Ok(ADVISE_CLIENT.get_or_init(|| client))
}

/// Process-wide client, if [`init_client`] has succeeded
pub fn client() -> Option<&'static AdviseClient> {
    ADVISE_CLIENT.get()
}
