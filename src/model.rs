//! Records exchanged between callers and the advisory client.
//!
//! - [`CommitSql`] - a submitted statement with its advisory fields
//! - [`Rule`] - a rule reference; only the name reaches the wire
//! - [`SessionDescriptor`] - connection context of the audited database
//! - [`AdviceSeverity`] - classification of the server's free-form level

use serde::{Deserialize, Serialize};

use crate::proto::SqlserverMeta;

/// Processing status of a statement record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectStatus {
    /// Not yet advised
    #[default]
    Init,
    /// Advice copied from the server
    Completed
}

impl std::fmt::Display for InspectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Completed => write!(f, "completed")
        }
    }
}

/// A single SQL statement submitted for review.
///
/// Owned by the calling workflow. The advisory client only writes
/// `inspect_level`, `inspect_result` and `inspect_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSql {
    /// One-based position in the submitted batch
    pub number:         u32,
    /// Raw statement text
    pub content:        String,
    /// Advisory level reported by the server (e.g. "notice", "error")
    pub inspect_level:  String,
    /// Advisory message reported by the server
    pub inspect_result: String,
    pub inspect_status: InspectStatus
}

impl CommitSql {
    pub fn new(number: u32, content: impl Into<String>) -> Self {
        Self {
            number,
            content: content.into(),
            inspect_level: String::new(),
            inspect_result: String::new(),
            inspect_status: InspectStatus::Init
        }
    }

    /// Build records from split statements, numbered from 1.
    pub fn from_split(sqls: Vec<String>) -> Vec<Self> {
        sqls.into_iter()
            .zip(1..)
            .map(|(content, number)| Self::new(number, content))
            .collect()
    }

    pub fn severity(&self) -> AdviceSeverity {
        AdviceSeverity::from_level(&self.inspect_level)
    }
}

/// Reference to a rule evaluated by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    #[serde(default)]
    pub desc: String
}

impl Rule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: String::new()
        }
    }
}

impl From<&str> for Rule {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Rule {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Credentials and addressing of the database under review.
///
/// Passed through to the server unmodified.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionDescriptor {
    pub user:             String,
    pub password:         String,
    pub host:             String,
    pub port:             String,
    pub current_database: String,
    pub current_schema:   String
}

impl SessionDescriptor {
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        port: impl Into<String>,
        current_database: impl Into<String>,
        current_schema: impl Into<String>
    ) -> Self {
        Self {
            user:             user.into(),
            password:         password.into(),
            host:             host.into(),
            port:             port.into(),
            current_database: current_database.into(),
            current_schema:   current_schema.into()
        }
    }
}

impl std::fmt::Debug for SessionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionDescriptor")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("current_database", &self.current_database)
            .field("current_schema", &self.current_schema)
            .finish()
    }
}

impl From<&SessionDescriptor> for SqlserverMeta {
    fn from(session: &SessionDescriptor) -> Self {
        Self {
            user:             session.user.clone(),
            password:         session.password.clone(),
            host:             session.host.clone(),
            port:             session.port.clone(),
            current_database: session.current_database.clone(),
            current_schema:   session.current_schema.clone()
        }
    }
}

/// Severity class of an advisory level.
///
/// The server reports levels as free-form strings; this is only used locally
/// for exit codes and coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AdviceSeverity {
    Info,
    Warning,
    Error
}

impl AdviceSeverity {
    pub fn from_level(level: &str) -> Self {
        match level.trim().to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warning,
            _ => Self::Info
        }
    }
}

impl std::fmt::Display for AdviceSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR")
        }
    }
}
