use std::error::Error;

pub use masterror::{AppError, AppErrorKind, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create error for a failed dial of the SQL Server RPC service.
///
/// Connection-class: reported with [`AppErrorKind::Network`].
pub fn rpc_connect_error(endpoint: &str, err: tonic::transport::Error) -> AppError {
    AppError::network(format!(
        "Failed to connect to SQL Server RPC service at {}: {}",
        endpoint,
        describe_transport_error(&err)
    ))
}

/// Create error for a failed RPC call.
///
/// Connection-class: reported with [`AppErrorKind::Network`].
pub fn rpc_call_error(method: &str, status: tonic::Status) -> AppError {
    let msg = if status.message().is_empty() {
        format!("SQL Server RPC {} failed: {:?}", method, status.code())
    } else {
        format!(
            "SQL Server RPC {} failed: {:?}: {}",
            method,
            status.code(),
            status.message()
        )
    };
    AppError::network(msg)
}

/// Create error for an advise reply whose cardinality disagrees with the
/// request.
///
/// Remote-mismatch class: reported with [`AppErrorKind::Service`].
pub fn advise_mismatch_error(expected: usize, actual: usize) -> AppError {
    AppError::service(format!(
        "Advise results don't match submitted SQL: sent {} statements, received {} results",
        expected, actual
    ))
}

/// Whether the error is connection-class (dial or RPC transport failure).
pub fn is_connection_error(err: &AppError) -> bool {
    err.kind == AppErrorKind::Network
}

/// Whether the error is a remote reply mismatch.
pub fn is_mismatch_error(err: &AppError) -> bool {
    err.kind == AppErrorKind::Service
}

// tonic::transport::Error's Display is just "transport error"; the useful part
// is in the source chain.
fn describe_transport_error(err: &tonic::transport::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_error_is_connection_class() {
        let err = rpc_call_error("Advise", tonic::Status::unavailable("down"));
        assert!(is_connection_error(&err));
        assert!(!is_mismatch_error(&err));
    }

    #[test]
    fn test_call_error_without_message() {
        let err = rpc_call_error("GetSplitSqls", tonic::Status::new(tonic::Code::Internal, ""));
        assert!(is_connection_error(&err));
    }

    #[test]
    fn test_mismatch_error_kind() {
        let err = advise_mismatch_error(3, 2);
        assert!(is_mismatch_error(&err));
        assert!(!is_connection_error(&err));
    }
}
