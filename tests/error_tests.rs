// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use sql_advise_client::error::{
    advise_mismatch_error, config_error, file_read_error, is_connection_error, is_mismatch_error,
    rpc_call_error
};

#[test]
fn test_file_read_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = file_read_error("/path/to/file.sql", io_error);
    assert!(!error.to_string().is_empty());
    assert!(!is_connection_error(&error));
}

#[test]
fn test_config_error() {
    let error = config_error("Invalid configuration value");
    assert!(!error.to_string().is_empty());
    assert!(!is_mismatch_error(&error));
}

#[test]
fn test_rpc_call_error_is_connection_class() {
    let error = rpc_call_error("GetSplitSqls", tonic::Status::unavailable("connection reset"));
    assert!(is_connection_error(&error));
}

#[test]
fn test_mismatch_error_is_distinct_from_connection() {
    let mismatch = advise_mismatch_error(3, 2);
    let transport = rpc_call_error("Advise", tonic::Status::deadline_exceeded("slow"));
    assert!(is_mismatch_error(&mismatch));
    assert!(!is_connection_error(&mismatch));
    assert!(!is_mismatch_error(&transport));
}
