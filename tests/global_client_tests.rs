// The process-wide handle can be set only once per test binary, so this file
// holds a single test.

mod common;

use std::sync::Arc;

use common::{MockService, closed_port, spawn_service};
use sql_advise_client::{
    client::{client, init_client},
    config::ServerConfig,
    error::is_connection_error
};

#[tokio::test]
async fn test_init_client_populates_handle_once() {
    let unreachable = ServerConfig {
        port: closed_port(),
        ..Default::default()
    };
    let err = init_client(&unreachable).await.unwrap_err();
    assert!(is_connection_error(&err));
    assert!(client().is_none());

    let service = Arc::new(MockService::splitting(&["SELECT 1;"]));
    let config = ServerConfig {
        port: spawn_service(service).await,
        version: "2019".to_string(),
        ..Default::default()
    };
    let first = init_client(&config).await.unwrap();
    assert_eq!(first.version(), "2019");

    let second = init_client(&unreachable).await.unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first, client().unwrap()));
    assert_eq!(client().unwrap().split_sql("SELECT 1;").await.unwrap(), vec!["SELECT 1;"]);
}
