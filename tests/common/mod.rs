//! In-process advisory service for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use sql_advise_client::{
    client::AdviseClient,
    proto::{
        AdviseInput, AdviseOutput, AdviseResult, SplitSqlsInput, SplitSqlsOutput,
        sqlserver_service_server::{SqlserverService, SqlserverServiceServer}
    }
};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{Request, Response, Status};

/// Canned replies plus a record of what the client sent.
#[derive(Default)]
pub struct MockService {
    pub split_reply:  Vec<String>,
    pub advise_reply: Vec<AdviseResult>,
    pub fail:         bool,
    pub split_calls:  Mutex<Vec<SplitSqlsInput>>,
    pub advise_calls: Mutex<Vec<AdviseInput>>
}

impl MockService {
    pub fn splitting(statements: &[&str]) -> Self {
        Self {
            split_reply: statements.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn advising(results: &[(&str, &str)]) -> Self {
        Self {
            advise_reply: results.iter().map(|(l, m)| advice(l, m)).collect(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn last_advise_call(&self) -> Option<AdviseInput> {
        self.advise_calls.lock().unwrap().last().cloned()
    }

    pub fn last_split_call(&self) -> Option<SplitSqlsInput> {
        self.split_calls.lock().unwrap().last().cloned()
    }
}

pub fn advice(level: &str, message: &str) -> AdviseResult {
    AdviseResult {
        advise_level:          level.to_string(),
        advise_result_message: message.to_string()
    }
}

#[tonic::async_trait]
impl SqlserverService for MockService {
    async fn get_split_sqls(
        &self,
        request: Request<SplitSqlsInput>
    ) -> Result<Response<SplitSqlsOutput>, Status> {
        self.split_calls.lock().unwrap().push(request.into_inner());
        if self.fail {
            return Err(Status::unavailable("advisory backend down"));
        }
        Ok(Response::new(SplitSqlsOutput {
            sqls: self.split_reply.clone()
        }))
    }

    async fn advise(&self, request: Request<AdviseInput>) -> Result<Response<AdviseOutput>, Status> {
        self.advise_calls.lock().unwrap().push(request.into_inner());
        if self.fail {
            return Err(Status::internal("rule evaluation crashed"));
        }
        Ok(Response::new(AdviseOutput {
            advise_results: self.advise_reply.clone()
        }))
    }
}

/// Serve `service` on an ephemeral localhost port, returning the port.
pub async fn spawn_service(service: Arc<MockService>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(SqlserverServiceServer::from_arc(service))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });
    port.to_string()
}

/// Serve `service` and connect a client to it.
pub async fn connect(service: Arc<MockService>) -> AdviseClient {
    let port = spawn_service(service).await;
    AdviseClient::connect("127.0.0.1", &port).await.unwrap()
}

/// A localhost port with nothing listening on it.
pub fn closed_port() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port.to_string()
}
