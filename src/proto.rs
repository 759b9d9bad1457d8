//! SQL Server RPC contract.
//!
//! Messages and stubs for the `SqlserverProto.SqlserverService` gRPC service.
//! The schema is owned by the remote service; field tags here must stay in
//! step with it.
//!
//! | Method | Request | Response |
//! |--------|---------|----------|
//! | `GetSplitSqls` | [`SplitSqlsInput`] | [`SplitSqlsOutput`] |
//! | `Advise` | [`AdviseInput`] | [`AdviseOutput`] |

/// Fully qualified service name.
pub const SERVICE_NAME: &str = "SqlserverProto.SqlserverService";

/// Request to split a raw SQL blob into statements.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SplitSqlsInput {
    /// Protocol version (dialect / ruleset tag)
    #[prost(string, tag = "1")]
    pub version: String,

    /// Raw SQL text holding one or more statements
    #[prost(string, tag = "2")]
    pub sqls: String
}

/// Statements in server order.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SplitSqlsOutput {
    #[prost(string, repeated, tag = "1")]
    pub sqls: Vec<String>
}

/// Connection context of the audited database.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SqlserverMeta {
    #[prost(string, tag = "1")]
    pub user:             String,
    #[prost(string, tag = "2")]
    pub password:         String,
    #[prost(string, tag = "3")]
    pub host:             String,
    #[prost(string, tag = "4")]
    pub port:             String,
    #[prost(string, tag = "5")]
    pub current_database: String,
    #[prost(string, tag = "6")]
    pub current_schema:   String
}

/// Request to evaluate statements against a set of rules.
#[derive(Clone, PartialEq, prost::Message)]
pub struct AdviseInput {
    #[prost(string, tag = "1")]
    pub version:        String,
    #[prost(string, repeated, tag = "2")]
    pub sqls:           Vec<String>,
    #[prost(string, repeated, tag = "3")]
    pub rule_names:     Vec<String>,
    #[prost(message, optional, tag = "4")]
    pub sqlserver_meta: Option<SqlserverMeta>
}

/// Advice for a single statement.
#[derive(Clone, PartialEq, prost::Message)]
pub struct AdviseResult {
    #[prost(string, tag = "1")]
    pub advise_level:          String,
    #[prost(string, tag = "2")]
    pub advise_result_message: String
}

/// One result per submitted statement, correlated by position.
#[derive(Clone, PartialEq, prost::Message)]
pub struct AdviseOutput {
    #[prost(message, repeated, tag = "1")]
    pub advise_results: Vec<AdviseResult>
}

/// Generated gRPC client module
pub mod sqlserver_service_client {
    use tonic::codegen::*;

    use super::{AdviseInput, AdviseOutput, SERVICE_NAME, SplitSqlsInput, SplitSqlsOutput};

    /// Typed stub for `SqlserverService`
    #[derive(Debug, Clone)]
    pub struct SqlserverServiceClient<T> {
        inner: tonic::client::Grpc<T>
    }

    impl<T> SqlserverServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send
    {
        pub fn new(inner: T) -> Self {
            Self {
                inner: tonic::client::Grpc::new(inner)
            }
        }

        /// Split a raw SQL blob into statements
        pub async fn get_split_sqls(
            &mut self,
            request: impl tonic::IntoRequest<SplitSqlsInput>
        ) -> std::result::Result<tonic::Response<SplitSqlsOutput>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/SqlserverProto.SqlserverService/GetSplitSqls"
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new(SERVICE_NAME, "GetSplitSqls"));
            self.inner.unary(req, path, codec).await
        }

        /// Evaluate statements against named rules
        pub async fn advise(
            &mut self,
            request: impl tonic::IntoRequest<AdviseInput>
        ) -> std::result::Result<tonic::Response<AdviseOutput>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/SqlserverProto.SqlserverService/Advise");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new(SERVICE_NAME, "Advise"));
            self.inner.unary(req, path, codec).await
        }
    }
}

/// Generated gRPC server module
///
/// The analysis service itself lives elsewhere; this side of the contract is
/// here so it can be served in-process, e.g. by test doubles.
pub mod sqlserver_service_server {
    use tonic::codegen::*;

    use super::{AdviseInput, AdviseOutput, SERVICE_NAME, SplitSqlsInput, SplitSqlsOutput};

    /// Server-side handler for `SqlserverService`
    #[tonic::async_trait]
    pub trait SqlserverService: std::marker::Send + std::marker::Sync + 'static {
        async fn get_split_sqls(
            &self,
            request: tonic::Request<SplitSqlsInput>
        ) -> std::result::Result<tonic::Response<SplitSqlsOutput>, tonic::Status>;

        async fn advise(
            &self,
            request: tonic::Request<AdviseInput>
        ) -> std::result::Result<tonic::Response<AdviseOutput>, tonic::Status>;
    }

    #[derive(Debug)]
    pub struct SqlserverServiceServer<T: SqlserverService> {
        inner: Arc<T>
    }

    impl<T: SqlserverService> SqlserverServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }

        pub fn from_arc(inner: Arc<T>) -> Self {
            Self {
                inner
            }
        }
    }

    impl<T: SqlserverService> Clone for SqlserverServiceServer<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone()
            }
        }
    }

    impl<T: SqlserverService> tonic::server::NamedService for SqlserverServiceServer<T> {
        const NAME: &'static str = SERVICE_NAME;
    }

    impl<T, B> Service<http::Request<B>> for SqlserverServiceServer<T>
    where
        T: SqlserverService,
        B: Body + std::marker::Send + 'static,
        B::Error: Into<StdError> + std::marker::Send + 'static
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>
        ) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/SqlserverProto.SqlserverService/GetSplitSqls" => Box::pin(async move {
                    let mut grpc = tonic::server::Grpc::new(tonic::codec::ProstCodec::default());
                    Ok(grpc.unary(GetSplitSqlsSvc(inner), req).await)
                }),
                "/SqlserverProto.SqlserverService/Advise" => Box::pin(async move {
                    let mut grpc = tonic::server::Grpc::new(tonic::codec::ProstCodec::default());
                    Ok(grpc.unary(AdviseSvc(inner), req).await)
                }),
                _ => Box::pin(async move {
                    let mut response = http::Response::new(tonic::body::empty_body());
                    let headers = response.headers_mut();
                    headers.insert("grpc-status", http::HeaderValue::from_static("12"));
                    headers.insert(
                        http::header::CONTENT_TYPE,
                        http::HeaderValue::from_static("application/grpc")
                    );
                    Ok(response)
                })
            }
        }
    }

    struct GetSplitSqlsSvc<T: SqlserverService>(Arc<T>);

    impl<T: SqlserverService> tonic::server::UnaryService<SplitSqlsInput> for GetSplitSqlsSvc<T> {
        type Response = SplitSqlsOutput;
        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;

        fn call(&mut self, request: tonic::Request<SplitSqlsInput>) -> Self::Future {
            let inner = self.0.clone();
            Box::pin(async move { inner.get_split_sqls(request).await })
        }
    }

    struct AdviseSvc<T: SqlserverService>(Arc<T>);

    impl<T: SqlserverService> tonic::server::UnaryService<AdviseInput> for AdviseSvc<T> {
        type Response = AdviseOutput;
        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;

        fn call(&mut self, request: tonic::Request<AdviseInput>) -> Self::Future {
            let inner = self.0.clone();
            Box::pin(async move { inner.advise(request).await })
        }
    }
}
