//! Ways of sending a request to the service under test.
//!
//! - [`send`] drives the router in process with `tower::ServiceExt::oneshot`.
//! - [`TestServer`] binds a real listener on `127.0.0.1:0` and talks to it
//!   with a pooled `hyper_util` client.

use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
};
use cafe::{router, AppState, Catalog};
use http_body_util::{BodyExt, Empty};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Status and body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Send `GET uri` to a fresh router over `catalog`.
pub async fn send_to(catalog: Catalog, uri: &str) -> TestResponse {
    let response = router(AppState::new(catalog))
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Send `GET uri` to a fresh router over the built-in catalog.
pub async fn send(uri: &str) -> TestResponse {
    send_to(Catalog::builtin(), uri).await
}

/// A real server running `cafe::serve` on an ephemeral port. The server task
/// is aborted when the handle drops.
pub struct TestServer {
    addr: SocketAddr,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
    client: Client<HttpConnector, Empty<Bytes>>,
}

impl TestServer {
    pub async fn start(catalog: Catalog) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(cafe::serve(listener, AppState::new(catalog)));
        let client = Client::builder(TokioExecutor::new()).build_http();
        Ok(Self {
            addr,
            handle,
            client,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Issue `GET path` against the running server.
    pub async fn get(&self, path: &str) -> anyhow::Result<TestResponse> {
        let uri: hyper::Uri = format!("http://{}{path}", self.addr).parse()?;
        let response = self.client.get(uri).await?;

        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        Ok(TestResponse {
            status,
            body: String::from_utf8(bytes.to_vec())?,
        })
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
