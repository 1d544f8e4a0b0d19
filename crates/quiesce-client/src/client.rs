//! Control-plane client.
//!
//! Each call opens its own http1 connection to the control plane,
//! mirroring how short-lived operational requests are issued elsewhere
//! in the stack. Constructing the client runs an authenticated preflight
//! so that an unreachable endpoint or a rejected token surfaces before
//! any service is touched.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use tracing::debug;

use quiesce_core::DesiredCountApi;

use crate::error::{ClientError, ClientResult};

/// Client for the orchestration control plane's scale endpoint.
#[derive(Debug, Clone)]
pub struct ControlPlaneClient {
    /// host:port of the control plane API.
    endpoint: String,
    /// Bearer token, if the control plane requires one.
    token: Option<String>,
}

impl ControlPlaneClient {
    /// Connect to the control plane and verify the session is usable.
    ///
    /// Issues a `GET /api/v1/ping` preflight. Authentication and
    /// reachability problems fail here, never mid-run.
    pub async fn connect(endpoint: &str, token: Option<String>) -> ClientResult<Self> {
        let client = Self {
            endpoint: endpoint.to_string(),
            token,
        };
        client.request(http::Method::GET, "/api/v1/ping", None).await?;
        debug!(endpoint = %client.endpoint, "control plane preflight ok");
        Ok(client)
    }

    /// The control plane address this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn scale_path(cluster: &str, service: &str) -> String {
        format!("/api/v1/clusters/{cluster}/services/{service}/scale")
    }

    /// Issue a single request on a fresh connection and collect the body.
    ///
    /// No client-side timeout: a hung control plane hangs the call.
    async fn request(
        &self,
        method: http::Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ClientResult<Bytes> {
        let stream = tokio::net::TcpStream::connect(&self.endpoint)
            .await
            .map_err(|source| ClientError::Connect {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let io = hyper_util::rt::TokioIo::new(stream);
        let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
            .await
            .map_err(ClientError::Handshake)?;

        // Drive the connection in the background.
        tokio::spawn(async move {
            let _ = conn.await;
        });

        let uri = format!("http://{}{}", self.endpoint, path);
        let mut builder = http::Request::builder()
            .method(method)
            .uri(&uri)
            .header("host", &self.endpoint)
            .header("user-agent", "quiesce/0.1");
        if let Some(token) = &self.token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request = match body {
            Some(value) => builder
                .header("content-type", "application/json")
                .body(Full::new(Bytes::from(value.to_string())))?,
            None => builder.body(Full::new(Bytes::new()))?,
        };

        let response = sender
            .send_request(request)
            .await
            .map_err(ClientError::Request)?;
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(ClientError::Request)?
            .to_bytes();

        if !status.is_success() {
            let message = String::from_utf8_lossy(&bytes).trim().to_string();
            return Err(ClientError::Api { status, message });
        }
        Ok(bytes)
    }
}

impl DesiredCountApi for ControlPlaneClient {
    async fn set_desired_count(
        &self,
        cluster: &str,
        service: &str,
        target: u32,
    ) -> anyhow::Result<()> {
        self.request(
            http::Method::POST,
            &Self::scale_path(cluster, service),
            Some(serde_json::json!({ "target": target })),
        )
        .await?;
        debug!(%cluster, %service, target, "desired count updated");
        Ok(())
    }
}
