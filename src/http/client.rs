//! HTTP client for SFG and PEM REST endpoints
//!
//! Performs exactly one GET per call and hands back whatever the server
//! answered. Failures below the HTTP layer are classified into
//! [`TransportErrorKind`] when they are raised.

use crate::auth::{Authenticator, EnvironmentCredentials};
use crate::config::HttpSettings;
use crate::error::{Error, Result, TransportErrorKind};
use crate::types::ApiResponse;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Certificate, Client, Identity};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Transport seam used by the fetchers
#[async_trait]
pub trait ResourceClient: Send + Sync {
    /// Issue one authenticated GET
    ///
    /// Any HTTP answer is returned as an [`ApiResponse`]; only failures to
    /// obtain one are errors.
    async fn get(
        &self,
        url: &str,
        headers: &HeaderMap,
        credentials: &EnvironmentCredentials,
    ) -> Result<ApiResponse>;
}

#[async_trait]
impl<T: ResourceClient + ?Sized> ResourceClient for &T {
    async fn get(
        &self,
        url: &str,
        headers: &HeaderMap,
        credentials: &EnvironmentCredentials,
    ) -> Result<ApiResponse> {
        (**self).get(url, headers, credentials).await
    }
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a client with default TLS settings
    pub fn new() -> Result<Self> {
        Self::from_settings(&HttpSettings::default())
    }

    /// Build a client from configured TLS and timeout settings
    pub fn from_settings(settings: &HttpSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(format!("sfg2pem-migrator/{}", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(settings.accept_invalid_certs);

        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Some(path) = &settings.ca_certificate {
            let pem = read_pem(path, TransportErrorKind::KeyStore)?;
            let cert = Certificate::from_pem(&pem)
                .map_err(|e| Error::transport(TransportErrorKind::Certificate, e))?;
            builder = builder.add_root_certificate(cert);
        }

        if let Some(path) = &settings.client_identity {
            let pem = read_pem(path, TransportErrorKind::KeyManagement)?;
            let identity = Identity::from_pem(&pem)
                .map_err(|e| Error::transport(TransportErrorKind::KeyManagement, e))?;
            builder = builder.identity(identity);
        }

        let client = builder
            .build()
            .map_err(|e| Error::transport(TransportErrorKind::AlgorithmUnavailable, e))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl ResourceClient for HttpClient {
    async fn get(
        &self,
        url: &str,
        headers: &HeaderMap,
        credentials: &EnvironmentCredentials,
    ) -> Result<ApiResponse> {
        let url = Url::parse(url)?;

        let req = self.client.get(url.clone()).headers(headers.clone());
        let req = Authenticator::new(credentials).apply(req, &url);

        let response = req.send().await?;
        debug!("GET {} -> {}", url, response.status());

        ApiResponse::from_response(response).await
    }
}

fn read_pem(path: &Path, kind: TransportErrorKind) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::transport(kind, e))
}
