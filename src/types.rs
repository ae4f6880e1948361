//! Common types used throughout the migrator
//!
//! This module contains the response value returned by every remote call
//! and the wire constants shared by the fetchers.

use crate::error::Result;
use crate::xml::Document;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{StatusCode, Version};
use tracing::info;

// ============================================================================
// Wire Constants
// ============================================================================

/// XML media type, requested for single resources
pub const MEDIA_TYPE_APPLICATION_XML: &str = "application/xml";

/// JSON media type, requested for resource listings
pub const MEDIA_TYPE_APPLICATION_JSON: &str = "application/json";

/// SFG trading partner resource
pub const SFG_PARTNER_REST_URI: &str = "tradingpartners/";

/// PEM partner resource
pub const PEM_PARTNER_REST_URI: &str = "partners/";

/// The only status code treated as success
pub const STATUS_OK: &str = "200";

/// Representation requested through the `Accept` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Xml,
    Json,
}

impl MediaType {
    /// MIME string for the header value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xml => MEDIA_TYPE_APPLICATION_XML,
            Self::Json => MEDIA_TYPE_APPLICATION_JSON,
        }
    }

    /// Request headers carrying this media type in `Accept`
    pub fn accept_headers(self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(self.as_str()));
        headers
    }
}

// ============================================================================
// API Response
// ============================================================================

/// Result of one HTTP call
///
/// Any HTTP answer, 4xx and 5xx included, is an `ApiResponse`; deciding
/// whether it counts as success is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status_code: String,
    status_line: String,
    body: String,
    headers: HeaderMap,
}

impl ApiResponse {
    /// Create a response value
    pub fn new(
        status_code: impl Into<String>,
        status_line: impl Into<String>,
        body: impl Into<String>,
        headers: HeaderMap,
    ) -> Self {
        Self {
            status_code: status_code.into(),
            status_line: status_line.into(),
            body: body.into(),
            headers,
        }
    }

    /// Read a reqwest response to completion
    pub async fn from_response(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let status_line = status_line(response.version(), status);
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(Self {
            status_code: status.as_u16().to_string(),
            status_line,
            body,
            headers,
        })
    }

    /// Numeric status in string form, e.g. `"404"`
    pub fn status_code(&self) -> &str {
        &self.status_code
    }

    /// Protocol status text, e.g. `HTTP/1.1 404 Not Found`
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Response body, empty when the server sent none
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Look up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Success is exactly `"200"`; other 2xx codes are failures
    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }

    /// Parse the body as an XML document
    pub fn to_document(&self) -> Result<Document> {
        Document::parse(&self.body)
    }

    /// Log status and body at info level
    pub fn log_summary(&self) {
        info!(
            "API Status Code: {}, Status Line: {}",
            self.status_code, self.status_line
        );
        info!("API Response: {}", self.body);
    }
}

/// `HTTP/1.1 404 Not Found`, or just the code when it has no registered reason
fn status_line(version: Version, status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{version:?} {} {reason}", status.as_u16()),
        None => format!("{version:?} {}", status.as_u16()),
    }
}
