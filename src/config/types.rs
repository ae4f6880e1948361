//! Configuration types
//!
//! `*Definition` types mirror the YAML file; the runtime types hold
//! validated values with passwords resolved.

use crate::auth::Secret;
use serde::Deserialize;
use std::path::PathBuf;

// ============================================================================
// YAML Definitions
// ============================================================================

/// Top-level configuration file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfigurationDefinition {
    /// SFG source endpoints
    pub sfg: SfgDefinition,
    /// PEM target endpoint
    pub pem: EndpointDefinition,
    /// Directory holding `userCredential.xml`
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpSettings,
}

/// Production and test SFG endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct SfgDefinition {
    pub production: EndpointDefinition,
    pub test: EndpointDefinition,
}

/// One endpoint as written in the file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EndpointDefinition {
    /// REST base URL, usually ending in `/`
    pub rest_url: String,
    /// Host the credentials are scoped to (empty = any)
    #[serde(default)]
    pub host: String,
    /// Login name
    pub username: String,
    /// Inline password
    #[serde(default)]
    pub password: Option<Secret>,
    /// Environment variable holding the password
    #[serde(default)]
    pub password_env: Option<String>,
}

/// HTTP/TLS client settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpSettings {
    /// Request timeout; the client default applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Skip server certificate validation
    #[serde(default)]
    pub accept_invalid_certs: bool,
    /// Extra root certificate (PEM)
    #[serde(default)]
    pub ca_certificate: Option<PathBuf>,
    /// Client certificate and private key (PEM)
    #[serde(default)]
    pub client_identity: Option<PathBuf>,
}

// ============================================================================
// Runtime Configuration
// ============================================================================

/// Validated configuration
#[derive(Debug, Clone)]
pub struct Configuration {
    pub sfg: SfgConfig,
    pub pem: EndpointConfig,
    pub templates_dir: Option<PathBuf>,
    pub http: HttpSettings,
}

impl Configuration {
    /// Assemble a configuration from already validated parts
    pub fn new(sfg: SfgConfig, pem: EndpointConfig) -> Self {
        Self {
            sfg,
            pem,
            templates_dir: None,
            http: HttpSettings::default(),
        }
    }

    /// Set the template directory
    #[must_use]
    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(dir.into());
        self
    }

    /// Set HTTP settings
    #[must_use]
    pub fn with_http(mut self, http: HttpSettings) -> Self {
        self.http = http;
        self
    }
}

/// Production and test SFG endpoints
#[derive(Debug, Clone)]
pub struct SfgConfig {
    pub production: EndpointConfig,
    pub test: EndpointConfig,
}

/// One endpoint with its password resolved
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub rest_url: String,
    pub host: String,
    pub username: String,
    pub password: Secret,
}

impl EndpointConfig {
    /// Create an endpoint
    pub fn new(
        rest_url: impl Into<String>,
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            rest_url: rest_url.into(),
            host: host.into(),
            username: username.into(),
            password: Secret::new(password),
        }
    }
}
