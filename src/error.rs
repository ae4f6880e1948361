//! Error types for the migrator
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use std::fmt;
use thiserror::Error;

/// Opaque cause carried by a transport error
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The main error type for the migrator
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Remote Call Errors
    // ============================================================================
    /// The call never produced an HTTP response
    #[error("Transport error ({kind}): {source}")]
    Transport {
        kind: TransportErrorKind,
        #[source]
        source: BoxError,
    },

    /// The remote answered with anything but `200`
    #[error("{message}")]
    Import { message: String },

    // ============================================================================
    // Document Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("XML parsing error: {message}")]
    XmlParse { message: String },

    #[error("Template error: {message}")]
    Template { message: String },

    #[error("Undefined variable in template: {variable}")]
    UndefinedVariable { variable: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

/// Classification of a transport failure, decided when the error is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Client key material could not be loaded
    KeyManagement,
    /// No TLS implementation for the negotiated algorithm
    AlgorithmUnavailable,
    /// Server or root certificate rejected
    Certificate,
    /// Trust store could not be read
    KeyStore,
    /// HTTP protocol level failure
    Protocol,
    /// Connect, read or timeout failure
    Io,
    /// URL could not be parsed
    MalformedUrl,
    /// Request rejected locally before it was sent
    Validation,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KeyManagement => "key management",
            Self::AlgorithmUnavailable => "algorithm unavailable",
            Self::Certificate => "certificate",
            Self::KeyStore => "key store",
            Self::Protocol => "protocol",
            Self::Io => "i/o",
            Self::MalformedUrl => "malformed url",
            Self::Validation => "validation",
        };
        f.write_str(name)
    }
}

impl TransportErrorKind {
    /// Classify a reqwest failure
    ///
    /// Only the cause chain is searched for a certificate rejection; the
    /// top-level message carries the request URL.
    pub fn classify(err: &reqwest::Error) -> Self {
        if mentions_certificate(std::error::Error::source(err)) {
            return Self::Certificate;
        }
        if err.is_builder() {
            Self::Validation
        } else if err.is_timeout() || err.is_connect() || err.is_body() || err.is_decode() {
            Self::Io
        } else {
            Self::Protocol
        }
    }
}

/// Walk a cause chain looking for a TLS certificate rejection
fn mentions_certificate(mut current: Option<&(dyn std::error::Error + 'static)>) -> bool {
    while let Some(e) = current {
        if e.to_string().to_lowercase().contains("certificate") {
            return true;
        }
        current = e.source();
    }
    false
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = TransportErrorKind::classify(&err);
        Self::transport(kind, err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::transport(TransportErrorKind::MalformedUrl, err)
    }
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a transport error from any cause
    pub fn transport(kind: TransportErrorKind, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            kind,
            source: source.into(),
        }
    }

    /// Create an import error
    pub fn import(message: impl Into<String>) -> Self {
        Self::Import {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an XML error
    pub fn xml(message: impl Into<String>) -> Self {
        Self::XmlParse {
            message: message.into(),
        }
    }

    /// Create a template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Create an undefined variable error
    pub fn undefined_var(variable: impl Into<String>) -> Self {
        Self::UndefinedVariable {
            variable: variable.into(),
        }
    }

    /// True for failures below the HTTP layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// True for non-success responses
    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import { .. })
    }

    /// Transport classification, if this is a transport error
    pub fn transport_kind(&self) -> Option<TransportErrorKind> {
        match self {
            Self::Transport { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Result type alias for the migrator
pub type Result<T> = std::result::Result<T, Error>;
