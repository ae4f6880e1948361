//! Credential types
//!
//! These types carry the per-environment connection values after the
//! configuration has been loaded and validated.

use serde::{Deserialize, Deserializer};
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

/// A password held in a buffer that is zeroed on drop
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(Zeroizing<String>);

impl Secret {
    /// Wrap a secret value
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Borrow the plain value for the duration of a call
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Check if the secret is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Zero the buffer now instead of waiting for drop
    pub fn clear(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl<'de> Deserialize<'de> for Secret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Connection values for one environment
///
/// Every field comes from the same endpoint block of the configuration;
/// there is no way to build one from a mix of environments.
#[derive(Debug, Clone)]
pub struct EnvironmentCredentials {
    base_url: String,
    host: String,
    user_name: String,
    password: Secret,
}

impl EnvironmentCredentials {
    pub(crate) fn new(
        base_url: impl Into<String>,
        host: impl Into<String>,
        user_name: impl Into<String>,
        password: Secret,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            host: host.into(),
            user_name: user_name.into(),
            password,
        }
    }

    /// REST base URL, resource URIs are appended verbatim
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Host the credentials are scoped to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Login name
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Password buffer
    pub fn password(&self) -> &Secret {
        &self.password
    }
}
