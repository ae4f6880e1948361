//! Authenticator implementation
//!
//! Applies basic authentication to outgoing requests, scoped to the host
//! the credentials belong to.

use super::types::EnvironmentCredentials;
use reqwest::RequestBuilder;
use tracing::warn;
use url::Url;

/// Applies environment credentials to HTTP requests
pub struct Authenticator<'a> {
    credentials: &'a EnvironmentCredentials,
}

impl<'a> Authenticator<'a> {
    /// Create an authenticator for one set of credentials
    pub fn new(credentials: &'a EnvironmentCredentials) -> Self {
        Self { credentials }
    }

    /// Apply basic auth when the target URL is inside the credential scope
    pub fn apply(&self, req: RequestBuilder, url: &Url) -> RequestBuilder {
        if !host_matches(url, self.credentials.host()) {
            warn!(
                "Host '{}' of {} is outside the credential scope '{}', sending without credentials",
                url.host_str().unwrap_or_default(),
                url,
                self.credentials.host()
            );
            return req;
        }

        req.basic_auth(
            self.credentials.user_name(),
            Some(self.credentials.password().expose()),
        )
    }
}

/// Check whether a URL targets the configured host
///
/// An empty scope matches every URL. A port in the scope must match the
/// URL's effective port.
pub fn host_matches(url: &Url, scope: &str) -> bool {
    let scope = scope.trim();
    if scope.is_empty() {
        return true;
    }

    let Some(url_host) = url.host_str() else {
        return false;
    };

    let (scope_host, scope_port) = match scope.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => {
            (host, port.parse::<u16>().ok())
        }
        _ => (scope, None),
    };

    if !url_host.eq_ignore_ascii_case(scope_host) {
        return false;
    }

    match scope_port {
        Some(port) => url.port_or_known_default() == Some(port),
        None => true,
    }
}
