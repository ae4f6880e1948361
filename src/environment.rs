//! Environment selection
//!
//! Picks the connection values for one SFG environment, or for the PEM
//! target, out of the configuration.

use crate::auth::EnvironmentCredentials;
use crate::config::{Configuration, EndpointConfig};
use std::fmt;

/// SFG instance to read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SfgEnvironment {
    Production,
    Test,
}

impl fmt::Display for SfgEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Test => f.write_str("test"),
        }
    }
}

/// Credentials for an SFG environment
///
/// URL, host, user name and password are taken from the same endpoint
/// block, so the result never mixes environments.
pub fn resolve(env: SfgEnvironment, config: &Configuration) -> EnvironmentCredentials {
    let endpoint = match env {
        SfgEnvironment::Production => &config.sfg.production,
        SfgEnvironment::Test => &config.sfg.test,
    };
    credentials_for(endpoint)
}

/// Credentials for the PEM target
pub fn resolve_pem(config: &Configuration) -> EnvironmentCredentials {
    credentials_for(&config.pem)
}

fn credentials_for(endpoint: &EndpointConfig) -> EnvironmentCredentials {
    EnvironmentCredentials::new(
        endpoint.rest_url.as_str(),
        endpoint.host.as_str(),
        endpoint.username.as_str(),
        endpoint.password.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SfgConfig;
    use test_case::test_case;

    fn config() -> Configuration {
        Configuration::new(
            SfgConfig {
                production: EndpointConfig::new(
                    "https://prod.example.com/svc/",
                    "prod.example.com",
                    "prod-user",
                    "prod-pass",
                ),
                test: EndpointConfig::new(
                    "https://test.example.com/svc/",
                    "test.example.com",
                    "test-user",
                    "test-pass",
                ),
            },
            EndpointConfig::new("https://pem.example.com/", "pem.example.com", "pem-user", "pem-pass"),
        )
    }

    #[test_case(SfgEnvironment::Production, "prod" ; "production")]
    #[test_case(SfgEnvironment::Test, "test" ; "test")]
    fn test_resolve_never_mixes(env: SfgEnvironment, prefix: &str) {
        let creds = resolve(env, &config());

        assert_eq!(creds.base_url(), format!("https://{prefix}.example.com/svc/"));
        assert_eq!(creds.host(), format!("{prefix}.example.com"));
        assert_eq!(creds.user_name(), format!("{prefix}-user"));
        assert_eq!(creds.password().expose(), format!("{prefix}-pass"));
    }

    #[test]
    fn test_resolve_pem() {
        let creds = resolve_pem(&config());
        assert_eq!(creds.base_url(), "https://pem.example.com/");
        assert_eq!(creds.user_name(), "pem-user");
        assert_eq!(creds.password().expose(), "pem-pass");
    }

    #[test]
    fn test_display() {
        assert_eq!(SfgEnvironment::Production.to_string(), "production");
        assert_eq!(SfgEnvironment::Test.to_string(), "test");
    }
}
