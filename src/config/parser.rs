//! YAML parser for the migrator configuration
//!
//! Parses, resolves passwords and validates the configuration file.

use super::types::{
    Configuration, ConfigurationDefinition, EndpointConfig, EndpointDefinition, SfgConfig,
};
use crate::auth::Secret;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use url::Url;

/// Load a configuration file
pub fn load_configuration(path: impl AsRef<Path>) -> Result<Configuration> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read configuration file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_configuration_from_str(&content)
}

/// Load a configuration from a YAML string
///
/// `password_env` entries are resolved against the process environment.
pub fn load_configuration_from_str(yaml: &str) -> Result<Configuration> {
    load_with_env(yaml, |name| std::env::var(name).ok())
}

pub(crate) fn load_with_env<F>(yaml: &str, env: F) -> Result<Configuration>
where
    F: Fn(&str) -> Option<String>,
{
    let def: ConfigurationDefinition = serde_yaml::from_str(yaml)?;

    let sfg = SfgConfig {
        production: resolve_endpoint("sfg.production", def.sfg.production, &env)?,
        test: resolve_endpoint("sfg.test", def.sfg.test, &env)?,
    };
    let pem = resolve_endpoint("pem", def.pem, &env)?;

    if let Some(dir) = &def.templates_dir {
        if !dir.is_dir() {
            return Err(Error::invalid_value(
                "templates_dir",
                format!("'{}' is not a directory", dir.display()),
            ));
        }
    }

    Ok(Configuration {
        sfg,
        pem,
        templates_dir: def.templates_dir,
        http: def.http,
    })
}

/// Validate one endpoint and settle its password source
fn resolve_endpoint<F>(
    prefix: &str,
    def: EndpointDefinition,
    env: &F,
) -> Result<EndpointConfig>
where
    F: Fn(&str) -> Option<String>,
{
    validate_rest_url(prefix, &def.rest_url)?;

    if def.username.trim().is_empty() {
        return Err(Error::missing_field(format!("{prefix}.username")));
    }

    let password = match (def.password, def.password_env) {
        (Some(_), Some(_)) => {
            return Err(Error::invalid_value(
                format!("{prefix}.password"),
                "set either password or password_env, not both",
            ));
        }
        (Some(password), None) => password,
        (None, Some(var)) => match env(&var) {
            Some(value) => Secret::new(value),
            None => {
                return Err(Error::missing_field(format!(
                    "{prefix}.password (environment variable {var} is not set)"
                )));
            }
        },
        (None, None) => return Err(Error::missing_field(format!("{prefix}.password"))),
    };

    Ok(EndpointConfig {
        rest_url: def.rest_url,
        host: def.host.trim().to_string(),
        username: def.username,
        password,
    })
}

fn validate_rest_url(prefix: &str, rest_url: &str) -> Result<()> {
    let field = format!("{prefix}.rest_url");
    if rest_url.trim().is_empty() {
        return Err(Error::missing_field(field));
    }

    let url = Url::parse(rest_url).map_err(|e| Error::invalid_value(&field, e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_value(
            field,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(())
}
