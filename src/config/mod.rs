//! Configuration module
//!
//! Loads the migrator configuration from YAML.
//!
//! # Overview
//!
//! The configuration names three endpoints, each with a REST URL, a host,
//! a username and a password:
//! - `sfg.production` - the production SFG instance
//! - `sfg.test` - the test SFG instance
//! - `pem` - the PEM target
//!
//! A password may be given inline or through `password_env`, the name of
//! an environment variable holding it.

mod parser;
mod types;

pub use parser::{load_configuration, load_configuration_from_str};
pub use types::{
    Configuration, ConfigurationDefinition, EndpointConfig, EndpointDefinition, HttpSettings,
    SfgConfig, SfgDefinition,
};
