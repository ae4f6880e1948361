// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # SFG to PEM migrator
//!
//! Reads partner configuration out of a Sterling File Gateway (SFG)
//! installation so it can be migrated into Partner Engagement Manager (PEM).
//!
//! ## Features
//!
//! - **Dual environment**: production and test SFG instances, never mixed
//! - **Range pagination**: listings larger than one page are assembled from
//!   sequential `_range` calls driven by `Content-Range`
//! - **Error normalization**: failed calls report the server's error
//!   description, the raw body, or the status line
//! - **Credential documents**: user-credential XML rendered from a template
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sfg2pem::{load_configuration, Importer, Result, SfgEnvironment};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let config = load_configuration("sfg2pem.yaml")?;
//!     let importer = Importer::from_config(&config)?;
//!
//!     let partners = importer
//!         .fetch_resource_list(SfgEnvironment::Production, "tradingpartners/")
//!         .await?;
//!     for record in partners.records()? {
//!         println!("{record}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Importer                            │
//! │  fetch_resource()  fetch_resource_list()  fetch_*_partner()  │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────┬───────────────┼───────────────┬───────────────┐
//! │ Environment │     HTTP      │  Pagination   │    Decode     │
//! ├─────────────┼───────────────┼───────────────┼───────────────┤
//! │ Production  │ Basic auth    │ Content-Range │ JSON errors   │
//! │ Test        │ TLS settings  │ _range param  │ XML errors    │
//! │ PEM         │ Typed errors  │               │ Status line   │
//! └─────────────┴───────────────┴───────────────┴───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the migrator
pub mod error;

/// Response value and wire constants
pub mod types;

/// Owned XML document tree
pub mod xml;

/// Credentials and basic authentication
pub mod auth;

/// YAML configuration
pub mod config;

/// Environment selection
pub mod environment;

/// HTTP transport
pub mod http;

/// Error response decoding
pub mod decode;

/// Range pagination
pub mod pagination;

/// Template interpolation
pub mod template;

/// User-credential documents
pub mod credential;

/// Resource retrieval engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result, TransportErrorKind};
pub use types::*;

// Re-export commonly used types
pub use config::{load_configuration, load_configuration_from_str, Configuration};
pub use credential::CredentialTransformer;
pub use engine::{Importer, ResourceList};
pub use environment::SfgEnvironment;
pub use http::{HttpClient, ResourceClient};
pub use xml::Document;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
