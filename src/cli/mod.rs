//! CLI module
//!
//! Command-line interface for running single engine operations.
//!
//! # Commands
//!
//! - `resource` - Fetch one SFG resource by key
//! - `list` - Fetch every page of an SFG resource listing
//! - `partner` - Look up an SFG trading partner
//! - `pem-partner` - Look up a PEM partner
//! - `credential` - Render the user-credential document

mod commands;
mod runner;

pub use commands::{Cli, Commands, EnvArg};
pub use runner::Runner;
