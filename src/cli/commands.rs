//! CLI commands and argument parsing

use crate::environment::SfgEnvironment;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SFG to PEM migrator CLI
#[derive(Parser, Debug)]
#[command(name = "sfg2pem")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true, default_value = "sfg2pem.yaml")]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a single resource as XML
    Resource {
        /// SFG environment to read from
        #[arg(short, long, value_enum)]
        env: EnvArg,

        /// Resource URI relative to the REST base URL, e.g. `mailboxes/`
        #[arg(short, long)]
        uri: String,

        /// Resource key appended to the URI
        #[arg(short, long)]
        key: String,
    },

    /// Fetch all pages of a resource listing as JSON
    List {
        /// SFG environment to read from
        #[arg(short, long, value_enum)]
        env: EnvArg,

        /// Resource URI relative to the REST base URL
        #[arg(short, long)]
        uri: String,

        /// Print the flattened records instead of raw pages
        #[arg(long)]
        records: bool,

        /// Pretty-print JSON records
        #[arg(long, requires = "records")]
        pretty: bool,
    },

    /// Look up an SFG trading partner
    Partner {
        /// SFG environment to read from
        #[arg(short, long, value_enum)]
        env: EnvArg,

        /// Partner key
        key: String,
    },

    /// Look up a PEM partner
    PemPartner {
        /// Partner key
        key: String,
    },

    /// Render the user-credential document
    Credential {
        /// Configuration id the credentials belong to
        #[arg(long)]
        configuration_id: String,

        /// Production user name
        #[arg(long)]
        prod_username: String,

        /// Test user name
        #[arg(long)]
        test_username: String,
    },
}

/// SFG environment selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EnvArg {
    /// Production instance
    #[value(alias = "prod")]
    Production,
    /// Test instance
    Test,
}

impl From<EnvArg> for SfgEnvironment {
    fn from(arg: EnvArg) -> Self {
        match arg {
            EnvArg::Production => Self::Production,
            EnvArg::Test => Self::Test,
        }
    }
}
