//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{load_configuration, Configuration};
use crate::credential::CredentialTransformer;
use crate::engine::Importer;
use crate::environment::SfgEnvironment;
use crate::error::Result;
use crate::types::ApiResponse;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Resource { env, uri, key } => {
                self.resource(&config, (*env).into(), uri, key).await
            }
            Commands::List {
                env,
                uri,
                records,
                pretty,
            } => {
                self.list(&config, (*env).into(), uri, *records, *pretty)
                    .await
            }
            Commands::Partner { env, key } => self.partner(&config, (*env).into(), key).await,
            Commands::PemPartner { key } => self.pem_partner(&config, key).await,
            Commands::Credential {
                configuration_id,
                prod_username,
                test_username,
            } => self.credential(&config, configuration_id, prod_username, test_username),
        }
    }

    /// Load configuration
    fn load_config(&self) -> Result<Configuration> {
        debug!("Loading configuration from {}", self.cli.config.display());
        load_configuration(&self.cli.config)
    }

    /// Fetch one resource
    async fn resource(
        &self,
        config: &Configuration,
        env: SfgEnvironment,
        uri: &str,
        key: &str,
    ) -> Result<()> {
        let importer = Importer::from_config(config)?;
        let response = importer.fetch_resource(env, uri, key).await?;
        println!("{}", response.body());
        Ok(())
    }

    /// Fetch a listing
    async fn list(
        &self,
        config: &Configuration,
        env: SfgEnvironment,
        uri: &str,
        records: bool,
        pretty: bool,
    ) -> Result<()> {
        let importer = Importer::from_config(config)?;
        let list = importer.fetch_resource_list(env, uri).await?;

        if !records {
            for page in &list {
                println!("{}", page.body());
            }
            return Ok(());
        }

        for record in list.records()? {
            let line = if pretty {
                serde_json::to_string_pretty(&record)?
            } else {
                serde_json::to_string(&record)?
            };
            println!("{line}");
        }
        Ok(())
    }

    /// Look up an SFG trading partner
    async fn partner(&self, config: &Configuration, env: SfgEnvironment, key: &str) -> Result<()> {
        let importer = Importer::from_config(config)?;
        let response = importer.fetch_sfg_partner(env, key).await?;
        Self::print_response(&response);
        Ok(())
    }

    /// Look up a PEM partner
    async fn pem_partner(&self, config: &Configuration, key: &str) -> Result<()> {
        let importer = Importer::from_config(config)?;
        let response = importer.fetch_pem_partner(key).await?;
        Self::print_response(&response);
        Ok(())
    }

    /// Render the credential document
    fn credential(
        &self,
        config: &Configuration,
        configuration_id: &str,
        prod_username: &str,
        test_username: &str,
    ) -> Result<()> {
        let transformer = CredentialTransformer::from_config(config)?;
        let document = transformer.transform(configuration_id, prod_username, test_username)?;
        println!("{}", document.to_xml()?);
        Ok(())
    }

    /// Partner lookups are unchecked, so the status goes out with the body
    fn print_response(response: &ApiResponse) {
        response.log_summary();
        println!("{}", response.status_line());
        println!("{}", response.body());
    }
}
