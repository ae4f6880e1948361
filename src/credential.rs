//! User credential documents for PEM
//!
//! Renders the `userCredential.xml` template for a remote configuration and
//! parses the result into a [`Document`]. The template is read from the
//! configured template directory, or the built-in one is used.

use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::template::{self, TemplateContext};
use crate::xml::Document;
use quick_xml::escape::escape;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File name looked up in the template directory
pub const USER_CREDENTIAL_TEMPLATE: &str = "userCredential.xml";

/// Environment marker for production credentials
pub const PROD_TYPE: &str = "PROD";

/// Environment marker for test credentials
pub const TEST_TYPE: &str = "TEST";

/// Variables a credential template may reference
pub const TEMPLATE_PARAMETERS: [&str; 6] = [
    "configurationId",
    "prodType",
    "testType",
    "prodUsername",
    "testUsername",
    "passphrase",
];

const BUILTIN_TEMPLATE: &str = include_str!("../templates/userCredential.xml");

/// Builds user credential documents from a template
#[derive(Debug, Clone)]
pub struct CredentialTransformer {
    template: String,
}

impl Default for CredentialTransformer {
    fn default() -> Self {
        Self {
            template: BUILTIN_TEMPLATE.to_string(),
        }
    }
}

impl CredentialTransformer {
    /// Transformer using the built-in template
    pub fn new() -> Self {
        Self::default()
    }

    /// Transformer for the configured template directory
    pub fn from_config(config: &Configuration) -> Result<Self> {
        match &config.templates_dir {
            Some(dir) => Self::from_file(dir.join(USER_CREDENTIAL_TEMPLATE)),
            None => Ok(Self::new()),
        }
    }

    /// Load a template file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let template = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;
        Self::with_template(template)
    }

    /// Use a template string
    ///
    /// Fails when the template references a variable outside
    /// [`TEMPLATE_PARAMETERS`].
    pub fn with_template(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        let unknown: Vec<String> = template::extract_variables(&template)
            .into_iter()
            .filter(|v| !TEMPLATE_PARAMETERS.contains(&v.as_str()))
            .collect();

        if !unknown.is_empty() {
            return Err(Error::template(format!(
                "unknown parameters in credential template: {}",
                unknown.join(", ")
            )));
        }

        if !template::has_templates(&template) {
            warn!("Credential template has no parameters; every document will be identical");
        }

        Ok(Self { template })
    }

    /// Render and parse the credential document
    ///
    /// The same inputs always produce the same document.
    pub fn transform(
        &self,
        configuration_id: &str,
        prod_username: &str,
        test_username: &str,
    ) -> Result<Document> {
        let mut ctx = TemplateContext::new();
        ctx.set("configurationId", escape(configuration_id))
            .set("prodType", PROD_TYPE)
            .set("testType", TEST_TYPE)
            .set("prodUsername", escape(prod_username))
            .set("testUsername", escape(test_username))
            .set("passphrase", "");

        let xml = template::render(&self.template, &ctx)?;
        Document::parse(&xml)
    }
}
