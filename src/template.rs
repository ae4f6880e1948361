//! Template interpolation for credential documents
//!
//! Handles `{{ variable }}` interpolation in XML templates.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Regex for matching template variables: {{ variable }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}").expect("template regex is valid")
});

/// Named values available to a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    vars: BTreeMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Get a variable
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

/// Render a template string with the given context
///
/// Every variable must be defined; all undefined names are reported at once.
pub fn render(template: &str, ctx: &TemplateContext) -> Result<String> {
    let mut errors = Vec::new();

    let result = TEMPLATE_REGEX.replace_all(template, |cap: &regex::Captures<'_>| {
        let name = &cap[1];
        match ctx.get(name) {
            Some(value) => value.to_string(),
            None => {
                errors.push(name.to_string());
                String::new()
            }
        }
    });

    if errors.is_empty() {
        Ok(result.into_owned())
    } else {
        Err(Error::undefined_var(errors.join(", ")))
    }
}

/// Check if a string contains template variables
pub fn has_templates(s: &str) -> bool {
    TEMPLATE_REGEX.is_match(s)
}

/// Extract all variable names from a template
pub fn extract_variables(template: &str) -> Vec<String> {
    TEMPLATE_REGEX
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> TemplateContext {
        let mut ctx = TemplateContext::new();
        ctx.set("configurationId", "cfg-42").set("prodType", "PROD");
        ctx
    }

    #[test]
    fn test_simple_substitution() {
        let result = render("<id>{{ configurationId }}</id>", &ctx()).unwrap();
        assert_eq!(result, "<id>cfg-42</id>");
    }

    #[test]
    fn test_repeated_variable() {
        let result = render("{{prodType}}/{{ prodType }}", &ctx()).unwrap();
        assert_eq!(result, "PROD/PROD");
    }

    #[test]
    fn test_undefined_variables_reported_together() {
        let err = render("{{ missing }} {{ configurationId }} {{ other }}", &ctx()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Undefined variable in template: missing, other"
        );
    }

    #[test]
    fn test_no_templates() {
        let result = render("plain <a>pem</a>", &ctx()).unwrap();
        assert_eq!(result, "plain <a>pem</a>");
        assert!(!has_templates("plain"));
        assert!(!has_templates("{ not a template }"));
        assert!(has_templates("x {{ y }} z"));
    }

    #[test]
    fn test_empty_value() {
        let mut ctx = TemplateContext::new();
        ctx.set("passphrase", "");
        assert_eq!(render("<p>{{ passphrase }}</p>", &ctx).unwrap(), "<p></p>");
    }

    #[test]
    fn test_extract_variables() {
        let vars = extract_variables("{{ a }} and {{b}} and {{ a }}");
        assert_eq!(vars, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_whitespace_in_template() {
        assert_eq!(render("{{configurationId}}", &ctx()).unwrap(), "cfg-42");
        assert_eq!(render("{{  configurationId  }}", &ctx()).unwrap(), "cfg-42");
    }
}
