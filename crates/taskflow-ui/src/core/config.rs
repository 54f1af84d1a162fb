//! Site configuration embedded at build time.
//!
//! # Design
//! - The JSON document ships inside the wasm bundle; there is no runtime fetch.
//! - Validation runs once at start-up so views can rely on non-empty fields.
//! - Callers fall back to [`SiteConfig::default`] when loading fails.

use crate::core::metadata::{LayoutMetadata, PageMetadata, TITLE_PLACEHOLDER};
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

const EMBEDDED_CONFIG: &str = include_str!("../../config/site.json");

/// Product name used when configuration is unavailable.
pub const DEFAULT_BRAND: &str = "TaskFlow Pro";

/// Element id the app mounts into when present.
pub const DEFAULT_ROOT_ELEMENT_ID: &str = "root";

/// Page key for the dashboard route.
pub const DASHBOARD_PAGE: &str = "dashboard";

/// Page key for unrecognised routes.
pub const NOT_FOUND_PAGE: &str = "not-found";

/// Errors raised while loading the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be decoded.
    #[error("site configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A required string field was blank.
    #[error("site configuration field `{field}` must not be empty")]
    EmptyField {
        /// Dotted path of the offending field.
        field: &'static str,
    },
    /// A title template lacks the page-title placeholder.
    #[error("title template `{template}` is missing the `%s` placeholder")]
    MissingPlaceholder {
        /// Template as configured.
        template: String,
    },
}

/// Third-party script appended to every page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EmbedScript {
    /// Script URL.
    pub src: String,
    /// Load as an ES module.
    #[serde(default)]
    pub module: bool,
}

/// Top-level site configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    /// Product name shown in the sidebar footer and welcome heading.
    pub brand: String,
    /// Mount point id.
    #[serde(default = "default_root_element_id")]
    pub root_element_id: String,
    /// Root layout metadata.
    pub layout: LayoutMetadata,
    /// Per-page metadata keyed by page name.
    #[serde(default)]
    pub pages: BTreeMap<String, PageMetadata>,
    /// Optional third-party script.
    #[serde(default)]
    pub embed_script: Option<EmbedScript>,
}

fn default_root_element_id() -> String {
    DEFAULT_ROOT_ELEMENT_ID.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            root_element_id: default_root_element_id(),
            layout: LayoutMetadata::for_brand(DEFAULT_BRAND),
            pages: BTreeMap::new(),
            embed_script: None,
        }
    }
}

impl SiteConfig {
    /// Decode and validate the configuration bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the embedded document is malformed or invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    /// Decode and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is malformed or invalid.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Metadata declared for a page key, if any.
    #[must_use]
    pub fn page(&self, key: &str) -> Option<&PageMetadata> {
        self.pages.get(key)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.brand.trim().is_empty() {
            return Err(ConfigError::EmptyField { field: "brand" });
        }
        if self.root_element_id.trim().is_empty() {
            return Err(ConfigError::EmptyField {
                field: "root_element_id",
            });
        }
        if self
            .embed_script
            .as_ref()
            .is_some_and(|script| script.src.trim().is_empty())
        {
            return Err(ConfigError::EmptyField {
                field: "embed_script.src",
            });
        }
        for template in [
            &self.layout.title.template,
            &self.layout.open_graph.title.template,
        ] {
            if !template.contains(TITLE_PLACEHOLDER) {
                return Err(ConfigError::MissingPlaceholder {
                    template: template.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metadata::resolve;

    #[test]
    fn embedded_config_loads() {
        let config = SiteConfig::load().expect("embedded config should be valid");
        assert_eq!(config.brand, "TaskFlow Pro");
        assert_eq!(config.root_element_id, "root");
        assert!(config.page(DASHBOARD_PAGE).is_some());
        assert!(config.embed_script.as_ref().is_some_and(|script| script.module));
    }

    #[test]
    fn embedded_dashboard_metadata_resolves() {
        let config = SiteConfig::load().expect("embedded config should be valid");
        let resolved = resolve(&config.layout, config.page(DASHBOARD_PAGE));
        assert_eq!(
            resolved.title,
            "TaskFlow Pro | Task Management Dashboard - TaskFlow Pro"
        );
        assert_eq!(resolved.og_type, None);
        assert!(resolved.keywords.starts_with("task management dashboard"));
    }

    #[test]
    fn not_found_page_replaces_dashboard_title() {
        let config = SiteConfig::load().expect("embedded config should be valid");
        let dashboard = resolve(&config.layout, config.page(DASHBOARD_PAGE));
        let missing = resolve(&config.layout, config.page(NOT_FOUND_PAGE));
        assert_eq!(missing.title, "TaskFlow Pro | Page Not Found");
        assert_ne!(missing.title, dashboard.title);
        assert_eq!(missing.keywords, config.layout.keywords);
    }

    #[test]
    fn blank_brand_is_rejected() {
        let raw = r#"{
            "brand": " ",
            "layout": {
                "title": { "default": "X", "template": "X | %s" },
                "description": "",
                "keywords": "",
                "open_graph": { "title": { "default": "X", "template": "X | %s" } }
            }
        }"#;
        let err = SiteConfig::from_json(raw).expect_err("brand is required");
        assert!(matches!(err, ConfigError::EmptyField { field: "brand" }));
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let raw = r#"{
            "brand": "X",
            "layout": {
                "title": { "default": "X", "template": "X" },
                "description": "",
                "keywords": "",
                "open_graph": { "title": { "default": "X", "template": "X | %s" } }
            }
        }"#;
        let err = SiteConfig::from_json(raw).expect_err("placeholder is required");
        assert!(err.to_string().contains("placeholder"));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = SiteConfig::from_json("{").expect_err("truncated document");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn default_config_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(resolve(&config.layout, None).title, DEFAULT_BRAND);
    }
}
