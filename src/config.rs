//! Runtime Configuration
//!
//! Read from an inline `<script id="bridge-config" type="application/json">`
//! block of the host page. Every field has a default, so the block is optional.

use log::LevelFilter;
use serde::Deserialize;

use crate::error::{BridgeError, BridgeResult};

pub const CONFIG_ELEMENT_ID: &str = "bridge-config";

/// Which tree component renders the category hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeVariant {
    /// Drag-and-drop widget
    #[default]
    Sortable,
    /// Read-only nested list from a single tree root
    Nested,
}

impl TreeVariant {
    pub fn default_product_lists(&self) -> ProductListPolicy {
        match self {
            TreeVariant::Sortable => ProductListPolicy::Cached,
            TreeVariant::Nested => ProductListPolicy::AlwaysRefetch,
        }
    }
}

/// Whether reopening a category reuses its fetched product list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductListPolicy {
    Cached,
    AlwaysRefetch,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Prefix for every API path, empty for same-origin
    pub api_base: String,
    pub toast_ttl_ms: u32,
    pub tree_variant: TreeVariant,
    /// Overrides the variant's default
    pub product_lists: Option<ProductListPolicy>,
    /// Tree depth from which nodes start collapsed
    pub init_collapse_level: usize,
    /// Re-fetch the tree after the server rejected a move
    pub reload_tree_on_move_failure: bool,
    pub confirm_move_prompt: String,
    pub log_level: LevelFilter,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            toast_ttl_ms: 10_000,
            tree_variant: TreeVariant::default(),
            product_lists: None,
            init_collapse_level: 1,
            reload_tree_on_move_failure: false,
            confirm_move_prompt: "Wirklich verschieben?".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl BridgeConfig {
    pub fn from_json(json: &str) -> BridgeResult<Self> {
        serde_json::from_str(json).map_err(|e| BridgeError::Config(e.to_string()))
    }

    /// Config embedded in the current document, defaults when absent
    pub fn from_document() -> BridgeResult<Self> {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }

    pub fn product_list_policy(&self) -> ProductListPolicy {
        self.product_lists.unwrap_or_else(|| self.tree_variant.default_product_lists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = BridgeConfig::from_json("{}").unwrap();
        assert_eq!(config, BridgeConfig::default());
        assert_eq!(config.toast_ttl_ms, 10_000);
        assert_eq!(config.product_list_policy(), ProductListPolicy::Cached);
    }

    #[test]
    fn test_nested_variant_refetches_by_default() {
        let config = BridgeConfig::from_json(r#"{"tree_variant": "nested"}"#).unwrap();
        assert_eq!(config.product_list_policy(), ProductListPolicy::AlwaysRefetch);

        let config = BridgeConfig::from_json(r#"{"tree_variant": "nested", "product_lists": "cached"}"#).unwrap();
        assert_eq!(config.product_list_policy(), ProductListPolicy::Cached);
    }

    #[test]
    fn test_partial_config() {
        let config = BridgeConfig::from_json(
            r#"{"api_base": "https://bridge.local", "log_level": "debug", "reload_tree_on_move_failure": true}"#,
        )
        .unwrap();
        assert_eq!(config.api_base, "https://bridge.local");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.reload_tree_on_move_failure);
        assert_eq!(config.init_collapse_level, 1);
    }

    #[test]
    fn test_invalid_config() {
        let err = BridgeConfig::from_json(r#"{"tree_variant": "flat"}"#).unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }
}
