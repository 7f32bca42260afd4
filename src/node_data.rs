//! Node Data Mapping
//!
//! The one place that translates between [`NodeData`] and the `data-*`
//! attribute set a rendered node label carries. Every attribute written
//! here is read back here, so the two directions cannot drift apart.

use std::collections::BTreeMap;

use crate::error::{BridgeError, BridgeResult};
use crate::models::{NodeData, NodeType};

pub const ATTR_ID: &str = "id";
pub const ATTR_AFTER_CATEGORY_ID: &str = "after_category_id";
pub const ATTR_PARENT_CATEGORY_ID: &str = "parent_category_id";
pub const ATTR_TYPE: &str = "type";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_CATEGORY_ID: &str = "category_id";
pub const ATTR_SORT: &str = "sort";

/// Dataset keys in render order (`data-id`, `data-after_category_id`, ...)
pub const NODE_ATTRIBUTES: [&str; 7] = [
    ATTR_ID,
    ATTR_AFTER_CATEGORY_ID,
    ATTR_PARENT_CATEGORY_ID,
    ATTR_TYPE,
    ATTR_TITLE,
    ATTR_CATEGORY_ID,
    ATTR_SORT,
];

/// View-layer representation of a node: dataset values plus label text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeAttrs {
    values: BTreeMap<&'static str, String>,
    label: String,
}

impl NodeAttrs {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set or (with None) remove a dataset value
    pub fn set(&mut self, key: &'static str, value: Option<String>) {
        match value {
            Some(v) => {
                self.values.insert(key, v);
            }
            None => {
                self.values.remove(key);
            }
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Id and type without a full extraction, for cheap lookups in views
    pub fn node_ref(&self) -> Option<(NodeType, u32)> {
        let kind = NodeType::parse(self.get(ATTR_TYPE)?)?;
        let id = self.get(ATTR_ID)?.parse().ok()?;
        Some((kind, id))
    }
}

/// Visible label of a node
pub fn label_text(data: &NodeData) -> String {
    format!("{}: {}", data.title, data.id)
}

/// Write a record onto its view representation (`saveNodeData`)
pub fn save_node_data(attrs: &mut NodeAttrs, data: &NodeData) {
    attrs.set(ATTR_ID, Some(data.id.to_string()));
    attrs.set(ATTR_AFTER_CATEGORY_ID, data.after_category_id.map(|v| v.to_string()));
    attrs.set(ATTR_PARENT_CATEGORY_ID, data.parent_category_id.map(|v| v.to_string()));
    attrs.set(ATTR_TYPE, Some(data.type_of.as_str().to_string()));
    attrs.set(ATTR_TITLE, Some(data.title.clone()));
    attrs.set(ATTR_CATEGORY_ID, data.category_id.map(|v| v.to_string()));
    attrs.set(ATTR_SORT, data.sort.map(|v| v.to_string()));
    attrs.label = label_text(data);
}

/// Read a record back from its view representation (`getNodeData`)
pub fn extract_node_data(attrs: &NodeAttrs) -> BridgeResult<NodeData> {
    let type_value = required(attrs, ATTR_TYPE)?;
    let type_of = NodeType::parse(type_value).ok_or_else(|| BridgeError::Attribute {
        key: ATTR_TYPE,
        reason: format!("unknown node type {type_value:?}"),
    })?;

    Ok(NodeData {
        id: parse(ATTR_ID, required(attrs, ATTR_ID)?)?,
        after_category_id: optional(attrs, ATTR_AFTER_CATEGORY_ID)?,
        parent_category_id: optional(attrs, ATTR_PARENT_CATEGORY_ID)?,
        type_of,
        title: attrs.get(ATTR_TITLE).unwrap_or_default().to_string(),
        category_id: optional(attrs, ATTR_CATEGORY_ID)?,
        sort: optional(attrs, ATTR_SORT)?,
    })
}

impl From<&NodeData> for NodeAttrs {
    fn from(data: &NodeData) -> Self {
        let mut attrs = NodeAttrs::default();
        save_node_data(&mut attrs, data);
        attrs
    }
}

fn required<'a>(attrs: &'a NodeAttrs, key: &'static str) -> BridgeResult<&'a str> {
    attrs.get(key).ok_or_else(|| BridgeError::Attribute { key, reason: "missing".to_string() })
}

fn optional<N: std::str::FromStr>(attrs: &NodeAttrs, key: &'static str) -> BridgeResult<Option<N>> {
    attrs.get(key).map(|value| parse(key, value)).transpose()
}

fn parse<N: std::str::FromStr>(key: &'static str, value: &str) -> BridgeResult<N> {
    value.parse().map_err(|_| BridgeError::Attribute {
        key,
        reason: format!("not a number: {value:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_category() {
        let mut data = NodeData::category(12, "Schuhe");
        data.parent_category_id = Some(3);
        data.after_category_id = Some(11);

        let attrs = NodeAttrs::from(&data);
        assert_eq!(extract_node_data(&attrs).unwrap(), data);
        assert_eq!(attrs.label(), "Schuhe: 12");
    }

    #[test]
    fn test_round_trip_product() {
        let data = NodeData::product(40, "Stiefel", 12, Some(-2));
        let attrs = NodeAttrs::from(&data);

        assert_eq!(attrs.get(ATTR_TYPE), Some("product"));
        assert_eq!(attrs.get(ATTR_CATEGORY_ID), Some("12"));
        assert_eq!(extract_node_data(&attrs).unwrap(), data);
    }

    #[test]
    fn test_save_overwrites_and_clears() {
        let mut attrs = NodeAttrs::from(&NodeData::product(1, "Alt", 2, Some(5)));
        let replacement = NodeData::category(9, "Neu");
        save_node_data(&mut attrs, &replacement);

        assert_eq!(attrs.get(ATTR_SORT), None);
        assert_eq!(attrs.get(ATTR_CATEGORY_ID), None);
        assert_eq!(attrs.label(), "Neu: 9");
        assert_eq!(extract_node_data(&attrs).unwrap(), replacement);
    }

    #[test]
    fn test_every_attribute_is_written() {
        let mut data = NodeData::product(1, "P", 2, Some(3));
        data.after_category_id = Some(4);
        data.parent_category_id = Some(5);
        let attrs = NodeAttrs::from(&data);

        for key in NODE_ATTRIBUTES {
            assert!(attrs.get(key).is_some(), "{key} not written");
        }
    }

    #[test]
    fn test_missing_id_is_an_error() {
        let mut attrs = NodeAttrs::from(&NodeData::category(1, "A"));
        attrs.set(ATTR_ID, None);

        let err = extract_node_data(&attrs).unwrap_err();
        assert!(matches!(err, BridgeError::Attribute { key: ATTR_ID, .. }));
    }

    #[test]
    fn test_bad_values_are_errors() {
        let mut attrs = NodeAttrs::from(&NodeData::category(1, "A"));
        attrs.set(ATTR_SORT, Some("undefined".to_string()));
        assert!(extract_node_data(&attrs).is_err());

        let mut attrs = NodeAttrs::from(&NodeData::category(1, "A"));
        attrs.set(ATTR_TYPE, Some("folder".to_string()));
        assert!(extract_node_data(&attrs).is_err());
    }

    #[test]
    fn test_node_ref() {
        let attrs = NodeAttrs::from(&NodeData::product(8, "P", 1, None));
        assert_eq!(attrs.node_ref(), Some((NodeType::Product, 8)));
        assert_eq!(NodeAttrs::default().node_ref(), None);
    }
}
