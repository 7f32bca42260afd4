//! Frontend Models
//!
//! Data structures matching the bridge REST payloads.

use serde::{Deserialize, Serialize};

/// Kind of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Category,
    Product,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Category => "category",
            NodeType::Product => "product",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "category" => Some(NodeType::Category),
            "product" => Some(NodeType::Product),
            _ => None,
        }
    }
}

/// Domain fields of one category or product node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: u32,
    #[serde(default)]
    pub after_category_id: Option<u32>,
    #[serde(default)]
    pub parent_category_id: Option<u32>,
    pub type_of: NodeType,
    pub title: String,
    /// Owning category (product nodes only)
    #[serde(default)]
    pub category_id: Option<u32>,
    /// Ordering key (product nodes only)
    #[serde(default)]
    pub sort: Option<i64>,
}

impl NodeData {
    pub fn category(id: u32, title: &str) -> Self {
        Self {
            id,
            after_category_id: None,
            parent_category_id: None,
            type_of: NodeType::Category,
            title: title.to_string(),
            category_id: None,
            sort: None,
        }
    }

    pub fn product(id: u32, title: &str, category_id: u32, sort: Option<i64>) -> Self {
        Self {
            id,
            after_category_id: None,
            parent_category_id: None,
            type_of: NodeType::Product,
            title: title.to_string(),
            category_id: Some(category_id),
            sort,
        }
    }

    /// Same node: ids are only unique per type
    pub fn same_node(&self, other: &NodeData) -> bool {
        self.id == other.id && self.type_of == other.type_of
    }

    pub fn is_category(&self) -> bool {
        self.type_of == NodeType::Category
    }
}

/// One entry of the category tree as served by the bridge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub data: NodeData,
    #[serde(default)]
    pub nodes: Vec<TreeNode>,
    /// Lazily fetched product list (category nodes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductSummary>>,
}

impl TreeNode {
    pub fn new(data: NodeData, nodes: Vec<TreeNode>) -> Self {
        Self { data, nodes, products: None }
    }
}

/// Find a category anywhere in the tree
pub fn find_category_mut(tree: &mut [TreeNode], category_id: u32) -> Option<&mut TreeNode> {
    for node in tree.iter_mut() {
        if node.data.is_category() && node.data.id == category_id {
            return Some(node);
        }
        if let Some(found) = find_category_mut(&mut node.nodes, category_id) {
            return Some(found);
        }
    }
    None
}

pub fn find_category(tree: &[TreeNode], category_id: u32) -> Option<&TreeNode> {
    for node in tree {
        if node.data.is_category() && node.data.id == category_id {
            return Some(node);
        }
        if let Some(found) = find_category(&node.nodes, category_id) {
            return Some(found);
        }
    }
    None
}

/// First (type, id) pair that occurs more than once
pub fn find_duplicate(tree: &[TreeNode]) -> Option<(NodeType, u32)> {
    fn walk(nodes: &[TreeNode], seen: &mut std::collections::HashSet<(NodeType, u32)>) -> Option<(NodeType, u32)> {
        for node in nodes {
            let key = (node.data.type_of, node.data.id);
            if !seen.insert(key) {
                return Some(key);
            }
            if let Some(dup) = walk(&node.nodes, seen) {
                return Some(dup);
            }
        }
        None
    }
    walk(tree, &mut std::collections::HashSet::new())
}

/// Product listed under an expanded category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: u32,
    pub name: String,
    #[serde(rename = "erp_nr")]
    pub erp_number: String,
    #[serde(default)]
    pub sort: Option<i64>,
}

/// Body of `/api/products/get_by_category/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub status: String,
    #[serde(default)]
    pub products: Vec<ProductSummary>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Status envelope used by write endpoints and panel actions
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Message for a toast, the bare status when the server sent none
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.status)
    }
}

/// One page of sw6 order ids
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderIdPage {
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(default)]
    pub total: usize,
}

/// Body of `/api/orders/sw6/get_open_order_ids`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpenOrdersResponse {
    #[serde(flatten)]
    pub report: StatusResponse,
    #[serde(default)]
    pub order_ids: OrderIdPage,
}

pub const STATUS_SUCCESS: &str = "success";

/// Body of `/api/category/set_assoc_sort`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveRequest {
    pub moved: NodeData,
    pub source: Option<NodeData>,
    pub target: Option<NodeData>,
    #[serde(rename = "targetNextNode")]
    pub target_next_node: Option<NodeData>,
}

/// Body of `/api/product/update_sort`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SortUpdate {
    pub product_id: u32,
    pub sort: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_orders_response() {
        let json = r#"{"status": "success", "message": "2 offene Bestellungen", "order_ids": {"data": ["a1f0", "b2e9"], "total": 2}}"#;
        let response: OpenOrdersResponse = serde_json::from_str(json).unwrap();
        assert!(response.report.is_success());
        assert_eq!(response.report.message_text(), "2 offene Bestellungen");
        assert_eq!(response.order_ids.data, vec!["a1f0", "b2e9"]);

        let response: OpenOrdersResponse = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert_eq!(response.report.message_text(), "error");
        assert!(response.order_ids.data.is_empty());
    }

    #[test]
    fn test_tree_node_from_json() {
        let json = r#"[
            {"data": {"id": 1, "type_of": "category", "title": "Shoes", "parent_category_id": null},
             "nodes": [
                {"data": {"id": 7, "type_of": "product", "title": "Boot", "category_id": 1, "sort": 3}}
             ]},
            {"data": {"id": 2, "type_of": "category", "title": "Hats", "after_category_id": 1}}
        ]"#;
        let tree: Vec<TreeNode> = serde_json::from_str(json).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].nodes[0].data, NodeData::product(7, "Boot", 1, Some(3)));
        assert_eq!(tree[1].data.after_category_id, Some(1));
        assert!(tree[1].nodes.is_empty());
        assert!(tree[1].products.is_none());
    }

    #[test]
    fn test_move_request_field_names() {
        let request = MoveRequest {
            moved: NodeData::category(3, "Socks"),
            source: None,
            target: Some(NodeData::category(1, "Shoes")),
            target_next_node: None,
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["moved"]["type_of"], "category");
        assert_eq!(value["target"]["id"], 1);
        assert!(value["source"].is_null());
        assert!(value.get("targetNextNode").is_some());
    }

    #[test]
    fn test_product_summary_erp_nr() {
        let json = r#"{"status": "success", "products": [{"id": 4, "name": "Boot", "erp_nr": "A-100"}]}"#;
        let response: ProductsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.products[0].erp_number, "A-100");
        assert_eq!(response.products[0].sort, None);
    }

    #[test]
    fn test_find_category_is_recursive() {
        let mut tree = vec![TreeNode::new(
            NodeData::category(1, "Root"),
            vec![
                TreeNode::new(NodeData::product(5, "Boot", 1, None), vec![]),
                TreeNode::new(NodeData::category(5, "Nested"), vec![]),
            ],
        )];

        assert_eq!(find_category(&tree, 5).map(|n| n.data.title.as_str()), Some("Nested"));
        assert!(find_category_mut(&mut tree, 9).is_none());
    }

    #[test]
    fn test_find_duplicate_respects_type() {
        let tree = vec![
            TreeNode::new(NodeData::category(1, "A"), vec![TreeNode::new(NodeData::product(1, "P", 1, None), vec![])]),
        ];
        assert_eq!(find_duplicate(&tree), None);

        let tree = vec![
            TreeNode::new(NodeData::category(1, "A"), vec![]),
            TreeNode::new(NodeData::category(2, "B"), vec![TreeNode::new(NodeData::category(1, "A again"), vec![])]),
        ];
        assert_eq!(find_duplicate(&tree), Some((NodeType::Category, 1)));
    }
}
