//! Nested Category Tree
//!
//! Read-only variant: the fetched tree rendered by one recursive function.

use leptos::prelude::*;

use crate::components::{AppSync, NodeLabel};
use crate::models::TreeNode;
use crate::node_data::NodeAttrs;
use crate::store::TreeViewHandle;

pub fn nested_tree(sync: AppSync, tree_view: TreeViewHandle) -> AnyView {
    view! {
        <ul class="nested-tree">
            {move || {
                tree_view
                    .tree()
                    .into_iter()
                    .map(|node| render_node(node, sync.clone(), tree_view))
                    .collect_view()
            }}
        </ul>
    }
    .into_any()
}

fn render_node(node: TreeNode, sync: AppSync, tree_view: TreeViewHandle) -> AnyView {
    let attrs = NodeAttrs::from(&node.data);
    let children = (!node.nodes.is_empty()).then(|| {
        let items = node
            .nodes
            .into_iter()
            .map(|child| render_node(child, sync.clone(), tree_view))
            .collect_view();
        view! { <ul>{items}</ul> }
    });

    view! {
        <li>
            <NodeLabel attrs=attrs sync=sync tree_view=tree_view />
            {children}
        </li>
    }
    .into_any()
}
