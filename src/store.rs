//! Tree Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! [`TreeViewHandle`] is the view side the sync adapter drives.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_sortable_tree::TreeModel;
use reactive_stores::Store;

use crate::models::{ProductSummary, TreeNode};
use crate::node_data::NodeAttrs;
use crate::sync::TreeWidget;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TreePageState {
    /// Loading indicator shown
    pub loading: bool,
    /// Tree as fetched, rendered by the nested variant
    pub tree: Vec<TreeNode>,
    /// Product lists currently shown, by category id
    pub open_products: HashMap<u32, Vec<ProductSummary>>,
}

pub type TreePageStore = Store<TreePageState>;

/// Reactive handle behind both tree variants
#[derive(Clone, Copy)]
pub struct TreeViewHandle {
    store: TreePageStore,
    /// Sortable widget state
    model: RwSignal<TreeModel<NodeAttrs>>,
    collapse_level: usize,
}

impl TreeViewHandle {
    pub fn new(collapse_level: usize) -> Self {
        Self {
            store: Store::new(TreePageState { loading: true, ..Default::default() }),
            model: RwSignal::new(TreeModel::default()),
            collapse_level,
        }
    }

    pub fn model(&self) -> RwSignal<TreeModel<NodeAttrs>> {
        self.model
    }

    pub fn is_loading(&self) -> bool {
        self.store.loading().get()
    }

    pub fn tree(&self) -> Vec<TreeNode> {
        self.store.tree().get()
    }

    /// Products shown under a category, None while collapsed
    pub fn products(&self, category_id: u32) -> Option<Vec<ProductSummary>> {
        self.store.open_products().read().get(&category_id).cloned()
    }
}

impl TreeWidget for TreeViewHandle {
    fn mount(&self, tree: &[TreeNode]) {
        let model = TreeModel::build(tree, |n| NodeAttrs::from(&n.data), |n| n.nodes.as_slice(), self.collapse_level);
        log::debug!("mounting tree widget with {} nodes", model.len());
        self.model.set(model);
        self.store.open_products().write().clear();
        self.store.tree().set(tree.to_vec());
    }

    fn set_loading(&self, loading: bool) {
        self.store.loading().set(loading);
    }

    fn show_products(&self, category_id: u32, products: &[ProductSummary]) {
        self.store.open_products().write().insert(category_id, products.to_vec());
    }

    fn hide_products(&self, category_id: u32) {
        self.store.open_products().write().remove(&category_id);
    }
}
