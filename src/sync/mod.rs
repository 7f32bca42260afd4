//! Tree Sync Adapter
//!
//! Bridges the generic sortable tree widget to the bridge endpoints that
//! persist category/product order. The server is the source of truth: the
//! adapter never commits an order change on its own, it only reports the
//! widget's moves and relabels state after a round trip.

mod moves;
mod products;


use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::BridgeApi;
use crate::config::{BridgeConfig, ProductListPolicy};
use crate::error::Failure;
use crate::models::{find_duplicate, ProductSummary, TreeNode};
use crate::notify::Notifier;

/// View handle the adapter drives
pub trait TreeWidget {
    /// Instantiate the widget for a freshly fetched tree
    fn mount(&self, tree: &[TreeNode]);

    fn set_loading(&self, loading: bool);

    /// Render a category's product list below its label
    fn show_products(&self, category_id: u32, products: &[ProductSummary]);

    fn hide_products(&self, category_id: u32);
}

/// Adapter settings taken from [`BridgeConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    pub product_lists: ProductListPolicy,
    pub reload_tree_on_move_failure: bool,
}

impl From<&BridgeConfig> for SyncOptions {
    fn from(config: &BridgeConfig) -> Self {
        Self {
            product_lists: config.product_list_policy(),
            reload_tree_on_move_failure: config.reload_tree_on_move_failure,
        }
    }
}

/// Client-side mirror of the server tree
#[derive(Debug, Default)]
struct SyncState {
    tree: Vec<TreeNode>,
    /// Categories whose product list is currently shown
    expanded: HashSet<u32>,
    /// Categories with a product fetch in flight
    fetching: HashSet<u32>,
}

/// Tree sync adapter with injected API, notifier and widget.
///
/// Cheap to clone; clones share one tree mirror. The mirror lock is never
/// held across an `.await`.
#[derive(Clone)]
pub struct TreeSync<A, N, W> {
    api: A,
    notifier: N,
    widget: W,
    options: SyncOptions,
    state: Arc<Mutex<SyncState>>,
}

impl<A, N, W> TreeSync<A, N, W>
where
    A: BridgeApi,
    N: Notifier,
    W: TreeWidget,
{
    pub fn new(api: A, notifier: N, widget: W, options: SyncOptions) -> Self {
        Self {
            api,
            notifier,
            widget,
            options,
            state: Arc::new(Mutex::new(SyncState::default())),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn state(&self) -> MutexGuard<'_, SyncState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current tree mirror
    #[cfg(test)]
    pub fn tree(&self) -> Vec<TreeNode> {
        self.state().tree.clone()
    }

    #[cfg(test)]
    pub fn is_expanded(&self, category_id: u32) -> bool {
        self.state().expanded.contains(&category_id)
    }

    /// Fetch the full tree and mount the widget on success.
    /// The loading indicator is hidden on every path.
    pub async fn load_tree(&self) {
        self.widget.set_loading(true);
        match self.api.fetch_category_tree().await {
            Ok(tree) => {
                log::info!("loaded category tree with {} root nodes", tree.len());
                if let Some((kind, id)) = find_duplicate(&tree) {
                    log::warn!("duplicate {} id {} in category tree", kind.as_str(), id);
                }
                {
                    let mut state = self.state();
                    state.tree = tree.clone();
                    state.expanded.clear();
                    state.fetching.clear();
                }
                self.widget.mount(&tree);
            }
            Err(err) => {
                log::error!("Error fetching category tree: {}", err);
                self.notifier.error(&Failure::TreeFetch.message(&err));
            }
        }
        self.widget.set_loading(false);
    }
}
