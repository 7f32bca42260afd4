//! Product Lists
//!
//! Lazy per-category product expansion and inline sort editing.

use super::{TreeSync, TreeWidget};
use crate::api::BridgeApi;
use crate::config::ProductListPolicy;
use crate::error::Failure;
use crate::models::{find_category, find_category_mut, SortUpdate};
use crate::notify::Notifier;

impl<A, N, W> TreeSync<A, N, W>
where
    A: BridgeApi,
    N: Notifier,
    W: TreeWidget,
{
    /// Info control of a category: collapse when open, otherwise show its
    /// products, fetching them unless a cached list may be reused.
    /// Activations while the category's fetch is pending are ignored.
    pub async fn toggle_products(&self, category_id: u32) {
        let cached = {
            let mut state = self.state();
            if state.expanded.remove(&category_id) {
                drop(state);
                self.widget.hide_products(category_id);
                return;
            }
            if state.fetching.contains(&category_id) {
                log::debug!("products of category {} already requested", category_id);
                return;
            }
            let cached = match self.options.product_lists {
                ProductListPolicy::Cached => find_category(&state.tree, category_id).and_then(|c| c.products.clone()),
                ProductListPolicy::AlwaysRefetch => None,
            };
            if cached.is_none() {
                state.fetching.insert(category_id);
            }
            cached
        };

        if let Some(products) = cached {
            log::debug!("category {} products served from cache", category_id);
            self.state().expanded.insert(category_id);
            self.widget.show_products(category_id, &products);
            return;
        }

        let result = self.api.fetch_category_products(category_id).await;
        self.state().fetching.remove(&category_id);
        match result {
            Ok(products) => {
                {
                    let mut state = self.state();
                    match find_category_mut(&mut state.tree, category_id) {
                        Some(category) => category.products = Some(products.clone()),
                        None => log::warn!("category {} not in tree, products not cached", category_id),
                    }
                    state.expanded.insert(category_id);
                }
                self.notifier.success("Produkte erfolgreich abgerufen");
                self.widget.show_products(category_id, &products);
            }
            Err(err) => {
                log::error!("Error fetching products of category {}: {}", category_id, err);
                self.notifier.error(&Failure::ProductListFetch.message(&err));
            }
        }
    }

    /// Persist an edited `sort` value. The input keeps the user's value
    /// even when the server rejects it.
    pub async fn update_sort(&self, product_id: u32, sort: i64) {
        let update = SortUpdate { product_id, sort };
        match self.api.update_product_sort(&update).await {
            Ok(()) => {
                self.remember_sort(product_id, sort);
                self.notifier.success("Sortierwert erfolgreich aktualisiert");
            }
            Err(err) => {
                log::error!("Fehler beim Aktualisieren des Sortierwerts: {}", err);
                self.notifier.error(&Failure::SortUpdate.message(&err));
            }
        }
    }

    /// Keep cached product lists in line with a confirmed sort value
    fn remember_sort(&self, product_id: u32, sort: i64) {
        fn walk(nodes: &mut [crate::models::TreeNode], product_id: u32, sort: i64) {
            for node in nodes {
                if let Some(products) = node.products.as_mut() {
                    products
                        .iter_mut()
                        .filter(|p| p.id == product_id)
                        .for_each(|p| p.sort = Some(sort));
                }
                walk(&mut node.nodes, product_id, sort);
            }
        }
        walk(&mut self.state().tree, product_id, sort);
    }
}
