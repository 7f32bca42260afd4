//! Product List Component
//!
//! Products of an expanded category with inline sort inputs and actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AppSync, ProductActions};
use crate::models::ProductSummary;
use crate::store::TreeViewHandle;

#[component]
pub fn ProductList(category_id: u32, sync: AppSync, tree_view: TreeViewHandle) -> impl IntoView {
    move || {
        tree_view.products(category_id).map(|products| {
            let rows = products
                .into_iter()
                .map(|product| view! { <ProductRow product=product sync=sync.clone() /> })
                .collect_view();
            view! { <ul class="product-list">{rows}</ul> }
        })
    }
}

#[component]
fn ProductRow(product: ProductSummary, sync: AppSync) -> impl IntoView {
    let id = product.id;
    let sort_value = product.sort.map(|s| s.to_string()).unwrap_or_default();
    let actions = view! { <ProductActions product_id=id sync=sync.clone() /> };

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match value.trim().parse::<i64>() {
            Ok(sort) => {
                let sync = sync.clone();
                spawn_local(async move { sync.update_sort(id, sort).await });
            }
            Err(_) => log::warn!("ignoring sort value {:?} for product {}", value, id),
        }
    };

    view! {
        <li class="product-row">
            {format!("{} ({}): {}", product.name, product.erp_number, id)}
            <input
                type="number"
                class="sort-input"
                prop:value=sort_value
                on:mousedown=|ev| ev.stop_propagation()
                on:change=on_change
            />
            <span class="product-actions">{actions}</span>
        </li>
    }
}
