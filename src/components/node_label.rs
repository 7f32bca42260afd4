//! Node Label Component
//!
//! Label of one tree node. Carries the node's `data-*` attributes; category
//! labels also get the product info control and list.

use leptos::html::Span;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AppSync, ProductList};
use crate::dom;
use crate::models::NodeType;
use crate::node_data::NodeAttrs;
use crate::store::TreeViewHandle;

#[component]
pub fn NodeLabel(attrs: NodeAttrs, sync: AppSync, tree_view: TreeViewHandle) -> impl IntoView {
    let span_ref = NodeRef::<Span>::new();
    let label = attrs.label().to_string();
    let category_id = match attrs.node_ref() {
        Some((NodeType::Category, id)) => Some(id),
        _ => None,
    };

    Effect::new(move |_| {
        if let Some(span) = span_ref.get() {
            dom::write_node_attrs(&span, &attrs);
        }
    });

    view! {
        <span class="node-label" node_ref=span_ref>{label}</span>
        {category_id.map(|id| {
            let toggler = sync.clone();
            view! {
                <a
                    href="#"
                    class="btn btn-sm btn-dark info-btn"
                    role="button"
                    on:mousedown=|ev| ev.stop_propagation()
                    on:click=move |ev| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        let toggler = toggler.clone();
                        spawn_local(async move { toggler.toggle_products(id).await });
                    }
                >
                    "i"
                </a>
                <ProductList category_id=id sync=sync.clone() tree_view=tree_view />
            }
        })}
    }
}
