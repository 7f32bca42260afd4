//! Category Tree Page
//!
//! Wires the tree sync adapter to the sortable widget (or the nested list)
//! and loads the tree once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_sortable_tree::{SortableTree, TreeChange};

use crate::api::HttpBridgeApi;
use crate::components::{nested_tree, AppSync, NodeLabel, ToastService};
use crate::config::{BridgeConfig, TreeVariant};
use crate::node_data::NodeAttrs;
use crate::store::TreeViewHandle;
use crate::sync::{SyncOptions, TreeSync};

#[component]
pub fn CategoryTreePage(config: BridgeConfig, api: HttpBridgeApi, toasts: ToastService) -> impl IntoView {
    let tree_view = TreeViewHandle::new(config.init_collapse_level);
    let sync: AppSync = TreeSync::new(api, toasts, tree_view, SyncOptions::from(&config));

    // Load tree on mount
    let loader = sync.clone();
    Effect::new(move |_| {
        let loader = loader.clone();
        spawn_local(async move { loader.load_tree().await });
    });

    let body = match config.tree_variant {
        TreeVariant::Sortable => sortable_tree(sync, tree_view, config.confirm_move_prompt),
        TreeVariant::Nested => nested_tree(sync, tree_view),
    };

    view! {
        <div class="category-tree">
            <div id="info" style:display=move || if tree_view.is_loading() { "block" } else { "none" }>
                <span class="spinner-border spinner-border-sm"></span>
                " Kategorien werden geladen..."
            </div>
            {body}
        </div>
    }
}

fn sortable_tree(sync: AppSync, tree_view: TreeViewHandle, prompt: String) -> AnyView {
    let confirm = Callback::new(move |(_moved, _target): (NodeAttrs, Option<NodeAttrs>)| {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(&prompt).ok())
            .unwrap_or(false)
    });

    let mover = sync.clone();
    let on_change = Callback::new(move |change: TreeChange<NodeAttrs>| {
        let mover = mover.clone();
        spawn_local(async move { mover.reconcile_move(change).await });
    });

    let render_label = Callback::new(move |attrs: NodeAttrs| {
        view! { <NodeLabel attrs=attrs sync=sync.clone() tree_view=tree_view /> }.into_any()
    });

    view! {
        <div id="tree">
            <SortableTree
                model=tree_view.model()
                render_label=render_label
                confirm=confirm
                on_change=on_change
            />
        </div>
    }
    .into_any()
}
