//! Sortable Tree Component
//!
//! Renders a [`TreeModel`] as indented rows with drop zones between them.

use leptos::prelude::*;

use crate::dnd::*;
use crate::model::{DropTarget, Line, NodeKey, Row, TreeChange, TreeModel};

/// Sortable tree with drag-and-drop reordering and reparenting.
///
/// The widget applies accepted moves to `model` itself and reports them
/// through `on_change` afterwards.
///
/// # Arguments
/// * `model` - Tree state, replaced by the owner to re-render from scratch
/// * `render_label` - Markup for one node payload
/// * `confirm` - Asked with (moved, new parent) before a move is applied;
///   runs while `model` is borrowed for writing, so it must not read it
/// * `on_change` - Called after a move was applied
#[component]
pub fn SortableTree<T>(
    model: RwSignal<TreeModel<T>>,
    render_label: Callback<T, AnyView>,
    confirm: Callback<(T, Option<T>), bool>,
    on_change: Callback<TreeChange<T>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let dnd = create_dnd_signals();

    bind_global_handlers(dnd, move |dragged, target| {
        let mut change = None;
        model.maybe_update(|m| {
            change = m.try_move(dragged, target, |moved, parent| confirm.run((moved.clone(), parent.cloned())));
            change.is_some()
        });
        match change {
            Some(change) => on_change.run(change),
            None => log::debug!("drop not applied: {:?} -> {:?}", dragged, target),
        }
    });

    let lines = move || model.with(|m| m.visible_lines());

    view! {
        <div class="sortable-tree">
            <For
                each=lines
                key=|line| *line
                children=move |line: Line| match line {
                    Line::Node(row) => view! { <TreeRow model=model dnd=dnd row=row render_label=render_label /> }.into_any(),
                    Line::Zone { parent, index, depth } => view! { <DropZone dnd=dnd parent=parent index=index depth=depth /> }.into_any(),
                }
            />
        </div>
    }
}

#[component]
fn TreeRow<T>(model: RwSignal<TreeModel<T>>, dnd: DndSignals, row: Row, render_label: Callback<T, AnyView>) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let key = row.key;
    // Rows are keyed by model generation, so the payload is current
    let data = model.with_untracked(|m| m.get(key).cloned());

    let on_mousedown = make_on_mousedown(dnd, key);
    let on_mouseenter = make_on_node_mouseenter(dnd, key);
    let on_mouseleave = make_on_mouseleave(dnd);

    let row_class = move || {
        let mut c = String::from("tree-node-row");
        if dnd.dragging.get() == Some(key) { c.push_str(" dragging"); }
        if dnd.drop_target.get() == Some(DropTarget::Onto(key)) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=row_class
            style=format!("margin-left: {}px;", row.depth * 24)
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <CollapseToggle model=model node=key row=row />
            {data.map(|d| render_label.run(d))}
        </div>
    }
}

#[component]
fn CollapseToggle<T>(model: RwSignal<TreeModel<T>>, node: NodeKey, row: Row) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    if row.has_children {
        view! {
            <button class="collapse-btn" on:click=move |ev| {
                ev.stop_propagation();
                model.update(|m| m.toggle_collapsed(node));
            }>
                {if row.collapsed { "▶" } else { "▼" }}
            </button>
        }
        .into_any()
    } else {
        view! { <span class="collapse-placeholder">"·"</span> }.into_any()
    }
}

/// Horizontal separator accepting drops between rows
#[component]
fn DropZone(dnd: DndSignals, parent: Option<NodeKey>, index: usize, depth: usize) -> impl IntoView {
    let on_mouseenter = make_on_zone_mouseenter(dnd, parent, index);
    let on_mouseleave = make_on_mouseleave(dnd);

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if !dnd.is_dragging() { c.push_str(" hidden"); }
        if dnd.drop_target.get() == Some(DropTarget::Between(parent, index)) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            style=format!("margin-left: {}px;", depth * 24)
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
