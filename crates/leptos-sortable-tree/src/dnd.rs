//! Mouse-driven drag and drop
//!
//! Uses a movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::model::{DropTarget, NodeKey};

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging: RwSignal<Option<NodeKey>>,
    pub drop_target: RwSignal<Option<DropTarget>>,
    /// Pending node (mousedown but not yet dragging)
    pub pending: RwSignal<Option<NodeKey>>,
    /// Start position for movement detection
    pub start: RwSignal<(i32, i32)>,
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        dragging: RwSignal::new(None),
        drop_target: RwSignal::new(None),
        pending: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
    }
}

impl DndSignals {
    pub fn is_dragging(&self) -> bool {
        self.dragging.get().is_some()
    }

    fn end(&self) {
        self.dragging.set(None);
        self.drop_target.set(None);
        self.pending.set(None);
    }
}

/// Mousedown on a row records a pending drag with its start position
pub fn make_on_mousedown(dnd: DndSignals, key: NodeKey) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Inputs and buttons inside a label keep their own behavior
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
            {
                return;
            }
        }
        dnd.pending.set(Some(key));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// Mouseenter on a row makes it the drop parent
pub fn make_on_node_mouseenter(dnd: DndSignals, key: NodeKey) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging.get_untracked() {
            if dragging != key {
                dnd.drop_target.set(Some(DropTarget::Onto(key)));
            }
        }
    }
}

pub fn make_on_zone_mouseenter(
    dnd: DndSignals,
    parent: Option<NodeKey>,
    index: usize,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.drop_target.set(Some(DropTarget::Between(parent, index)));
        }
    }
}

pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.drop_target.set(None);
        }
    }
}

fn bind_document_listener(event: &str, listener: Closure<dyn FnMut(web_sys::MouseEvent)>) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        if doc
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to bind document {event} listener");
        }
    }
    listener.forget();
}

/// Bind document-level mousemove/mouseup handlers.
/// `on_drop` runs once per completed drag that ended over a target.
pub fn bind_global_handlers<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(NodeKey, DropTarget) + 'static,
{
    bind_document_listener(
        "mousemove",
        Closure::new(move |ev: web_sys::MouseEvent| {
            let Some(pending) = dnd.pending.get_untracked() else { return };
            if dnd.dragging.get_untracked().is_some() {
                return;
            }
            let (start_x, start_y) = dnd.start.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging.set(Some(pending));
            }
        }),
    );

    bind_document_listener(
        "mouseup",
        Closure::new(move |_ev: web_sys::MouseEvent| {
            let dragging = dnd.dragging.get_untracked();
            let target = dnd.drop_target.get_untracked();
            dnd.end();
            // Plain clicks fall through to the element's own handler
            if let (Some(dragged), Some(target)) = (dragging, target) {
                on_drop(dragged, target);
            }
        }),
    );
}
