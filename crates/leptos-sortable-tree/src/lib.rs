//! Leptos Sortable Tree
//!
//! Drag-and-drop hierarchical list for Leptos.
//! The widget is payload-agnostic: owners supply node payloads, a label
//! renderer, a confirmation hook and a change callback.

mod dnd;
mod model;
mod view;

pub use dnd::DndSignals;
pub use model::{DropTarget, Line, NodeKey, PlannedMove, Row, TreeChange, TreeModel};
pub use view::SortableTree;
