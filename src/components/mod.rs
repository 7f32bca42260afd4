//! UI Components
//!
//! Leptos components of the admin panel.

mod backup_panel;
mod category_tree;
mod nested_tree;
mod node_label;
mod order_sync_panel;
mod product_actions;
mod product_list;
mod toast_stack;

pub use backup_panel::BackupPanel;
pub use category_tree::CategoryTreePage;
pub use nested_tree::nested_tree;
pub use node_label::NodeLabel;
pub use order_sync_panel::OrderSyncPanel;
pub use product_actions::ProductActions;
pub use product_list::ProductList;
pub use toast_stack::{ToastService, ToastStack};

use crate::api::HttpBridgeApi;
use crate::store::TreeViewHandle;
use crate::sync::TreeSync;

/// Tree sync adapter as wired in the browser
pub type AppSync = TreeSync<HttpBridgeApi, ToastService, TreeViewHandle>;
