//! Bridge REST API
//!
//! Endpoints the admin panel consumes, behind a trait so the sync logic can
//! run against an in-memory double in tests.

mod http;

use async_trait::async_trait;

use crate::error::BridgeResult;
use crate::models::{MoveRequest, OpenOrdersResponse, ProductSummary, SortUpdate, StatusResponse, TreeNode};

pub use http::HttpBridgeApi;

pub const CATEGORY_TREE_PATH: &str = "/api/categories/get_category_tree";
pub const SET_ASSOC_SORT_PATH: &str = "/api/category/set_assoc_sort";
pub const PRODUCT_SORT_PATH: &str = "/api/product/update_sort";

pub const OPEN_ORDER_IDS_PATH: &str = "/api/orders/sw6/get_open_order_ids";

pub fn category_products_path(category_id: u32) -> String {
    format!("/api/products/get_by_category/{}", category_id)
}

pub fn sync_order_path(order_id: &str) -> String {
    format!("/api/orders/sw6/sync_one_to_bridge/{}", order_id)
}

/// sw6 backup jobs the panel can start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupKind {
    Database,
    Files,
}

impl BackupKind {
    pub fn path(&self) -> &'static str {
        match self {
            BackupKind::Database => "/api/sw6/backup/db",
            BackupKind::Files => "/api/sw6/backup/files",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackupKind::Database => "DB",
            BackupKind::Files => "Files",
        }
    }
}

/// Per-product actions offered next to each product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductAction {
    /// Push the bridge product to sw6 (GET)
    SyncToSw6,
    /// Push the bridge product to the ERP (GET)
    SyncToErp,
    /// Reload the bridge product from the ERP (PUT)
    UpdateInBridge,
    /// Remove the product from the bridge (DELETE)
    DeleteInBridge,
}

impl ProductAction {
    pub const ALL: [ProductAction; 4] = [
        ProductAction::SyncToSw6,
        ProductAction::SyncToErp,
        ProductAction::UpdateInBridge,
        ProductAction::DeleteInBridge,
    ];

    pub fn path(&self, product_id: u32) -> String {
        let action = match self {
            ProductAction::SyncToSw6 => "sync_to_sw6",
            ProductAction::SyncToErp => "sync_to_erp",
            ProductAction::UpdateInBridge => "update_in_bridge",
            ProductAction::DeleteInBridge => "delete_in_bridge",
        };
        format!("/api/product/{}/{}", action, product_id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductAction::SyncToSw6 => "SW6",
            ProductAction::SyncToErp => "ERP",
            ProductAction::UpdateInBridge => "Update",
            ProductAction::DeleteInBridge => "Löschen",
        }
    }

    pub fn started_message(&self) -> &'static str {
        match self {
            ProductAction::SyncToSw6 => "Sync SW6 gestartet!",
            ProductAction::SyncToErp => "Sync ERP gestartet!",
            ProductAction::UpdateInBridge => "Produkt wird von ERP geladen",
            ProductAction::DeleteInBridge => "Löschvorgang gestartet!",
        }
    }

    /// Question the user must accept before the action runs
    pub fn confirm_prompt(&self) -> Option<&'static str> {
        match self {
            ProductAction::DeleteInBridge => Some("Sind Sie sicher, dass Sie dieses Produkt löschen möchten?"),
            _ => None,
        }
    }
}

/// Browser futures are not `Send`
#[async_trait(?Send)]
pub trait BridgeApi {
    /// Full category tree (roots in display order)
    async fn fetch_category_tree(&self) -> BridgeResult<Vec<TreeNode>>;

    /// Persist a drag-and-drop move
    async fn apply_move(&self, request: &MoveRequest) -> BridgeResult<()>;

    /// Products of one category; a non-success status is an error
    async fn fetch_category_products(&self, category_id: u32) -> BridgeResult<Vec<ProductSummary>>;

    async fn update_product_sort(&self, update: &SortUpdate) -> BridgeResult<()>;

    /// Start a backup job, returns the server's JSON report
    async fn start_backup(&self, kind: BackupKind) -> BridgeResult<serde_json::Value>;

    /// Ids of sw6 orders not yet pulled into the bridge
    async fn fetch_open_order_ids(&self) -> BridgeResult<OpenOrdersResponse>;

    /// Pull one sw6 order into the bridge
    async fn sync_order_to_bridge(&self, order_id: &str) -> BridgeResult<StatusResponse>;

    async fn run_product_action(&self, action: ProductAction, product_id: u32) -> BridgeResult<StatusResponse>;
}
