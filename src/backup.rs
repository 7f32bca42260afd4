//! sw6 Backups
//!
//! Fire-and-report trigger for the shop's database and file backups.

use crate::api::{BackupKind, BridgeApi};
use crate::error::Failure;
use crate::notify::Notifier;

pub fn started_message(kind: BackupKind) -> String {
    format!("{} Backup gestartet! Bitte beachte den Backup Pfad!", kind.label())
}

/// Announce and start a backup. Returns whether the server accepted it.
pub async fn run_backup<A, N>(api: &A, notifier: &N, kind: BackupKind) -> bool
where
    A: BridgeApi,
    N: Notifier,
{
    notifier.info(&started_message(kind));
    match api.start_backup(kind).await {
        Ok(report) => {
            log::info!("{} backup report: {}", kind.label(), report);
            true
        }
        Err(err) => {
            log::error!("{} backup failed: {}", kind.label(), err);
            notifier.error(&Failure::Backup.message(&err));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;

    use super::*;
    use crate::error::{BridgeError, BridgeResult};
    use crate::api::ProductAction;
    use crate::models::{MoveRequest, OpenOrdersResponse, ProductSummary, SortUpdate, StatusResponse, TreeNode};
    use crate::notify::Severity;

    struct BackupApi {
        result: BridgeResult<serde_json::Value>,
        requested: RefCell<Vec<BackupKind>>,
    }

    #[async_trait(?Send)]
    impl BridgeApi for BackupApi {
        async fn fetch_category_tree(&self) -> BridgeResult<Vec<TreeNode>> {
            unreachable!()
        }

        async fn apply_move(&self, _request: &MoveRequest) -> BridgeResult<()> {
            unreachable!()
        }

        async fn fetch_category_products(&self, _category_id: u32) -> BridgeResult<Vec<ProductSummary>> {
            unreachable!()
        }

        async fn update_product_sort(&self, _update: &SortUpdate) -> BridgeResult<()> {
            unreachable!()
        }

        async fn start_backup(&self, kind: BackupKind) -> BridgeResult<serde_json::Value> {
            self.requested.borrow_mut().push(kind);
            self.result.clone()
        }

        async fn fetch_open_order_ids(&self) -> BridgeResult<OpenOrdersResponse> {
            unreachable!()
        }

        async fn sync_order_to_bridge(&self, _order_id: &str) -> BridgeResult<StatusResponse> {
            unreachable!()
        }

        async fn run_product_action(&self, _action: ProductAction, _product_id: u32) -> BridgeResult<StatusResponse> {
            unreachable!()
        }
    }

    #[derive(Default)]
    struct Toasts(RefCell<Vec<(Severity, String)>>);

    impl Notifier for Toasts {
        fn notify(&self, severity: Severity, message: &str) {
            self.0.borrow_mut().push((severity, message.to_string()));
        }
    }

    #[tokio::test]
    async fn test_backup_announces_and_requests() {
        let api = BackupApi { result: Ok(serde_json::json!({"path": "/backups/db.sql"})), requested: RefCell::default() };
        let toasts = Toasts::default();

        assert!(run_backup(&api, &toasts, BackupKind::Database).await);

        assert_eq!(*api.requested.borrow(), vec![BackupKind::Database]);
        assert_eq!(
            *toasts.0.borrow(),
            vec![(Severity::Info, "DB Backup gestartet! Bitte beachte den Backup Pfad!".to_string())]
        );
    }

    #[tokio::test]
    async fn test_backup_failure_is_reported() {
        let api = BackupApi { result: Err(BridgeError::Status(502)), requested: RefCell::default() };
        let toasts = Toasts::default();

        assert!(!run_backup(&api, &toasts, BackupKind::Files).await);

        let toasts = toasts.0.borrow();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[1].0, Severity::Error);
    }
}
