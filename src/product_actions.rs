//! Product Actions
//!
//! Sync, reload and delete a single product from its row in the tree.

use crate::api::{BridgeApi, ProductAction};
use crate::error::Failure;
use crate::notify::{Notifier, Severity};

/// Announce and run an action, then show the server's report.
/// Returns whether the server reported success.
pub async fn run_product_action<A, N>(api: &A, notifier: &N, action: ProductAction, product_id: u32) -> bool
where
    A: BridgeApi,
    N: Notifier,
{
    notifier.info(action.started_message());
    match api.run_product_action(action, product_id).await {
        Ok(report) => {
            log::info!("{:?} for product {}: {}", action, product_id, report.status);
            notifier.notify(Severity::from_status(&report.status), report.message_text());
            report.is_success()
        }
        Err(err) => {
            log::error!("{:?} for product {} failed: {}", action, product_id, err);
            notifier.error(&Failure::ProductAction.message(&err));
            false
        }
    }
}
